//! International Celestial Reference System.
//!
//! `dec` is declination (latitude-like), `ra` right ascension
//! (longitude-like). The proper motion in right ascension carries the usual
//! cos(dec) factor.

use crate::named::spherical_frame;

spherical_frame! {
    /// A position (and optional motion) in ICRS.
    Icrs {
        lat: (dec, set_dec),
        lon: (ra, set_ra),
        pm_lat: (pm_dec, set_pm_dec),
        pm_lon_coslat: (pm_ra_cosdec, set_pm_ra_cosdec),
    }
}
