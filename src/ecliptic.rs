//! Ecliptic coordinates: ecliptic latitude `lat` and longitude `lon`.

use crate::named::spherical_frame;

spherical_frame! {
    /// A position (and optional motion) in ecliptic coordinates.
    Ecliptic {
        lat: (lat, set_lat),
        lon: (lon, set_lon),
        pm_lat: (pm_lat, set_pm_lat),
        pm_lon_coslat: (pm_lon_coslat, set_pm_lon_coslat),
    }
}
