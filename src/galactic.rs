//! Galactic coordinates.
//!
//! `b` is galactic latitude, `l` galactic longitude. Proper motions are
//! `pm_b` and `pm_l_cosb` (longitude rate times cos(b)).
//!
//! # Example
//! ```
//! use skyframe::{Degree, Galactic};
//!
//! let g = Galactic::<Degree, Degree>::with_motion(10.0, 20.0, 100.0, 0.5, 0.3, 15.0);
//! assert_eq!(g.b(), 10.0);
//! assert_eq!(g.l(), 20.0);
//! assert_eq!(g.radial_velocity(), 15.0);
//! ```

use crate::named::spherical_frame;

spherical_frame! {
    /// A position (and optional motion) in the galactic frame.
    ///
    /// `RU` tags the position angles, `DU` the proper-motion angles. Values
    /// are stored as given; no range checks or unit conversion happen.
    Galactic {
        lat: (b, set_b),
        lon: (l, set_l),
        pm_lat: (pm_b, set_pm_b),
        pm_lon_coslat: (pm_l_cosb, set_pm_l_cosb),
    }
}
