//! Angle-unit tags.
//!
//! A unit tag is a zero-sized type used as a generic parameter on
//! representations and differentials. It decides how the stored angular
//! components are *interpreted*; nothing in this crate converts between
//! units, so a `SphericalRepresentation<Degree>` holding `1.0` means one
//! degree and a `SphericalRepresentation<Radian>` holding `1.0` means one
//! radian.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Marker trait for angle-unit tags.
pub trait AngleUnit:
    Copy + Clone + Default + Debug + PartialEq + Eq + Send + Sync + 'static
{
    /// Human-readable unit name.
    const NAME: &'static str;
    /// Short symbol used by `Display` impls.
    const SYMBOL: &'static str;
}

/// Angles stored in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Degree;

/// Angles stored in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Radian;

impl AngleUnit for Degree {
    const NAME: &'static str = "degree";
    const SYMBOL: &'static str = "°";
}

impl AngleUnit for Radian {
    const NAME: &'static str = "radian";
    const SYMBOL: &'static str = "rad";
}
