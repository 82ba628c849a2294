//! Position representations.
//!
//! A representation is a numeric encoding of a position. Any type that
//! implements [`Representation`] can be stored as the `data` of a
//! [`Frame`](crate::frame::Frame); anything else is rejected at compile time.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::point::{ComponentError, IndexedPoint, Point};
use crate::units::{AngleUnit, Degree};

/// Capability root for position encodings.
pub trait Representation: Copy + Default + fmt::Debug + PartialEq {
    /// Underlying point storage. Its dimension is the component count.
    type Point: IndexedPoint;

    fn point(&self) -> &Self::Point;

    fn point_mut(&mut self) -> &mut Self::Point;
}

/// Spherical position: (latitude, longitude, distance).
///
/// Both angles are stored in unit `U`; distance is unitless from the point of
/// view of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SphericalRepresentation<U: AngleUnit = Degree> {
    point: Point<3>,
    #[serde(skip)]
    unit: PhantomData<U>,
}

impl<U: AngleUnit> SphericalRepresentation<U> {
    pub const fn new(lat: f64, lon: f64, distance: f64) -> Self {
        Self {
            point: Point::new([lat, lon, distance]),
            unit: PhantomData,
        }
    }

    pub const fn lat(&self) -> f64 {
        self.point.get::<0>()
    }

    pub const fn lon(&self) -> f64 {
        self.point.get::<1>()
    }

    pub const fn distance(&self) -> f64 {
        self.point.get::<2>()
    }

    pub fn set_lat(&mut self, lat: f64) {
        self.point.set::<0>(lat);
    }

    pub fn set_lon(&mut self, lon: f64) {
        self.point.set::<1>(lon);
    }

    pub fn set_distance(&mut self, distance: f64) {
        self.point.set::<2>(distance);
    }

    /// Overwrite all three components at once.
    pub fn set_lat_lon_dist(&mut self, lat: f64, lon: f64, distance: f64) {
        self.point = Point::new([lat, lon, distance]);
    }
}

impl<U: AngleUnit> Representation for SphericalRepresentation<U> {
    type Point = Point<3>;

    fn point(&self) -> &Point<3> {
        &self.point
    }

    fn point_mut(&mut self) -> &mut Point<3> {
        &mut self.point
    }
}

impl<U: AngleUnit> TryFrom<&[f64]> for SphericalRepresentation<U> {
    type Error = ComponentError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Ok(Self {
            point: Point::try_from(values)?,
            unit: PhantomData,
        })
    }
}

impl<U: AngleUnit> fmt::Display for SphericalRepresentation<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Spherical(lat={}{s}, lon={}{s}, distance={})",
            self.lat(),
            self.lon(),
            self.distance(),
            s = U::SYMBOL,
        )
    }
}

/// Cartesian position: (x, y, z). Has no angular components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartesianRepresentation {
    point: Point<3>,
}

impl CartesianRepresentation {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { point: Point::new([x, y, z]) }
    }

    pub const fn x(&self) -> f64 {
        self.point.get::<0>()
    }

    pub const fn y(&self) -> f64 {
        self.point.get::<1>()
    }

    pub const fn z(&self) -> f64 {
        self.point.get::<2>()
    }

    pub fn set_x_y_z(&mut self, x: f64, y: f64, z: f64) {
        self.point = Point::new([x, y, z]);
    }
}

impl Representation for CartesianRepresentation {
    type Point = Point<3>;

    fn point(&self) -> &Point<3> {
        &self.point
    }

    fn point_mut(&mut self) -> &mut Point<3> {
        &mut self.point
    }
}

impl TryFrom<&[f64]> for CartesianRepresentation {
    type Error = ComponentError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Ok(Self { point: Point::try_from(values)? })
    }
}

impl fmt::Display for CartesianRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cartesian(x={}, y={}, z={})", self.x(), self.y(), self.z())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Radian;

    #[test]
    fn test_spherical_component_order() {
        let rep = SphericalRepresentation::<Degree>::new(10.0, 20.0, 100.0);
        assert_eq!(rep.point().to_array(), [10.0, 20.0, 100.0]);
        assert_eq!(rep.lat(), 10.0);
        assert_eq!(rep.lon(), 20.0);
        assert_eq!(rep.distance(), 100.0);
    }

    #[test]
    fn test_spherical_accepts_out_of_range_values() {
        // No range checks: latitude 400 and negative distance pass through.
        let mut rep = SphericalRepresentation::<Degree>::default();
        rep.set_lat_lon_dist(400.0, -720.0, -1.0);
        assert_eq!(rep.lat(), 400.0);
        assert_eq!(rep.lon(), -720.0);
        assert_eq!(rep.distance(), -1.0);
    }

    #[test]
    fn test_unit_tag_does_not_convert() {
        let deg = SphericalRepresentation::<Degree>::new(1.0, 2.0, 3.0);
        let rad = SphericalRepresentation::<Radian>::new(1.0, 2.0, 3.0);
        assert_eq!(deg.point(), rad.point());
        assert_eq!(std::mem::size_of_val(&deg), std::mem::size_of::<[f64; 3]>());
    }

    #[test]
    fn test_point_mut_writes_single_component() {
        let mut rep = CartesianRepresentation::new(1.0, 2.0, 3.0);
        rep.point_mut().set::<1>(5.0);
        assert_eq!((rep.x(), rep.y(), rep.z()), (1.0, 5.0, 3.0));
    }

    #[test]
    fn test_try_from_slice() {
        let rep = SphericalRepresentation::<Radian>::try_from(&[0.1, 0.2, 0.3][..]).unwrap();
        assert_eq!(rep.lon(), 0.2);
        assert!(CartesianRepresentation::try_from(&[1.0][..]).is_err());
    }

    #[test]
    fn test_display() {
        let rep = SphericalRepresentation::<Degree>::new(1.0, 2.0, 3.0);
        assert_eq!(rep.to_string(), "Spherical(lat=1°, lon=2°, distance=3)");
        let rep = SphericalRepresentation::<Radian>::new(1.0, 2.0, 3.0);
        assert_eq!(rep.to_string(), "Spherical(lat=1rad, lon=2rad, distance=3)");
    }

    #[test]
    fn test_serde_skips_unit_tag() {
        let rep = SphericalRepresentation::<Degree>::new(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&rep).unwrap();
        assert_eq!(json, r#"{"point":[1.0,2.0,3.0]}"#);
    }
}
