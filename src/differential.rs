//! Velocity differentials.
//!
//! A differential holds first time-derivatives of a representation's
//! components. It is paired with a representation inside a
//! [`Frame`](crate::frame::Frame); the pairing requires the same point
//! storage (and so the same component count) but the angle units of the two
//! halves are independent.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::point::{ComponentError, IndexedPoint, Point};
use crate::units::{AngleUnit, Degree};

/// Capability root for velocity encodings.
pub trait Differential: Copy + Default + fmt::Debug + PartialEq {
    type Point: IndexedPoint;

    fn point(&self) -> &Self::Point;

    fn point_mut(&mut self) -> &mut Self::Point;
}

/// Spherical motion with the longitude rate pre-multiplied by cos(lat):
/// (d_lat, d_lon_coslat, d_distance).
///
/// This is the usual astrometric proper-motion convention.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SphericalCoslatDifferential<U: AngleUnit = Degree> {
    point: Point<3>,
    #[serde(skip)]
    unit: PhantomData<U>,
}

impl<U: AngleUnit> SphericalCoslatDifferential<U> {
    pub const fn new(d_lat: f64, d_lon_coslat: f64, d_distance: f64) -> Self {
        Self {
            point: Point::new([d_lat, d_lon_coslat, d_distance]),
            unit: PhantomData,
        }
    }

    pub const fn d_lat(&self) -> f64 {
        self.point.get::<0>()
    }

    pub const fn d_lon_coslat(&self) -> f64 {
        self.point.get::<1>()
    }

    pub const fn d_distance(&self) -> f64 {
        self.point.get::<2>()
    }

    pub fn set_d_lat(&mut self, d_lat: f64) {
        self.point.set::<0>(d_lat);
    }

    pub fn set_d_lon_coslat(&mut self, d_lon_coslat: f64) {
        self.point.set::<1>(d_lon_coslat);
    }

    pub fn set_d_distance(&mut self, d_distance: f64) {
        self.point.set::<2>(d_distance);
    }

    pub fn set_dlat_dlon_coslat_ddist(&mut self, d_lat: f64, d_lon_coslat: f64, d_distance: f64) {
        self.point = Point::new([d_lat, d_lon_coslat, d_distance]);
    }
}

impl<U: AngleUnit> Differential for SphericalCoslatDifferential<U> {
    type Point = Point<3>;

    fn point(&self) -> &Point<3> {
        &self.point
    }

    fn point_mut(&mut self) -> &mut Point<3> {
        &mut self.point
    }
}

impl<U: AngleUnit> TryFrom<&[f64]> for SphericalCoslatDifferential<U> {
    type Error = ComponentError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Ok(Self {
            point: Point::try_from(values)?,
            unit: PhantomData,
        })
    }
}

impl<U: AngleUnit> fmt::Display for SphericalCoslatDifferential<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SphericalCoslat(d_lat={}{s}, d_lon_coslat={}{s}, d_distance={})",
            self.d_lat(),
            self.d_lon_coslat(),
            self.d_distance(),
            s = U::SYMBOL,
        )
    }
}

/// Spherical motion without the cos(lat) factor: (d_lat, d_lon, d_distance).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SphericalDifferential<U: AngleUnit = Degree> {
    point: Point<3>,
    #[serde(skip)]
    unit: PhantomData<U>,
}

impl<U: AngleUnit> SphericalDifferential<U> {
    pub const fn new(d_lat: f64, d_lon: f64, d_distance: f64) -> Self {
        Self {
            point: Point::new([d_lat, d_lon, d_distance]),
            unit: PhantomData,
        }
    }

    pub const fn d_lat(&self) -> f64 {
        self.point.get::<0>()
    }

    pub const fn d_lon(&self) -> f64 {
        self.point.get::<1>()
    }

    pub const fn d_distance(&self) -> f64 {
        self.point.get::<2>()
    }

    pub fn set_dlat_dlon_ddist(&mut self, d_lat: f64, d_lon: f64, d_distance: f64) {
        self.point = Point::new([d_lat, d_lon, d_distance]);
    }
}

impl<U: AngleUnit> Differential for SphericalDifferential<U> {
    type Point = Point<3>;

    fn point(&self) -> &Point<3> {
        &self.point
    }

    fn point_mut(&mut self) -> &mut Point<3> {
        &mut self.point
    }
}

impl<U: AngleUnit> fmt::Display for SphericalDifferential<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SphericalDifferential(d_lat={}{s}, d_lon={}{s}, d_distance={})",
            self.d_lat(),
            self.d_lon(),
            self.d_distance(),
            s = U::SYMBOL,
        )
    }
}

/// Cartesian motion: (d_x, d_y, d_z).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartesianDifferential {
    point: Point<3>,
}

impl CartesianDifferential {
    pub const fn new(d_x: f64, d_y: f64, d_z: f64) -> Self {
        Self { point: Point::new([d_x, d_y, d_z]) }
    }

    pub const fn d_x(&self) -> f64 {
        self.point.get::<0>()
    }

    pub const fn d_y(&self) -> f64 {
        self.point.get::<1>()
    }

    pub const fn d_z(&self) -> f64 {
        self.point.get::<2>()
    }
}

impl Differential for CartesianDifferential {
    type Point = Point<3>;

    fn point(&self) -> &Point<3> {
        &self.point
    }

    fn point_mut(&mut self) -> &mut Point<3> {
        &mut self.point
    }
}
