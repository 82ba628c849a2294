//! Generic frame: one representation plus one differential.
//!
//! The trait bounds live on the struct itself, so naming a `Frame` over a
//! type that is not a [`Representation`] (or a [`Differential`] whose point
//! storage differs from the representation's) is a compile error, not a
//! runtime check.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::differential::Differential;
use crate::representation::Representation;

/// Position `data` of type `R` with `motion` of type `D`.
///
/// A frame built without motion holds `D::default()`, which is all-zero for
/// every differential in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame<R, D>
where
    R: Representation,
    D: Differential<Point = R::Point>,
{
    data: R,
    motion: D,
}

impl<R, D> Frame<R, D>
where
    R: Representation,
    D: Differential<Point = R::Point>,
{
    pub fn new(data: R, motion: D) -> Self {
        Self { data, motion }
    }

    /// Frame with the given position and zero motion.
    pub fn from_representation(data: R) -> Self {
        Self { data, motion: D::default() }
    }

    pub fn data(&self) -> &R {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut R {
        &mut self.data
    }

    pub fn differential(&self) -> &D {
        &self.motion
    }

    pub fn differential_mut(&mut self) -> &mut D {
        &mut self.motion
    }

    pub fn set_data(&mut self, data: R) {
        self.data = data;
    }

    pub fn set_differential(&mut self, motion: D) {
        self.motion = motion;
    }

    pub fn into_parts(self) -> (R, D) {
        (self.data, self.motion)
    }
}

impl<R, D> fmt::Display for Frame<R, D>
where
    R: Representation + fmt::Display,
    D: Differential<Point = R::Point> + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({}, {})", self.data, self.motion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differential::{CartesianDifferential, SphericalCoslatDifferential, SphericalDifferential};
    use crate::point::IndexedPoint;
    use crate::representation::{CartesianRepresentation, SphericalRepresentation};
    use crate::units::{Degree, Radian};

    type SkyFrame = Frame<SphericalRepresentation<Degree>, SphericalCoslatDifferential<Radian>>;

    #[test]
    fn test_default_frame_is_zero() {
        let frame = SkyFrame::default();
        assert_eq!(frame.data().point().to_array(), [0.0; 3]);
        assert_eq!(frame.differential().point().to_array(), [0.0; 3]);
    }

    #[test]
    fn test_from_representation_leaves_zero_motion() {
        let frame = SkyFrame::from_representation(SphericalRepresentation::new(1.0, 2.0, 3.0));
        assert_eq!(frame.data().lat(), 1.0);
        assert_eq!(*frame.differential(), SphericalCoslatDifferential::default());
    }

    #[test]
    fn test_mutation_through_accessors() {
        let mut frame = SkyFrame::new(
            SphericalRepresentation::new(1.0, 2.0, 3.0),
            SphericalCoslatDifferential::new(4.0, 5.0, 6.0),
        );
        frame.data_mut().point_mut().set::<2>(30.0);
        frame.differential_mut().point_mut().set::<0>(40.0);
        assert_eq!(frame.data().point().to_array(), [1.0, 2.0, 30.0]);
        assert_eq!(frame.differential().point().to_array(), [40.0, 5.0, 6.0]);

        frame.set_differential(SphericalCoslatDifferential::new(0.0, 0.0, 1.0));
        assert_eq!(frame.differential().d_distance(), 1.0);
        assert_eq!(frame.data().distance(), 30.0);
    }

    #[test]
    fn test_copies_are_independent() {
        let original = SkyFrame::new(
            SphericalRepresentation::new(1.0, 2.0, 3.0),
            SphericalCoslatDifferential::new(4.0, 5.0, 6.0),
        );
        let mut copy = original;
        copy.set_data(SphericalRepresentation::new(-1.0, -2.0, -3.0));
        assert_eq!(original.data().lat(), 1.0);
        assert_ne!(original, copy);
    }

    #[test]
    fn test_other_building_blocks_compose() {
        let cartesian = Frame::new(
            CartesianRepresentation::new(1.0, 2.0, 3.0),
            CartesianDifferential::new(0.1, 0.2, 0.3),
        );
        let (data, motion) = cartesian.into_parts();
        assert_eq!(data.y(), 2.0);
        assert_eq!(motion.d_z(), 0.3);

        // Position and motion encodings do not have to be the same kind.
        let mixed: Frame<CartesianRepresentation, SphericalDifferential<Radian>> =
            Frame::from_representation(CartesianRepresentation::new(1.0, 0.0, 0.0));
        assert_eq!(mixed.differential().point().component(1), Some(0.0));
    }

    #[test]
    fn test_display() {
        let frame = Frame::new(
            SphericalRepresentation::<Degree>::new(1.0, 2.0, 3.0),
            SphericalCoslatDifferential::<Degree>::new(4.0, 5.0, 6.0),
        );
        assert_eq!(
            frame.to_string(),
            "Frame(Spherical(lat=1°, lon=2°, distance=3), \
             SphericalCoslat(d_lat=4°, d_lon_coslat=5°, d_distance=6))"
        );
    }
}
