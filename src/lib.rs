//! # skyframe
//!
//! Strongly typed astronomical reference frames.
//!
//! A frame is built from two reusable pieces: a position
//! [`Representation`] and a velocity [`Differential`]. The generic
//! [`Frame`] binds one of each, and named frames such as [`Galactic`] or
//! [`Icrs`] rename the components to their usual astronomical names.
//! Angle units ([`Degree`], [`Radian`]) are zero-sized type tags, so the
//! unit a value is stored in is part of its type and costs nothing at
//! runtime. Values are never converted or range-checked.
//!
//! ```
//! use skyframe::{Degree, Galactic, Radian};
//!
//! let mut g = Galactic::<Degree, Radian>::with_motion(10.0, 20.0, 100.0, 0.5, 0.3, 15.0);
//! g.set_b(-5.0);
//! assert_eq!(g.components(), [-5.0, 20.0, 100.0, 0.5, 0.3, 15.0]);
//! ```
//!
//! New building blocks only have to implement the capability trait:
//!
//! ```
//! use skyframe::{Frame, Point, Representation, SphericalCoslatDifferential, Degree};
//!
//! /// Unit-vector direction plus distance, stored as (u, v, distance).
//! #[derive(Debug, Clone, Copy, Default, PartialEq)]
//! struct Projected(Point<3>);
//!
//! impl Representation for Projected {
//!     type Point = Point<3>;
//!     fn point(&self) -> &Point<3> { &self.0 }
//!     fn point_mut(&mut self) -> &mut Point<3> { &mut self.0 }
//! }
//!
//! let frame: Frame<Projected, SphericalCoslatDifferential<Degree>> =
//!     Frame::from_representation(Projected(Point::new([0.1, 0.2, 3.0])));
//! assert_eq!(frame.data().point().get::<2>(), 3.0);
//! ```
//!
//! # Rejected compositions
//!
//! A frame cannot hold a type that is not a representation:
//!
//! ```compile_fail
//! use skyframe::{Degree, Frame, SphericalCoslatDifferential};
//!
//! let _ = Frame::<f64, SphericalCoslatDifferential<Degree>>::default();
//! ```
//!
//! A differential is not a representation, even with the same storage:
//!
//! ```compile_fail
//! use skyframe::{Degree, Frame, SphericalCoslatDifferential};
//!
//! type Wrong = Frame<SphericalCoslatDifferential<Degree>, SphericalCoslatDifferential<Degree>>;
//! let _ = Wrong::default();
//! ```
//!
//! Named-frame constructors check each argument against its capability:
//!
//! ```compile_fail
//! use skyframe::{Degree, Galactic, SphericalCoslatDifferential};
//!
//! let motion = SphericalCoslatDifferential::<Degree>::new(0.5, 0.3, 15.0);
//! let _ = Galactic::<Degree, Degree>::from_representation(motion);
//! ```
//!
//! ```compile_fail
//! use skyframe::{Degree, Galactic, SphericalRepresentation};
//!
//! let rep = SphericalRepresentation::<Degree>::new(10.0, 20.0, 100.0);
//! let _ = Galactic::<Degree, Degree>::from_parts(rep, rep);
//! ```
//!
//! Position and motion must have the same number of components:
//!
//! ```compile_fail
//! use skyframe::{Degree, Differential, Frame, Point, SphericalRepresentation};
//!
//! #[derive(Debug, Clone, Copy, Default, PartialEq)]
//! struct PlanarMotion(Point<2>);
//!
//! impl Differential for PlanarMotion {
//!     type Point = Point<2>;
//!     fn point(&self) -> &Point<2> { &self.0 }
//!     fn point_mut(&mut self) -> &mut Point<2> { &mut self.0 }
//! }
//!
//! let _ = Frame::<SphericalRepresentation<Degree>, PlanarMotion>::default();
//! ```
//!
//! Component indices are checked at build time:
//!
//! ```compile_fail
//! use skyframe::Point;
//!
//! let p = Point::new([1.0, 2.0, 3.0]);
//! let _ = p.get::<3>();
//! ```

pub mod differential;
pub mod ecliptic;
pub mod frame;
pub mod galactic;
pub mod icrs;
mod named;
pub mod point;
pub mod representation;
pub mod supergalactic;
pub mod units;

#[cfg(feature = "python")]
mod pybridge;

pub use differential::{
    CartesianDifferential, Differential, SphericalCoslatDifferential, SphericalDifferential,
};
pub use ecliptic::Ecliptic;
pub use frame::Frame;
pub use galactic::Galactic;
pub use icrs::Icrs;
pub use point::{ComponentError, IndexedPoint, Point};
pub use representation::{CartesianRepresentation, Representation, SphericalRepresentation};
pub use supergalactic::Supergalactic;
pub use units::{AngleUnit, Degree, Radian};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn skyframe(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pybridge::register(m)?;
    Ok(())
}
