//! Fixed-size numeric point storage.
//!
//! Every representation and differential keeps its components in a
//! [`Point`]. Components are addressed by position, either with a
//! compile-time index (`get::<I>()`, rejected at build time when `I` is out
//! of range) or at runtime through [`IndexedPoint`].

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors raised by runtime component access.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentError {
    #[error("expected {expected} components, got {got}")]
    Count { expected: usize, got: usize },

    #[error("component index {index} out of range for a {dimension}-component point")]
    Index { index: usize, dimension: usize },

    #[error("expected 3 (position) or 6 (position and motion) components, got {got}")]
    FrameCount { got: usize },
}

/// Runtime indexed access to a fixed-size point.
pub trait IndexedPoint: Copy + Default + fmt::Debug + PartialEq {
    /// Number of components.
    const DIMENSION: usize;

    /// Component at `index`, or `None` past the end.
    fn component(&self, index: usize) -> Option<f64>;

    /// Overwrite the component at `index`.
    fn set_component(&mut self, index: usize, value: f64) -> Result<(), ComponentError>;
}

/// `N` numeric components in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const N: usize>([f64; N]);

impl<const N: usize> Point<N> {
    pub const fn new(components: [f64; N]) -> Self {
        Self(components)
    }

    /// Component `I`. Fails to compile when `I >= N`.
    #[inline]
    pub const fn get<const I: usize>(&self) -> f64 {
        const { assert!(I < N, "point component index out of range") };
        self.0[I]
    }

    /// Overwrite component `I`. Fails to compile when `I >= N`.
    #[inline]
    pub fn set<const I: usize>(&mut self, value: f64) {
        const { assert!(I < N, "point component index out of range") };
        self.0[I] = value;
    }

    pub const fn to_array(self) -> [f64; N] {
        self.0
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl<const N: usize> Default for Point<N> {
    fn default() -> Self {
        Self([0.0; N])
    }
}

impl<const N: usize> IndexedPoint for Point<N> {
    const DIMENSION: usize = N;

    fn component(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    fn set_component(&mut self, index: usize, value: f64) -> Result<(), ComponentError> {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => {
                tracing::debug!(index, dimension = N, "rejected out-of-range component write");
                Err(ComponentError::Index { index, dimension: N })
            }
        }
    }
}

impl<const N: usize> From<[f64; N]> for Point<N> {
    fn from(components: [f64; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> TryFrom<&[f64]> for Point<N> {
    type Error = ComponentError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let components: [f64; N] = values.try_into().map_err(|_| {
            tracing::debug!(expected = N, got = values.len(), "rejected component slice");
            ComponentError::Count { expected: N, got: values.len() }
        })?;
        Ok(Self(components))
    }
}

impl<const N: usize> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

// serde only implements array traits up to a fixed length, so points are
// written as tuples by hand.
impl<const N: usize> Serialize for Point<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(N)?;
        for c in &self.0 {
            tup.serialize_element(c)?;
        }
        tup.end()
    }
}

impl<'de, const N: usize> Deserialize<'de> for Point<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PointVisitor<const N: usize>(PhantomData<[f64; N]>);

        impl<'de, const N: usize> Visitor<'de> for PointVisitor<N> {
            type Value = Point<N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {N} numbers")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Point<N>, A::Error> {
                let mut components = [0.0; N];
                for (i, slot) in components.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(Point(components))
            }
        }

        deserializer.deserialize_tuple(N, PointVisitor::<N>(PhantomData))
    }
}
