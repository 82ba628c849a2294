//! Python bindings via PyO3.
//!
//! Exposes the degree/degree instantiations of the galactic and ICRS frames.
use pyo3::prelude::*;

use crate::galactic::Galactic;
use crate::icrs::Icrs;
use crate::units::Degree;

// Galactic
#[pyclass(name = "Galactic")]
#[derive(Clone)]
pub struct PyGalactic {
    inner: Galactic<Degree, Degree>,
}

#[pymethods]
impl PyGalactic {
    /// Create a galactic coordinate (angles in degrees).
    ///
    /// Motion defaults to zero when omitted.
    #[new]
    #[pyo3(signature = (b, l, distance, pm_b=0.0, pm_l_cosb=0.0, radial_velocity=0.0))]
    fn new(b: f64, l: f64, distance: f64, pm_b: f64, pm_l_cosb: f64, radial_velocity: f64) -> Self {
        PyGalactic {
            inner: Galactic::with_motion(b, l, distance, pm_b, pm_l_cosb, radial_velocity),
        }
    }

    /// Build from a list of 3 or 6 values.
    #[staticmethod]
    fn from_components(values: Vec<f64>) -> PyResult<Self> {
        Galactic::from_components(&values)
            .map(|g| PyGalactic { inner: g })
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    /// [b, l, distance, pm_b, pm_l_cosb, radial_velocity]
    fn components(&self) -> Vec<f64> {
        self.inner.components().to_vec()
    }

    #[getter] fn b(&self) -> f64 { self.inner.b() }
    #[getter] fn l(&self) -> f64 { self.inner.l() }
    #[getter] fn distance(&self) -> f64 { self.inner.distance() }
    #[getter] fn pm_b(&self) -> f64 { self.inner.pm_b() }
    #[getter] fn pm_l_cosb(&self) -> f64 { self.inner.pm_l_cosb() }
    #[getter] fn radial_velocity(&self) -> f64 { self.inner.radial_velocity() }

    #[setter] fn set_b(&mut self, b: f64) { self.inner.set_b(b) }
    #[setter] fn set_l(&mut self, l: f64) { self.inner.set_l(l) }
    #[setter] fn set_distance(&mut self, distance: f64) { self.inner.set_distance(distance) }
    #[setter] fn set_pm_b(&mut self, pm_b: f64) { self.inner.set_pm_b(pm_b) }
    #[setter] fn set_pm_l_cosb(&mut self, pm_l_cosb: f64) { self.inner.set_pm_l_cosb(pm_l_cosb) }
    #[setter] fn set_radial_velocity(&mut self, rv: f64) { self.inner.set_radial_velocity(rv) }

    fn __repr__(&self) -> String {
        format!("{}", self.inner)
    }
}

// ICRS
#[pyclass(name = "ICRS")]
#[derive(Clone)]
pub struct PyIcrs {
    inner: Icrs<Degree, Degree>,
}

#[pymethods]
impl PyIcrs {
    /// Create an ICRS coordinate (angles in degrees).
    #[new]
    #[pyo3(signature = (dec, ra, distance, pm_dec=0.0, pm_ra_cosdec=0.0, radial_velocity=0.0))]
    fn new(dec: f64, ra: f64, distance: f64, pm_dec: f64, pm_ra_cosdec: f64, radial_velocity: f64) -> Self {
        PyIcrs {
            inner: Icrs::with_motion(dec, ra, distance, pm_dec, pm_ra_cosdec, radial_velocity),
        }
    }

    /// Build from a list of 3 or 6 values.
    #[staticmethod]
    fn from_components(values: Vec<f64>) -> PyResult<Self> {
        Icrs::from_components(&values)
            .map(|c| PyIcrs { inner: c })
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    /// [dec, ra, distance, pm_dec, pm_ra_cosdec, radial_velocity]
    fn components(&self) -> Vec<f64> {
        self.inner.components().to_vec()
    }

    #[getter] fn dec(&self) -> f64 { self.inner.dec() }
    #[getter] fn ra(&self) -> f64 { self.inner.ra() }
    #[getter] fn distance(&self) -> f64 { self.inner.distance() }
    #[getter] fn pm_dec(&self) -> f64 { self.inner.pm_dec() }
    #[getter] fn pm_ra_cosdec(&self) -> f64 { self.inner.pm_ra_cosdec() }
    #[getter] fn radial_velocity(&self) -> f64 { self.inner.radial_velocity() }

    #[setter] fn set_dec(&mut self, dec: f64) { self.inner.set_dec(dec) }
    #[setter] fn set_ra(&mut self, ra: f64) { self.inner.set_ra(ra) }
    #[setter] fn set_distance(&mut self, distance: f64) { self.inner.set_distance(distance) }
    #[setter] fn set_pm_dec(&mut self, pm_dec: f64) { self.inner.set_pm_dec(pm_dec) }
    #[setter] fn set_pm_ra_cosdec(&mut self, pm_ra_cosdec: f64) { self.inner.set_pm_ra_cosdec(pm_ra_cosdec) }
    #[setter] fn set_radial_velocity(&mut self, rv: f64) { self.inner.set_radial_velocity(rv) }

    fn __repr__(&self) -> String {
        format!("{}", self.inner)
    }
}

// Module registration
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGalactic>()?;
    m.add_class::<PyIcrs>()?;
    Ok(())
}
