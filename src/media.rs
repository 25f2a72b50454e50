//! Transmission media.
//!
//! A medium maps a frequency sweep onto per-point characteristic impedance and
//! propagation constant. Media built on a per-unit-length equivalent circuit
//! implement [`Distributed`] and hand their primaries to [`DistributedCircuit`].

use crate::error::{MediaError, MediaResult};
use crate::frequency::Frequency;
use ndarray::Array1;
use num::complex::{c64, Complex64};
use std::f64::consts::PI;
use tracing::debug;

pub mod distributed;
pub mod freespace;

pub use self::distributed::DistributedCircuit;
pub use self::freespace::{Freespace, FreespaceBuilder, ModeType, Resistivity};

/// Value given either once for the whole sweep or per frequency point.
///
/// Per-point lengths are not checked on assignment. They are checked by
/// [`Param::broadcast`] when combined with a sweep: a length of 1 is repeated
/// like a scalar, any other length different from the sweep is a
/// [`MediaError::ShapeMismatch`].
#[derive(Clone, Debug, PartialEq)]
pub enum Param<T> {
    Scalar(T),
    PerPoint(Array1<T>),
}

pub type RealParam = Param<f64>;
pub type ComplexParam = Param<Complex64>;

impl<T: Clone> Param<T> {
    /// Expand to one value per point of an `npts` sweep
    pub fn broadcast(&self, name: &'static str, npts: usize) -> MediaResult<Array1<T>> {
        match self {
            Param::Scalar(val) => Ok(Array1::from_elem(npts, val.clone())),
            Param::PerPoint(vals) if vals.len() == npts => Ok(vals.clone()),
            Param::PerPoint(vals) if vals.len() == 1 => Ok(Array1::from_elem(npts, vals[0].clone())),
            Param::PerPoint(vals) => {
                debug!(name, expected = npts, found = vals.len(), "parameter length mismatch");
                Err(MediaError::ShapeMismatch {
                    name,
                    expected: npts,
                    found: vals.len(),
                })
            }
        }
    }

    /// Number of points for per-point values
    pub fn len(&self) -> Option<usize> {
        match self {
            Param::Scalar(_) => None,
            Param::PerPoint(vals) => Some(vals.len()),
        }
    }

    pub fn map<U, F>(&self, f: F) -> Param<U>
    where
        F: Fn(&T) -> U,
    {
        match self {
            Param::Scalar(val) => Param::Scalar(f(val)),
            Param::PerPoint(vals) => Param::PerPoint(vals.map(|v| f(v))),
        }
    }
}

impl From<f64> for RealParam {
    fn from(val: f64) -> Self {
        Param::Scalar(val)
    }
}

impl From<Array1<f64>> for RealParam {
    fn from(vals: Array1<f64>) -> Self {
        Param::PerPoint(vals)
    }
}

impl From<Vec<f64>> for RealParam {
    fn from(vals: Vec<f64>) -> Self {
        Param::PerPoint(Array1::from(vals))
    }
}

impl From<f64> for ComplexParam {
    fn from(val: f64) -> Self {
        Param::Scalar(c64(val, 0.0))
    }
}

impl From<Complex64> for ComplexParam {
    fn from(val: Complex64) -> Self {
        Param::Scalar(val)
    }
}

impl From<Array1<Complex64>> for ComplexParam {
    fn from(vals: Array1<Complex64>) -> Self {
        Param::PerPoint(vals)
    }
}

impl From<Vec<Complex64>> for ComplexParam {
    fn from(vals: Vec<Complex64>) -> Self {
        Param::PerPoint(Array1::from(vals))
    }
}

pub trait Media {
    fn frequency(&self) -> &Frequency;

    /// Characteristic impedance Z0 (Ω) per frequency point
    fn characteristic_impedance(&self) -> MediaResult<Array1<Complex64>>;

    /// Propagation constant γ per frequency point.
    /// Positive real part is attenuation, positive imaginary part forward propagation.
    fn gamma(&self) -> MediaResult<Array1<Complex64>>;

    /// Port reference impedance, when it differs from Z0
    fn reference_impedance(&self) -> Option<&ComplexParam>;

    /// Port impedance: the reference impedance if set, otherwise Z0
    fn z0(&self) -> MediaResult<Array1<Complex64>> {
        match self.reference_impedance() {
            Some(z0) => z0.broadcast("reference_impedance", self.frequency().npts()),
            None => self.characteristic_impedance(),
        }
    }

    /// Complex electrical length γ·d for a physical length `d` in meters
    fn electrical_length(&self, d: f64) -> MediaResult<Array1<Complex64>> {
        Ok(self.gamma()?.mapv(|g| g * d))
    }

    /// Phase velocity v_p = jω/γ (m/s)
    fn phase_velocity(&self) -> MediaResult<Array1<Complex64>> {
        let w = self.frequency().w();
        let gamma = self.gamma()?;
        Ok(w.iter().zip(gamma.iter()).map(|(&w, &g)| c64(0.0, w) / g).collect())
    }

    /// Wavelength in the medium 2π/Im(γ) (m)
    fn wavelength(&self) -> MediaResult<Array1<f64>> {
        Ok(self.gamma()?.mapv(|g| 2.0 * PI / g.im))
    }
}

/// Media described by per-unit-length primaries R, L, G and C
pub trait Distributed: Media {
    /// Distributed resistance R (Ω/m)
    fn r(&self) -> MediaResult<Array1<f64>>;
    /// Distributed inductance L (H/m)
    fn l(&self) -> MediaResult<Array1<f64>>;
    /// Distributed conductance G (S/m)
    fn g(&self) -> MediaResult<Array1<f64>>;
    /// Distributed capacitance C (F/m)
    fn c(&self) -> MediaResult<Array1<f64>>;

    /// Equivalent circuit over the medium's sweep
    fn circuit(&self) -> MediaResult<DistributedCircuit> {
        DistributedCircuit::new(self.frequency().w(), self.r()?, self.l()?, self.g()?, self.c()?)
    }
}
