use crate::error::{MediaError, MediaResult};
use crate::frequency::Frequency;
use crate::media::RealParam;
use ndarray::{Array1, Zip};
use num::complex::{c64, Complex64};

/// Per-unit-length equivalent circuit evaluated over a frequency sweep.
///
/// Series impedance Z' = R + jωL and shunt admittance Y' = G + jωC give
///
/// Z0 = √(Z'/Y')
/// γ  = √(Z'·Y')
#[derive(Clone, Debug, PartialEq)]
pub struct DistributedCircuit {
    w: Array1<f64>,
    r: Array1<f64>,
    l: Array1<f64>,
    g: Array1<f64>,
    c: Array1<f64>,
}

impl DistributedCircuit {
    /// All primaries must have one value per angular frequency point
    pub fn new(
        w: Array1<f64>,
        r: Array1<f64>,
        l: Array1<f64>,
        g: Array1<f64>,
        c: Array1<f64>,
    ) -> MediaResult<DistributedCircuit> {
        let npts = w.len();
        for (name, vals) in [("R", &r), ("L", &l), ("G", &g), ("C", &c)] {
            if vals.len() != npts {
                return Err(MediaError::ShapeMismatch {
                    name,
                    expected: npts,
                    found: vals.len(),
                });
            }
        }
        Ok(DistributedCircuit { w, r, l, g, c })
    }

    /// Primaries given as scalars or per-point values over `freq`
    pub fn from_frequency(
        freq: &Frequency,
        r: &RealParam,
        l: &RealParam,
        g: &RealParam,
        c: &RealParam,
    ) -> MediaResult<DistributedCircuit> {
        let npts = freq.npts();
        DistributedCircuit::new(
            freq.w(),
            r.broadcast("R", npts)?,
            l.broadcast("L", npts)?,
            g.broadcast("G", npts)?,
            c.broadcast("C", npts)?,
        )
    }

    pub fn w(&self) -> &Array1<f64> {
        &self.w
    }

    pub fn r(&self) -> &Array1<f64> {
        &self.r
    }

    pub fn l(&self) -> &Array1<f64> {
        &self.l
    }

    pub fn g(&self) -> &Array1<f64> {
        &self.g
    }

    pub fn c(&self) -> &Array1<f64> {
        &self.c
    }

    pub fn npts(&self) -> usize {
        self.w.len()
    }

    /// Series impedance per unit length Z' = R + jωL
    pub fn series_impedance(&self) -> Array1<Complex64> {
        Zip::from(&self.r)
            .and(&self.l)
            .and(&self.w)
            .map_collect(|&r, &l, &w| c64(r, w * l))
    }

    /// Shunt admittance per unit length Y' = G + jωC
    pub fn shunt_admittance(&self) -> Array1<Complex64> {
        Zip::from(&self.g)
            .and(&self.c)
            .and(&self.w)
            .map_collect(|&g, &c, &w| c64(g, w * c))
    }

    /// Characteristic impedance Z0 = √(Z'/Y')
    pub fn z0(&self) -> Array1<Complex64> {
        Zip::from(&self.series_impedance())
            .and(&self.shunt_admittance())
            .map_collect(|&z, &y| (z / y).sqrt())
    }

    /// Propagation constant γ = √(Z'·Y')
    pub fn gamma(&self) -> Array1<Complex64> {
        Zip::from(&self.series_impedance())
            .and(&self.shunt_admittance())
            .map_collect(|&z, &y| (z * y).sqrt())
    }
}
