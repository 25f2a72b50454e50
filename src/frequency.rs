use crate::scale::Scale;
use crate::unit::Sweep;
use ndarray::prelude::*;
use std::f64::consts::PI;
use std::fmt;

/// Frequency sweep. Points are stored in Hz; `scale` only affects display.
#[derive(Clone, Debug, PartialEq)]
pub struct Frequency {
    pts: Array1<f64>,
    scale: Scale,
    sweep: Sweep,
}

impl Frequency {
    /// Points given in Hz
    pub fn new(pts: Array1<f64>, scale: Scale) -> Frequency {
        Frequency {
            pts,
            scale,
            sweep: Sweep::Linear,
        }
    }

    /// Points given in units of `scale`
    pub fn new_scaled(pts: Array1<f64>, scale: Scale) -> Frequency {
        Frequency {
            pts: pts.mapv(|x| scale.unscale(x)),
            scale,
            sweep: Sweep::Linear,
        }
    }

    pub fn from_vec(f: Vec<f64>, scale: Scale) -> Frequency {
        Frequency::new_scaled(Array1::from(f), scale)
    }

    /// Frequency points in Hz
    pub fn f(&self) -> &Array1<f64> {
        &self.pts
    }

    /// Frequency point `i` in Hz
    pub fn freq(&self, i: usize) -> f64 {
        self.pts[i]
    }

    /// Frequency points in units of the display scale
    pub fn f_scaled(&self) -> Array1<f64> {
        self.pts.mapv(|x| self.scale.scale(x))
    }

    /// Angular frequency ω = 2πf (rad/s)
    pub fn w(&self) -> Array1<f64> {
        self.pts.mapv(|x| 2.0 * PI * x)
    }

    pub fn w_at(&self, i: usize) -> f64 {
        2.0 * PI * self.pts[i]
    }

    pub fn npts(&self) -> usize {
        self.pts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// First point in Hz, 0 for an empty sweep
    pub fn start(&self) -> f64 {
        self.pts.first().copied().unwrap_or(0.0)
    }

    /// Last point in Hz, 0 for an empty sweep
    pub fn stop(&self) -> f64 {
        self.pts.last().copied().unwrap_or(0.0)
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn sweep(&self) -> Sweep {
        self.sweep
    }

    /// Unit label, e.g. "GHz"
    pub fn unit(&self) -> String {
        format!("{}Hz", self.scale)
    }

    pub fn set_scale(&mut self, scale: Scale) -> &Self {
        self.scale = scale;
        self
    }

    pub fn idx_at(&self, freq: f64, scale: Scale) -> Option<usize> {
        let target = scale.unscale(freq);
        self.pts.iter().position(|x| *x == target)
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::new(array![1e9], Scale::Giga)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} {}, {} pts",
            self.scale.scale(self.start()),
            self.scale.scale(self.stop()),
            self.unit(),
            self.npts()
        )
    }
}

/// Builder design pattern for Frequency.
///
/// ## Example
/// ```
/// use rfkit_media::frequency::FrequencyBuilder;
/// use rfkit_media::scale::Scale;
///
/// let freq = FrequencyBuilder::new()
///     .start_stop_step(1.0, 10.0, 1.0)
///     .scale(Scale::Giga)
///     .build();
/// assert_eq!(freq.npts(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct FrequencyBuilder {
    start: f64,
    stop: f64,
    npts: usize,
    scale: Scale,
    sweep: Sweep,
}

impl FrequencyBuilder {
    pub fn new() -> Self {
        FrequencyBuilder::default()
    }

    /// Start frequency in units of the builder scale
    pub fn start(mut self, val: f64) -> Self {
        self.start = val;
        self
    }

    /// Stop frequency in units of the builder scale
    pub fn stop(mut self, val: f64) -> Self {
        self.stop = val;
        self
    }

    pub fn npts(mut self, val: usize) -> Self {
        self.npts = val;
        self
    }

    /// Linear sweep from start to stop inclusive, spaced by step
    pub fn start_stop_step(mut self, start: f64, stop: f64, step: f64) -> Self {
        self.start = start;
        self.stop = stop;
        self.npts = ((stop - start) / step).round() as usize + 1;
        self.sweep = Sweep::Linear;
        self
    }

    pub fn scale(mut self, val: Scale) -> Self {
        self.scale = val;
        self
    }

    pub fn sweep(mut self, val: Sweep) -> Self {
        self.sweep = val;
        self
    }

    pub fn build(self) -> Frequency {
        let start = self.scale.unscale(self.start);
        let stop = self.scale.unscale(self.stop);
        let pts = match (self.sweep, self.npts) {
            (_, 0) => Array1::zeros(0),
            (_, 1) => array![start],
            (Sweep::Linear, n) => Array1::linspace(start, stop, n),
            (Sweep::Log, n) => Array1::logspace(10.0, start.log10(), stop.log10(), n),
        };

        Frequency {
            pts,
            scale: self.scale,
            sweep: self.sweep,
        }
    }
}

impl Default for FrequencyBuilder {
    fn default() -> Self {
        Self {
            start: 1.0,
            stop: 10.0,
            npts: 10,
            scale: Scale::Giga,
            sweep: Sweep::Linear,
        }
    }
}
