//! Plane wave in a homogeneous, possibly lossy, medium.
//!
//! The field properties of the medium map onto a distributed circuit as
//!
//! | Circuit | Field                    |
//! |---------|--------------------------|
//! | R       | ω·Im(μ₀·μr)              |
//! | L       | Re(μ₀·μr)                |
//! | G       | 1/ρ + ω·Im(ε₀·εr)        |
//! | C       | Re(ε₀·εr)                |
//!
//! Nothing is cached: every quantity is recomputed from the current
//! configuration when read.

use crate::consts::{EPSILON_0, MU_0};
use crate::error::{MediaError, MediaResult};
use crate::frequency::Frequency;
use crate::material::{materials, MaterialTable};
use crate::media::{ComplexParam, Distributed, Media, Param, RealParam};
use ndarray::{Array1, Zip};
use num::complex::{c64, Complex64};
use serde::Serialize;
use simple_error::{bail, SimpleError};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Field configuration of the propagating mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeType {
    #[default]
    Tem,
    Te,
    Tm,
}

impl ModeType {
    pub fn to_str(&self) -> &str {
        match self {
            ModeType::Tem => "tem",
            ModeType::Te => "te",
            ModeType::Tm => "tm",
        }
    }

    /// Scale the generic line impedance for a mode travelling at `angle`
    /// (radians) from the direction it is transverse to.
    pub fn scale_z0(&self, z0: Complex64, angle: f64) -> Complex64 {
        match self {
            ModeType::Tem => z0,
            ModeType::Te => z0 / angle.cos(),
            ModeType::Tm => z0 * angle.cos(),
        }
    }
}

impl FromStr for ModeType {
    type Err = SimpleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tem" => Ok(ModeType::Tem),
            "te" => Ok(ModeType::Te),
            "tm" => Ok(ModeType::Tm),
            _ => bail!("mode type not recognized, expected one of tem, te, tm"),
        }
    }
}

impl fmt::Display for ModeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Resistivity as assigned, before resolution to Ω·m
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Resistivity {
    /// No explicit conductive loss
    #[default]
    Unset,
    /// Material name, looked up case-insensitively
    Named(String),
    /// Resistivity in Ω·m
    Explicit(RealParam),
}

impl Resistivity {
    pub fn resolve(&self, table: &MaterialTable) -> MediaResult<Option<RealParam>> {
        match self {
            Resistivity::Unset => Ok(None),
            Resistivity::Named(name) => {
                let rho = table.resistivity(name)?;
                debug!(material = name.as_str(), rho, "resistivity set from material");
                Ok(Some(Param::Scalar(rho)))
            }
            Resistivity::Explicit(rho) => Ok(Some(rho.clone())),
        }
    }
}

impl From<&str> for Resistivity {
    fn from(name: &str) -> Self {
        Resistivity::Named(name.to_string())
    }
}

impl From<String> for Resistivity {
    fn from(name: String) -> Self {
        Resistivity::Named(name)
    }
}

impl From<f64> for Resistivity {
    fn from(rho: f64) -> Self {
        Resistivity::Explicit(Param::Scalar(rho))
    }
}

impl From<Array1<f64>> for Resistivity {
    fn from(rho: Array1<f64>) -> Self {
        Resistivity::Explicit(Param::PerPoint(rho))
    }
}

impl From<Vec<f64>> for Resistivity {
    fn from(rho: Vec<f64>) -> Self {
        Resistivity::Explicit(rho.into())
    }
}

impl From<RealParam> for Resistivity {
    fn from(rho: RealParam) -> Self {
        Resistivity::Explicit(rho)
    }
}

impl From<Option<f64>> for Resistivity {
    fn from(rho: Option<f64>) -> Self {
        match rho {
            Some(rho) => rho.into(),
            None => Resistivity::Unset,
        }
    }
}

/// Plane wave medium.
///
/// Per-point parameters (`ep_r`, `mu_r`, `rho`, reference impedance) are
/// expected to have one value per frequency point. Lengths are not checked
/// on assignment; a disagreeing length surfaces as
/// [`MediaError::ShapeMismatch`] when a quantity using it is read.
///
/// The mode type is kept as given (lowercased) and only validated when the
/// characteristic impedance is read. Use [`Freespace::set_mode`] to assign a
/// mode that is known to be valid.
#[derive(Clone, Debug, PartialEq)]
pub struct Freespace {
    frequency: Frequency,
    ep_r: ComplexParam,
    mu_r: ComplexParam,
    rho: Option<RealParam>,
    mode_type: String,
    angle: f64,
    z0: Option<ComplexParam>,
}

impl Freespace {
    /// Vacuum over `frequency`: εr = μr = 1, no conductive loss, TEM at normal incidence
    pub fn new(frequency: &Frequency) -> Freespace {
        Freespace {
            frequency: frequency.clone(),
            ep_r: Param::Scalar(c64(1.0, 0.0)),
            mu_r: Param::Scalar(c64(1.0, 0.0)),
            rho: None,
            mode_type: ModeType::Tem.to_str().to_string(),
            angle: 0.0,
            z0: None,
        }
    }

    /// Relative permittivity εr
    pub fn ep_r(&self) -> &ComplexParam {
        &self.ep_r
    }

    /// Relative permeability μr
    pub fn mu_r(&self) -> &ComplexParam {
        &self.mu_r
    }

    /// Resistivity in Ω·m, `None` without explicit conductive loss
    pub fn rho(&self) -> Option<&RealParam> {
        self.rho.as_ref()
    }

    pub fn mode_type(&self) -> &str {
        &self.mode_type
    }

    /// Mode type parsed, failing on values outside of tem, te and tm
    pub fn mode(&self) -> MediaResult<ModeType> {
        ModeType::from_str(&self.mode_type).map_err(|e| {
            MediaError::InvalidConfiguration(format!("mode_type '{}': {}", self.mode_type, e))
        })
    }

    /// Angle in radians from the direction the mode is transverse to
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn set_frequency(&mut self, frequency: &Frequency) -> &mut Self {
        self.frequency = frequency.clone();
        self
    }

    pub fn set_ep_r(&mut self, val: impl Into<ComplexParam>) -> &mut Self {
        self.ep_r = val.into();
        self
    }

    pub fn set_mu_r(&mut self, val: impl Into<ComplexParam>) -> &mut Self {
        self.mu_r = val.into();
        self
    }

    /// Set resistivity, resolving material names against the built-in table.
    ///
    /// ```
    /// use rfkit_media::prelude::*;
    ///
    /// let mut media = Freespace::new(&Frequency::default());
    /// media.set_rho("Copper").unwrap();
    /// assert_eq!(media.rho(), Some(&Param::Scalar(1.68e-8)));
    /// assert!(media.set_rho("unobtainium").is_err());
    /// ```
    pub fn set_rho(&mut self, val: impl Into<Resistivity>) -> MediaResult<&mut Self> {
        self.set_rho_from(val, materials())
    }

    /// Set resistivity, resolving material names against `table`.
    /// On a failed lookup the previous resistivity is kept.
    pub fn set_rho_from(
        &mut self,
        val: impl Into<Resistivity>,
        table: &MaterialTable,
    ) -> MediaResult<&mut Self> {
        self.rho = val.into().resolve(table)?;
        Ok(self)
    }

    pub fn clear_rho(&mut self) -> &mut Self {
        self.rho = None;
        self
    }

    /// Store the mode type lowercased. Validity is checked on use.
    pub fn set_mode_type(&mut self, val: &str) -> &mut Self {
        self.mode_type = val.to_lowercase();
        trace!(mode_type = self.mode_type.as_str(), "mode type set");
        self
    }

    pub fn set_mode(&mut self, mode: ModeType) -> &mut Self {
        self.mode_type = mode.to_str().to_string();
        self
    }

    pub fn set_angle(&mut self, angle: f64) -> &mut Self {
        self.angle = angle;
        self
    }

    /// Port reference impedance used in place of Z0
    pub fn set_z0(&mut self, val: impl Into<ComplexParam>) -> &mut Self {
        self.z0 = Some(val.into());
        self
    }

    pub fn clear_z0(&mut self) -> &mut Self {
        self.z0 = None;
        self
    }

    fn npts(&self) -> usize {
        self.frequency.npts()
    }

    /// μ₀·μr per point
    fn mu(&self) -> MediaResult<Array1<Complex64>> {
        Ok(self.mu_r.broadcast("mu_r", self.npts())?.mapv(|mu_r| mu_r * MU_0))
    }

    /// ε₀·εr per point
    fn ep(&self) -> MediaResult<Array1<Complex64>> {
        Ok(self.ep_r.broadcast("ep_r", self.npts())?.mapv(|ep_r| ep_r * EPSILON_0))
    }

    /// 1/ρ per point, 0 without explicit conductive loss
    fn conductivity(&self) -> MediaResult<Array1<f64>> {
        match &self.rho {
            Some(rho) => Ok(rho.broadcast("rho", self.npts())?.mapv(|rho| 1.0 / rho)),
            None => Ok(Array1::zeros(self.npts())),
        }
    }
}

impl Default for Freespace {
    fn default() -> Self {
        Freespace::new(&Frequency::default())
    }
}

impl Media for Freespace {
    fn frequency(&self) -> &Frequency {
        &self.frequency
    }

    /// Generic line impedance scaled for the mode: Z0/cos(θ) for TE,
    /// Z0·cos(θ) for TM, unchanged for TEM.
    fn characteristic_impedance(&self) -> MediaResult<Array1<Complex64>> {
        let mode = self.mode()?;
        let angle = self.angle;
        Ok(self.circuit()?.z0().mapv(|z0| mode.scale_z0(z0, angle)))
    }

    /// Generic line propagation constant scaled by cos(θ) for every mode type
    fn gamma(&self) -> MediaResult<Array1<Complex64>> {
        if self.angle != 0.0 && self.mode_type == ModeType::Tem.to_str() {
            debug!(angle = self.angle, "tem mode with nonzero angle, gamma scaled by cos(angle)");
        }
        let cos = self.angle.cos();
        Ok(self.circuit()?.gamma().mapv(|gamma| gamma * cos))
    }

    fn reference_impedance(&self) -> Option<&ComplexParam> {
        self.z0.as_ref()
    }
}

impl Distributed for Freespace {
    /// ω·Im(μ₀·μr)
    fn r(&self) -> MediaResult<Array1<f64>> {
        Ok(Zip::from(&self.frequency.w())
            .and(&self.mu()?)
            .map_collect(|&w, mu| w * mu.im))
    }

    /// Re(μ₀·μr)
    fn l(&self) -> MediaResult<Array1<f64>> {
        Ok(self.mu()?.mapv(|mu| mu.re))
    }

    /// 1/ρ + ω·Im(ε₀·εr)
    fn g(&self) -> MediaResult<Array1<f64>> {
        Ok(Zip::from(&self.conductivity()?)
            .and(&self.frequency.w())
            .and(&self.ep()?)
            .map_collect(|&sigma, &w, ep| sigma + w * ep.im))
    }

    /// Re(ε₀·εr)
    fn c(&self) -> MediaResult<Array1<f64>> {
        Ok(self.ep()?.mapv(|ep| ep.re))
    }
}

impl fmt::Display for Freespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let freq = &self.frequency;
        let scale = freq.scale();
        write!(
            f,
            "Freespace  Media.  {}-{} {}.  {} points",
            scale.scale(freq.start()) as i64,
            scale.scale(freq.stop()) as i64,
            freq.unit(),
            freq.npts()
        )
    }
}

/// Builder design pattern for Freespace.
///
/// ## Example
/// ```
/// use rfkit_media::prelude::*;
///
/// let freq = FrequencyBuilder::new().start(1.0).stop(10.0).npts(10).build();
/// let media = FreespaceBuilder::new()
///     .frequency(&freq)
///     .ep_r(2.2)
///     .rho("aluminum")
///     .mode(ModeType::Te)
///     .angle(0.5)
///     .build()
///     .unwrap();
/// assert_eq!(media.characteristic_impedance().unwrap().len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct FreespaceBuilder {
    frequency: Frequency,
    ep_r: ComplexParam,
    mu_r: ComplexParam,
    rho: Resistivity,
    mode_type: String,
    angle: f64,
    z0: Option<ComplexParam>,
}

impl FreespaceBuilder {
    pub fn new() -> Self {
        FreespaceBuilder::default()
    }

    pub fn frequency(mut self, val: &Frequency) -> Self {
        self.frequency = val.clone();
        self
    }

    pub fn ep_r(mut self, val: impl Into<ComplexParam>) -> Self {
        self.ep_r = val.into();
        self
    }

    pub fn mu_r(mut self, val: impl Into<ComplexParam>) -> Self {
        self.mu_r = val.into();
        self
    }

    /// Resistivity in Ω·m or a material name, resolved on build
    pub fn rho(mut self, val: impl Into<Resistivity>) -> Self {
        self.rho = val.into();
        self
    }

    pub fn mode_type(mut self, val: &str) -> Self {
        self.mode_type = val.to_lowercase();
        self
    }

    pub fn mode(mut self, val: ModeType) -> Self {
        self.mode_type = val.to_str().to_string();
        self
    }

    pub fn angle(mut self, val: f64) -> Self {
        self.angle = val;
        self
    }

    pub fn z0(mut self, val: impl Into<ComplexParam>) -> Self {
        self.z0 = Some(val.into());
        self
    }

    pub fn build(self) -> MediaResult<Freespace> {
        self.build_with(materials())
    }

    /// Build, resolving a named resistivity against `table`
    pub fn build_with(self, table: &MaterialTable) -> MediaResult<Freespace> {
        Ok(Freespace {
            rho: self.rho.resolve(table)?,
            frequency: self.frequency,
            ep_r: self.ep_r,
            mu_r: self.mu_r,
            mode_type: self.mode_type,
            angle: self.angle,
            z0: self.z0,
        })
    }
}

impl Default for FreespaceBuilder {
    fn default() -> Self {
        Self {
            frequency: Frequency::default(),
            ep_r: Param::Scalar(c64(1.0, 0.0)),
            mu_r: Param::Scalar(c64(1.0, 0.0)),
            rho: Resistivity::Unset,
            mode_type: ModeType::Tem.to_str().to_string(),
            angle: 0.0,
            z0: None,
        }
    }
}
