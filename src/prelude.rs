//! rfkit-media prelude.
//!
//! This module contains the most used types, traits and functions that you
//! can import easily as a group.
//!
//! ```
//! use rfkit_media::prelude::*;
//!
//! ```

#[doc(no_inline)]
pub use crate::consts::{eta_0, C0, EPSILON_0, MU_0};

#[doc(no_inline)]
pub use crate::error::{MediaError, MediaResult};

#[doc(no_inline)]
pub use crate::frequency::{Frequency, FrequencyBuilder};

#[doc(no_inline)]
pub use crate::material::{materials, Material, MaterialTable};

#[doc(no_inline)]
pub use crate::media::{
    ComplexParam, Distributed, DistributedCircuit, Freespace, FreespaceBuilder, Media, ModeType,
    Param, RealParam, Resistivity,
};

#[doc(no_inline)]
pub use crate::scale::Scale;

#[doc(no_inline)]
pub use crate::unit::{to_meters, DistanceUnit, Sweep};

#[doc(no_inline)]
pub use num::complex::{c64, Complex64};
