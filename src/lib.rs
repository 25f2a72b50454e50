//! Plane wave media for RF network modelling.
//!
//! A [`media::Freespace`] turns the permittivity, permeability and
//! resistivity of a homogeneous medium into distributed circuit primaries
//! (R, L, G, C) over a [`frequency::Frequency`] sweep, and from those the
//! characteristic impedance and propagation constant consumed by network
//! calculations.
//!
//! ```
//! use rfkit_media::prelude::*;
//!
//! let freq = FrequencyBuilder::new().start(1.0).stop(2.0).npts(2).build();
//! let media = Freespace::new(&freq);
//! let z0 = media.characteristic_impedance().unwrap();
//! assert!((z0[0].re - 376.73).abs() < 1e-2);
//! ```
pub mod consts;
pub mod error;
pub mod frequency;
pub mod material;
pub mod media;
pub mod prelude;
pub mod scale;
pub mod unit;
pub mod util;
