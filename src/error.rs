//! Error types for media calculations

use thiserror::Error;

/// Result type for media calculations
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors raised while configuring or evaluating a medium
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MediaError {
    /// Resistivity assigned a material name absent from the table
    #[error("material not found: {0}")]
    MaterialLookup(String),

    /// Mode type outside of `tem`, `te` and `tm`
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Per-point parameter whose length disagrees with the frequency sweep
    #[error("{name} has {found} points but the frequency sweep has {expected}")]
    ShapeMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    /// Distance unit not recognized
    #[error("unrecognized distance unit: {0}")]
    InvalidUnit(String),
}
