//! Physical constants and numerical sentinels.

/// Speed of light in vacuum (m/s)
pub const C0: f64 = 299_792_458.0;

/// Vacuum magnetic permeability μ₀ (H/m), CODATA 2018
pub const MU_0: f64 = 1.256_637_062_12e-6;

/// Vacuum electric permittivity ε₀ (F/m), CODATA 2018
pub const EPSILON_0: f64 = 8.854_187_812_8e-12;

/// Stand-in for infinity where a finite number is required
pub const INF: f64 = 1e99;

/// One, nudged just above unity
pub const ONE: f64 = 1.0 + 1.0 / 1e14;

/// Stand-in for zero where a nonzero number is required
pub const ZERO: f64 = 1e-6;

/// Wave impedance of free space η₀ = √(μ₀/ε₀) (Ω)
pub fn eta_0() -> f64 {
    (MU_0 / EPSILON_0).sqrt()
}

#[cfg(test)]
mod consts_tests {
    use super::*;
    use float_cmp::{approx_eq, F64Margin};

    #[test]
    fn test_eta_0() {
        let margin = F64Margin {
            epsilon: 1e-6,
            ulps: 10,
        };
        assert!(approx_eq!(f64, eta_0(), 376.730313668, margin));
    }

    #[test]
    fn test_speed_of_light() {
        let c = 1.0 / (MU_0 * EPSILON_0).sqrt();
        assert!((c - C0).abs() / C0 < 1e-9);
    }
}
