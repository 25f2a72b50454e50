use float_cmp::{approx_eq, F64Margin};
use ndarray::Array1;
use num::complex::Complex64;

pub fn comp_array_c64(
    exemplar: &Array1<Complex64>,
    calc: &Array1<Complex64>,
    precision: F64Margin,
    test: &str,
) {
    assert_eq!(
        exemplar.len(),
        calc.len(),
        " Failed test {}: length mismatch",
        test
    );
    for k in 0..calc.len() {
        comp_c64(&exemplar[k], &calc[k], precision, test, &format!("({})", k));
    }
}

pub fn comp_array_f64(exemplar: &Array1<f64>, calc: &Array1<f64>, precision: F64Margin, test: &str) {
    assert_eq!(
        exemplar.len(),
        calc.len(),
        " Failed test {}: length mismatch",
        test
    );
    for k in 0..calc.len() {
        comp_f64(&exemplar[k], &calc[k], precision, test, &format!("({})", k));
    }
}

pub fn comp_c64(exemplar: &Complex64, calc: &Complex64, precision: F64Margin, test: &str, idx: &str) {
    comp_f64(
        &(exemplar.re),
        &(calc.re),
        precision,
        test,
        &(idx.to_owned() + ".re"),
    );
    comp_f64(
        &(exemplar.im),
        &(calc.im),
        precision,
        test,
        &(idx.to_owned() + ".im"),
    );
}

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}

/// Relative comparison, for quantities far from unity (e.g. H/m, F/m)
pub fn comp_f64_rel(exemplar: &f64, calc: &f64, rel: f64, test: &str, idx: &str) {
    let scale = exemplar.abs().max(calc.abs());
    assert!(
        exemplar == calc || (exemplar - calc).abs() <= rel * scale,
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}

#[cfg(test)]
mod util_tests {
    use super::*;
    use ndarray::array;
    use num::complex::c64;

    const DEFAULT_MARGIN: F64Margin = F64Margin {
        epsilon: 1e-10,
        ulps: 4,
    };

    #[test]
    fn test_comp_passes() {
        comp_f64(&1.0, &(1.0 + 1e-12), DEFAULT_MARGIN, "comp_f64", "0");
        comp_c64(&c64(1.0, -2.0), &c64(1.0, -2.0), DEFAULT_MARGIN, "comp_c64", "0");
        comp_array_f64(&array![1.0, 2.0], &array![1.0, 2.0], DEFAULT_MARGIN, "array");
        comp_f64_rel(&1e-12, &(1e-12 * (1.0 + 1e-14)), 1e-12, "rel", "0");
    }

    #[test]
    #[should_panic]
    fn test_comp_fails() {
        comp_f64(&1.0, &1.1, DEFAULT_MARGIN, "comp_f64", "0");
    }

    #[test]
    #[should_panic]
    fn test_comp_length_mismatch() {
        comp_array_c64(
            &array![c64(1.0, 0.0)],
            &array![c64(1.0, 0.0), c64(1.0, 0.0)],
            DEFAULT_MARGIN,
            "array",
        );
    }
}
