use float_cmp::F64Margin;
use ndarray::{array, Array1};
use rfkit_media::prelude::*;
use rfkit_media::util::{comp_array_c64, comp_c64, comp_f64};
use std::f64::consts::PI;

const DEFAULT_MARGIN: F64Margin = F64Margin {
    epsilon: 1e-9,
    ulps: 10,
};

const RELAXED_MARGIN: F64Margin = F64Margin {
    epsilon: 1e-6,
    ulps: 10,
};

fn sweep() -> Frequency {
    FrequencyBuilder::new()
        .start(1.0)
        .stop(10.0)
        .npts(10)
        .scale(Scale::Giga)
        .build()
}

#[test]
fn freespace_vacuum_single_point() {
    let freq = Frequency::new(array![1e9], Scale::Giga);
    let media = Freespace::new(&freq);
    assert_eq!(media.frequency().w_at(0), 2.0 * PI * 1e9);

    let z0 = media.characteristic_impedance().unwrap();
    assert_eq!(z0.len(), 1);
    assert!((z0[0].re - 376.73).abs() < 1e-2);
    assert_eq!(z0[0].im, 0.0);

    let gamma = media.gamma().unwrap();
    assert_eq!(gamma[0].re, 0.0);
    assert!(gamma[0].im > 0.0);
}

#[test]
fn freespace_lossless_has_no_resistance_or_conductance() {
    for (ep_r, mu_r) in [(1.0, 1.0), (2.2, 1.0), (10.2, 3.0), (0.0, 0.0)] {
        let media = FreespaceBuilder::new()
            .frequency(&sweep())
            .ep_r(ep_r)
            .mu_r(mu_r)
            .build()
            .unwrap();
        assert!(media.r().unwrap().iter().all(|&r| r == 0.0));
        assert!(media.g().unwrap().iter().all(|&g| g == 0.0));
    }
}

#[test]
fn freespace_tem_normal_incidence_matches_line_model() {
    let freq = sweep();
    let media = FreespaceBuilder::new()
        .frequency(&freq)
        .ep_r(c64(4.0, 0.02))
        .mu_r(c64(1.2, 0.01))
        .rho(100.0)
        .build()
        .unwrap();

    let r: RealParam = media.r().unwrap().into();
    let l: RealParam = media.l().unwrap().into();
    let g: RealParam = media.g().unwrap().into();
    let c: RealParam = media.c().unwrap().into();
    let circuit = DistributedCircuit::from_frequency(&freq, &r, &l, &g, &c).unwrap();

    assert_eq!(media.characteristic_impedance().unwrap(), circuit.z0());
    assert_eq!(media.gamma().unwrap(), circuit.gamma());
    assert_eq!(media.circuit().unwrap(), circuit);
}

#[test]
fn freespace_te_tm_product_is_generic_squared() {
    let freq = sweep();
    let angle = 1.0_f64;
    let generic = Freespace::new(&freq).characteristic_impedance().unwrap();

    let te = FreespaceBuilder::new()
        .frequency(&freq)
        .mode_type("te")
        .angle(angle)
        .build()
        .unwrap()
        .characteristic_impedance()
        .unwrap();
    let tm = FreespaceBuilder::new()
        .frequency(&freq)
        .mode_type("TM")
        .angle(angle)
        .build()
        .unwrap()
        .characteristic_impedance()
        .unwrap();

    for i in 0..freq.npts() {
        let idx = i.to_string();
        comp_c64(&(generic[i] / angle.cos()), &te[i], DEFAULT_MARGIN, "te", &idx);
        comp_c64(&(generic[i] * angle.cos()), &tm[i], DEFAULT_MARGIN, "tm", &idx);
        comp_c64(&(generic[i] * generic[i]), &(te[i] * tm[i]), RELAXED_MARGIN, "te*tm", &idx);
    }
}

#[test]
fn freespace_tem_with_angle_still_scales_gamma() {
    let freq = sweep();
    let generic = Freespace::new(&freq).gamma().unwrap();
    let mut media = Freespace::new(&freq);
    media.set_angle(PI / 3.0);

    // Z0 is untouched in tem mode, gamma is not
    comp_array_c64(
        &Freespace::new(&freq).characteristic_impedance().unwrap(),
        &media.characteristic_impedance().unwrap(),
        DEFAULT_MARGIN,
        "tem z0",
    );
    comp_array_c64(
        &generic.mapv(|g| g * (PI / 3.0).cos()),
        &media.gamma().unwrap(),
        DEFAULT_MARGIN,
        "tem gamma",
    );
}

#[test]
fn freespace_mode_type_errors_only_on_impedance() {
    let mut media = Freespace::new(&sweep());
    media.set_mode_type("rhcp");
    assert!(matches!(
        media.characteristic_impedance(),
        Err(MediaError::InvalidConfiguration(_))
    ));
    assert!(matches!(media.z0(), Err(MediaError::InvalidConfiguration(_))));

    // an explicit reference impedance does not need the mode
    media.set_z0(50.0);
    assert_eq!(media.z0().unwrap(), Array1::from_elem(10, c64(50.0, 0.0)));
}

#[test]
fn freespace_resistivity_round_trip() {
    let mut media = Freespace::new(&sweep());
    let gold = materials().resistivity("gold").unwrap();
    for name in ["gold", "GOLD", "Au"] {
        media.set_rho(name).unwrap();
        assert_eq!(media.rho(), Some(&Param::Scalar(gold)));
    }

    let err = media.set_rho("unobtainium").unwrap_err();
    assert_eq!(err, MediaError::MaterialLookup("unobtainium".to_string()));
    assert_eq!(err.to_string(), "material not found: unobtainium");
}

#[test]
fn freespace_derived_quantities() {
    let freq = Frequency::new(array![1e9, 3e9], Scale::Giga);
    let mut media = Freespace::new(&freq);
    media.set_ep_r(4.0);

    let v_p = media.phase_velocity().unwrap();
    let margin = F64Margin {
        epsilon: 1e-3,
        ulps: 10,
    };
    for i in 0..freq.npts() {
        comp_f64(&(C0 / 2.0), &v_p[i].re, margin, "v_p", &i.to_string());
    }

    let wavelength = media.wavelength().unwrap();
    comp_f64(&(C0 / 2.0 / 1e9), &wavelength[0], RELAXED_MARGIN, "wavelength", "0");
    comp_f64(&(C0 / 2.0 / 3e9), &wavelength[1], RELAXED_MARGIN, "wavelength", "1");

    // a quarter wavelength is π/2 of phase
    let d = to_meters(wavelength[0] / 4.0, "m").unwrap();
    let theta = media.electrical_length(d).unwrap();
    comp_f64(&(PI / 2.0), &theta[0].im, DEFAULT_MARGIN, "electrical_length", "0");
}

#[test]
fn freespace_shape_mismatch_is_lazy() {
    let mut media = Freespace::new(&sweep());
    media.set_ep_r(vec![c64(1.0, 0.0); 3]);
    assert_eq!(
        media.characteristic_impedance(),
        Err(MediaError::ShapeMismatch {
            name: "ep_r",
            expected: 10,
            found: 3
        })
    );

    media.set_frequency(&FrequencyBuilder::new().start(1.0).stop(3.0).npts(3).build());
    assert_eq!(media.characteristic_impedance().unwrap().len(), 3);
}

#[test]
fn freespace_display() {
    let media = Freespace::new(&sweep());
    assert_eq!(media.to_string(), "Freespace  Media.  1-10 GHz.  10 points");
}

#[test]
fn mode_type_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ModeType::Te).unwrap(), "\"te\"");
    assert_eq!(serde_json::to_string(&ModeType::Tem).unwrap(), "\"tem\"");
    assert_eq!(serde_json::to_string(&Scale::Giga).unwrap(), "\"Giga\"");
}
