//! Cross-cutting properties of the beam analysis.

use approx::assert_relative_eq;

use beam_core::calculations::{compute_beam_response, compute_from_tag, stress_check};
use beam_core::loads::{LoadCase, LoadParams};
use beam_core::units::{Kilonewtons, Meters, Millimeters, Newtons};

const E: f64 = 25e9;
const I: f64 = 8.33e-6;

fn all_cases(span: f64) -> Vec<LoadCase> {
    vec![
        LoadCase::PointCenter { p_n: 30_000.0 },
        LoadCase::PointAnywhere { p_n: 20_000.0, a_m: span * 0.3 },
        LoadCase::UniformDistributed { w_n_per_m: 10_000.0 },
        LoadCase::LinearlyVaryingDistributed { w_max_n_per_m: 12_000.0 },
        LoadCase::AppliedMoment { m_nm: 8_000.0 },
    ]
}

#[test]
fn reactions_balance_total_load() {
    for span in [1.0, 4.0, 7.5] {
        for case in all_cases(span) {
            let result = compute_beam_response(span, &case, E, I, 10).unwrap();
            let total = case.total_vertical_load(span);
            let sum = result.total_reaction_n();
            assert!(
                (sum - total).abs() <= 1e-9 * total.abs().max(1.0),
                "{} on {} m: R1 + R2 = {}, load = {}",
                case.tag(),
                span,
                sum,
                total
            );
        }
    }
}

#[test]
fn abscissae_increase_from_zero_to_span() {
    for case in all_cases(5.0) {
        let result = compute_beam_response(5.0, &case, E, I, 17).unwrap();
        let xs = result.x_samples();
        assert_eq!(xs.len(), 17);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[16], 5.0);
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
    }
}

#[test]
fn point_center_deflection_is_symmetric() {
    let result = compute_beam_response(6.0, &LoadCase::PointCenter { p_n: 30_000.0 }, E, I, 21).unwrap();
    let d = result.deflection_samples();
    let n = d.len();
    for k in 0..n {
        assert_relative_eq!(d[k], d[n - 1 - k], epsilon = 1e-9, max_relative = 1e-9);
    }
}

#[test]
fn uniform_load_reference_values() {
    let load = LoadCase::UniformDistributed { w_n_per_m: 10_000.0 };
    let result = compute_beam_response(4.0, &load, E, I, 10).unwrap();
    assert_eq!(result.max_moment_nm, 20_000.0);
    let expected = 5.0 * 10_000.0 * 4.0_f64.powi(4) / (384.0 * E * I) * 1000.0;
    assert_relative_eq!(result.max_deflection_mm, expected, max_relative = 1e-6);
}

#[test]
fn point_load_at_supports_degenerates_cleanly() {
    for a in [0.0, 4.0] {
        let load = LoadCase::PointAnywhere { p_n: 10_000.0, a_m: a };
        let result = compute_beam_response(4.0, &load, E, I, 10).unwrap();
        assert_eq!(result.max_moment_nm, 0.0);
        assert_eq!(result.reaction_left_n + result.reaction_right_n, 10_000.0);
        for point in &result.samples {
            assert!(point.shear_n.is_finite());
            assert!(point.moment_nm.abs() < 1e-9);
            assert!(point.deflection_mm.abs() < 1e-12);
        }
    }
}

#[test]
fn zero_triangular_load_gives_exact_zeros() {
    let load = LoadCase::LinearlyVaryingDistributed { w_max_n_per_m: 0.0 };
    let result = compute_beam_response(6.0, &load, E, I, 10).unwrap();
    assert_eq!(result.reaction_left_n, 0.0);
    assert_eq!(result.reaction_right_n, 0.0);
    assert_eq!(result.max_moment_nm, 0.0);
    assert_eq!(result.max_deflection_mm, 0.0);
    assert!(result.samples.iter().all(|p| p.shear_n == 0.0 && p.moment_nm == 0.0 && p.deflection_mm == 0.0));
}

#[test]
fn stress_check_on_300_by_500_section() {
    // Z = b·d²/6 = 300 · 500² / 6 mm³
    let z_mm3 = 300.0 * 500.0 * 500.0 / 6.0;
    let pass = stress_check(20e6, z_mm3, 20.0).unwrap();
    assert_relative_eq!(pass.actual_mpa, 1.6, max_relative = 1e-12);
    assert!(pass.passes);

    let fail = stress_check(20e6 * 20.0, z_mm3, 20.0).unwrap();
    assert!(fail.actual_mpa > 20.0);
    assert!(!fail.passes);
}

#[test]
fn repeated_calls_are_bit_identical() {
    for case in all_cases(4.0) {
        let first = compute_beam_response(4.0, &case, E, I, 33).unwrap();
        let second = compute_beam_response(4.0, &case, E, I, 33).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn unknown_tag_is_rejected() {
    let params = LoadParams {
        p: Some(1_000.0),
        ..Default::default()
    };
    for tag in ["", "UDL", "point", "fixed_end"] {
        let err = compute_from_tag(4.0, tag, &params, E, I, 10).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_LOAD_CASE");
    }
}

#[test]
fn unit_conversions_invert_at_boundary() {
    for mm in [300.0, 450.0, 500.0, 1234.5] {
        let back = Millimeters::from(Meters::from(Millimeters(mm)));
        assert_relative_eq!(back.value(), mm, max_relative = 1e-15);
    }
    for kn in [0.5, 20.0, 150.0] {
        let back = Kilonewtons::from(Newtons::from(Kilonewtons(kn)));
        assert_relative_eq!(back.value(), kn, max_relative = 1e-15);
    }
}
