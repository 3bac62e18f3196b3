//! Simply-Supported Beam Analysis
//!
//! Dispatches a [`LoadCase`] to its solver and defines the shared result
//! record. Every call is independent: no state survives between calls, so
//! analyses may run concurrently on any number of threads.
//!
//! ## Sampling
//! Diagrams are sampled at `n` equally spaced points from 0 to L inclusive.
//! The first abscissa is exactly 0 and the last exactly L.
//!
//! ## Sign Convention
//! - Positive moment: tension on bottom fiber (sagging)
//! - Positive shear: left side up, right side down
//! - Positive deflection: downward
//!
//! ## Example
//! ```rust
//! use beam_core::calculations::beam_analysis::compute_beam_response;
//! use beam_core::loads::LoadCase;
//!
//! // 4 m beam, 10 kN/m uniform load, E = 25 GPa, I = 8.33e-6 m⁴
//! let load = LoadCase::UniformDistributed { w_n_per_m: 10_000.0 };
//! let result = compute_beam_response(4.0, &load, 25e9, 8.33e-6, 10).unwrap();
//!
//! assert_eq!(result.max_moment_nm, 20_000.0);
//! assert_eq!(result.samples.len(), 10);
//! println!("Max deflection: {:.2} mm", result.max_deflection_mm);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::loads::{LoadCase, LoadParams};

use super::load_cases::{
    solve_applied_moment, solve_linearly_varying, solve_point_anywhere, solve_point_center,
    solve_uniform,
};

/// One sampled station along the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    /// Position from the left support (m)
    pub x_m: f64,
    /// Shear V(x) (N)
    pub shear_n: f64,
    /// Bending moment M(x) (N·m)
    pub moment_nm: f64,
    /// Deflection (mm, positive downward)
    pub deflection_mm: f64,
}

/// Results from one beam analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Load case that produced this result
    pub load_case: LoadCase,
    /// Span (m)
    pub span_m: f64,

    /// Left support reaction R1 (N) - positive upward
    pub reaction_left_n: f64,
    /// Right support reaction R2 (N) - positive upward
    pub reaction_right_n: f64,

    /// Peak bending moment (N·m)
    pub max_moment_nm: f64,

    /// Sampled diagrams, ordered by position
    pub samples: Vec<DiagramPoint>,

    /// Peak deflection (mm) - positive downward
    pub max_deflection_mm: f64,
}

impl AnalysisResult {
    /// Sample abscissae (m)
    pub fn x_samples(&self) -> Vec<f64> {
        self.samples.iter().map(|p| p.x_m).collect()
    }

    /// Shear samples (N)
    pub fn shear_samples(&self) -> Vec<f64> {
        self.samples.iter().map(|p| p.shear_n).collect()
    }

    /// Moment samples (N·m)
    pub fn moment_samples(&self) -> Vec<f64> {
        self.samples.iter().map(|p| p.moment_nm).collect()
    }

    /// Deflection samples (mm)
    pub fn deflection_samples(&self) -> Vec<f64> {
        self.samples.iter().map(|p| p.deflection_mm).collect()
    }

    /// R1 + R2 (N)
    pub fn total_reaction_n(&self) -> f64 {
        self.reaction_left_n + self.reaction_right_n
    }
}

/// Equally spaced sample positions from 0 to `span_m` inclusive.
///
/// The fraction `i / (n - 1)` is formed first so that a sample at an exact
/// fraction of the span (L/2 for odd `n`) lands on it bit-for-bit. The last
/// position is pinned to `span_m`.
pub fn sample_positions(span_m: f64, sample_count: usize) -> Vec<f64> {
    let last = sample_count.saturating_sub(1);
    (0..sample_count)
        .map(|i| {
            if i == last {
                span_m
            } else {
                span_m * (i as f64 / last as f64)
            }
        })
        .collect()
}

/// Evaluate `(shear, moment, deflection_mm)` at every sample position
pub(crate) fn sample_diagram<F>(span_m: f64, sample_count: usize, eval: F) -> Vec<DiagramPoint>
where
    F: Fn(f64) -> (f64, f64, f64),
{
    sample_positions(span_m, sample_count)
        .into_iter()
        .map(|x_m| {
            let (shear_n, moment_nm, deflection_mm) = eval(x_m);
            DiagramPoint {
                x_m,
                shear_n,
                moment_nm,
                deflection_mm,
            }
        })
        .collect()
}

/// Analyse a simply-supported beam under one load case.
///
/// # Arguments
///
/// * `span_m` - Span L (m)
/// * `load_case` - Load pattern and magnitude (SI)
/// * `e_pa` - Elastic modulus (Pa)
/// * `i_m4` - Second moment of area (m⁴)
/// * `sample_count` - Number of diagram stations, at least 2
///
/// # Errors
///
/// `InvalidInput` if span, E or I is not positive, if fewer than two samples
/// are requested, or if the load payload is out of range. Invalid values are
/// never replaced by defaults.
pub fn compute_beam_response(
    span_m: f64,
    load_case: &LoadCase,
    e_pa: f64,
    i_m4: f64,
    sample_count: usize,
) -> CalcResult<AnalysisResult> {
    require_positive("span_m", span_m)?;
    if sample_count < 2 {
        return Err(CalcError::invalid_input(
            "sample_count",
            sample_count.to_string(),
            "At least two samples are needed to span the beam",
        ));
    }
    require_positive("e_pa", e_pa)?;
    require_positive("i_m4", i_m4)?;
    load_case.validate(span_m)?;

    debug!(
        "analysing '{}' load on {} m span (E = {} Pa, I = {} m^4, {} samples)",
        load_case.tag(),
        span_m,
        e_pa,
        i_m4,
        sample_count
    );

    let result = match *load_case {
        LoadCase::PointCenter { p_n } => solve_point_center(span_m, p_n, e_pa, i_m4, sample_count),
        LoadCase::PointAnywhere { p_n, a_m } => {
            solve_point_anywhere(span_m, p_n, a_m, e_pa, i_m4, sample_count)
        }
        LoadCase::UniformDistributed { w_n_per_m } => {
            solve_uniform(span_m, w_n_per_m, e_pa, i_m4, sample_count)
        }
        LoadCase::LinearlyVaryingDistributed { w_max_n_per_m } => {
            solve_linearly_varying(span_m, w_max_n_per_m, e_pa, i_m4, sample_count)
        }
        LoadCase::AppliedMoment { m_nm } => solve_applied_moment(span_m, m_nm, e_pa, i_m4, sample_count),
    };

    debug!(
        "R1 = {:.3} N, R2 = {:.3} N, M_max = {:.3} N·m, δ_max = {:.4} mm",
        result.reaction_left_n, result.reaction_right_n, result.max_moment_nm, result.max_deflection_mm
    );

    Ok(result)
}

/// Analyse a beam whose load pattern arrives as a string tag.
///
/// # Errors
///
/// `InvalidLoadCase` for an unrecognised tag, plus everything
/// [`compute_beam_response`] rejects.
pub fn compute_from_tag(
    span_m: f64,
    tag: &str,
    params: &LoadParams,
    e_pa: f64,
    i_m4: f64,
    sample_count: usize,
) -> CalcResult<AnalysisResult> {
    let load_case = LoadCase::from_tag(tag, params)?;
    compute_beam_response(span_m, &load_case, e_pa, i_m4, sample_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const E: f64 = 25e9;
    const I: f64 = 8.33e-6;

    #[test]
    fn test_sample_positions() {
        let xs = sample_positions(4.0, 10);
        assert_eq!(xs.len(), 10);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[9], 4.0);
        assert!(xs.windows(2).all(|w| w[1] > w[0]));

        assert_eq!(sample_positions(3.7, 2), vec![0.0, 3.7]);
    }

    #[test]
    fn test_odd_sample_count_hits_midspan_exactly() {
        for (span, n) in [(3.3, 7), (3.3, 13), (3.3, 25), (3.3, 49), (2.9, 27), (6.1, 7)] {
            let xs = sample_positions(span, n);
            assert_eq!(xs[(n - 1) / 2], span / 2.0, "span {} with {} samples", span, n);
        }
    }

    #[test]
    fn test_midspan_sample_takes_right_shear_branch() {
        let load = LoadCase::PointCenter { p_n: 10_000.0 };
        let result = compute_beam_response(3.3, &load, E, I, 7).unwrap();
        let mid = &result.samples[3];
        assert_eq!(mid.x_m, 1.65);
        assert_eq!(mid.shear_n, -5_000.0);
        assert_eq!(result.samples[2].shear_n, 5_000.0);
    }

    #[test]
    fn test_sample_on_load_position_takes_right_shear_branch() {
        // a = 1.1 on 3.3 m is the third of seven samples
        let load = LoadCase::PointAnywhere { p_n: 9_000.0, a_m: 1.1 };
        let result = compute_beam_response(3.3, &load, E, I, 7).unwrap();
        let r1 = result.reaction_left_n;
        assert_relative_eq!(result.samples[2].x_m, 1.1, max_relative = 1e-12);
        assert_relative_eq!(result.samples[2].shear_n, r1 - 9_000.0, max_relative = 1e-12);
        assert_relative_eq!(result.samples[1].shear_n, r1, max_relative = 1e-12);
    }

    #[test]
    fn test_equilibrium_of_every_case() {
        let cases = [
            LoadCase::PointCenter { p_n: 10_000.0 },
            LoadCase::PointAnywhere { p_n: 10_000.0, a_m: 1.1 },
            LoadCase::UniformDistributed { w_n_per_m: 4_000.0 },
            LoadCase::LinearlyVaryingDistributed { w_max_n_per_m: 6_000.0 },
            LoadCase::AppliedMoment { m_nm: -3_000.0 },
        ];
        for case in cases {
            let result = compute_beam_response(3.3, &case, E, I, 7).unwrap();
            assert_relative_eq!(
                result.total_reaction_n(),
                case.total_vertical_load(3.3),
                epsilon = 1e-9,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let load = LoadCase::PointCenter { p_n: 1_000.0 };
        let cases = [
            compute_beam_response(0.0, &load, E, I, 10),
            compute_beam_response(-4.0, &load, E, I, 10),
            compute_beam_response(4.0, &load, E, I, 1),
            compute_beam_response(4.0, &load, 0.0, I, 10),
            compute_beam_response(4.0, &load, E, -I, 10),
            compute_beam_response(4.0, &LoadCase::PointCenter { p_n: -1.0 }, E, I, 10),
        ];
        for result in cases {
            assert_eq!(result.unwrap_err().error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_unknown_tag() {
        let err = compute_from_tag(4.0, "cantilever_udl", &LoadParams::default(), E, I, 10).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_LOAD_CASE");
    }

    #[test]
    fn test_dispatch_by_tag() {
        let params = LoadParams {
            m_applied: Some(6_000.0),
            ..Default::default()
        };
        let result = compute_from_tag(3.0, "moment", &params, E, I, 4).unwrap();
        assert_eq!(result.load_case, LoadCase::AppliedMoment { m_nm: 6_000.0 });
        assert_eq!(result.reaction_right_n, 2_000.0);
    }

    #[test]
    fn test_sample_accessors_share_length() {
        let load = LoadCase::LinearlyVaryingDistributed { w_max_n_per_m: 5_000.0 };
        let result = compute_beam_response(5.0, &load, E, I, 25).unwrap();
        assert_eq!(result.x_samples().len(), 25);
        assert_eq!(result.shear_samples().len(), 25);
        assert_eq!(result.moment_samples().len(), 25);
        assert_eq!(result.deflection_samples().len(), 25);
    }

    #[test]
    fn test_result_serialization() {
        let load = LoadCase::PointAnywhere { p_n: 8_000.0, a_m: 1.0 };
        let result = compute_beam_response(4.0, &load, E, I, 5).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("max_deflection_mm"));
        let roundtrip: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
