//! Load-Case Solvers
//!
//! One solver per load pattern. Each is a pure function of
//! `(span, payload, E, I, sample_count)` producing reactions, sampled
//! diagrams and peak values. Inputs are assumed already validated by the
//! dispatcher ([`compute_beam_response`](super::beam_analysis::compute_beam_response)):
//! span, E and I positive, sample count at least 2, payload in range.
//!
//! Units: N, m, Pa, m⁴ in; deflections out in mm (positive downward).

use crate::equations::beam as eq;
use crate::loads::LoadCase;

use super::beam_analysis::{sample_diagram, AnalysisResult};

const MM_PER_M: f64 = 1000.0;

/// Point load P at midspan
pub fn solve_point_center(span_m: f64, p_n: f64, e_pa: f64, i_m4: f64, sample_count: usize) -> AnalysisResult {
    let (r1, r2) = eq::center_load_reactions(p_n);
    let samples = sample_diagram(span_m, sample_count, |x| {
        (
            eq::center_load_shear(p_n, span_m, x),
            eq::center_load_moment(p_n, span_m, x),
            eq::center_load_deflection(p_n, span_m, x, e_pa, i_m4) * MM_PER_M,
        )
    });

    AnalysisResult {
        load_case: LoadCase::PointCenter { p_n },
        span_m,
        reaction_left_n: r1,
        reaction_right_n: r2,
        max_moment_nm: eq::center_load_max_moment(p_n, span_m),
        samples,
        max_deflection_mm: eq::center_load_max_deflection(p_n, span_m, e_pa, i_m4) * MM_PER_M,
    }
}

/// Point load P at distance a from the left support
///
/// The peak deflection is the largest sampled magnitude: its location depends
/// on which side of the load is longer, so no single closed form applies.
pub fn solve_point_anywhere(
    span_m: f64,
    p_n: f64,
    a_m: f64,
    e_pa: f64,
    i_m4: f64,
    sample_count: usize,
) -> AnalysisResult {
    let (r1, r2) = eq::point_load_reactions(p_n, a_m, span_m);
    let samples = sample_diagram(span_m, sample_count, |x| {
        (
            eq::point_load_shear(p_n, a_m, span_m, x),
            eq::point_load_moment(p_n, a_m, span_m, x),
            eq::point_load_deflection(p_n, a_m, span_m, x, e_pa, i_m4) * MM_PER_M,
        )
    });
    let max_deflection_mm = samples
        .iter()
        .fold(0.0_f64, |peak, point| peak.max(point.deflection_mm.abs()));

    AnalysisResult {
        load_case: LoadCase::PointAnywhere { p_n, a_m },
        span_m,
        reaction_left_n: r1,
        reaction_right_n: r2,
        max_moment_nm: eq::point_load_max_moment(p_n, a_m, span_m),
        samples,
        max_deflection_mm,
    }
}

/// Uniform load w over the full span
pub fn solve_uniform(span_m: f64, w_n_per_m: f64, e_pa: f64, i_m4: f64, sample_count: usize) -> AnalysisResult {
    let (r1, r2) = eq::uniform_load_reactions(w_n_per_m, span_m);
    let samples = sample_diagram(span_m, sample_count, |x| {
        (
            eq::uniform_load_shear(w_n_per_m, span_m, x),
            eq::uniform_load_moment(w_n_per_m, span_m, x),
            eq::uniform_load_deflection(w_n_per_m, span_m, x, e_pa, i_m4) * MM_PER_M,
        )
    });

    AnalysisResult {
        load_case: LoadCase::UniformDistributed { w_n_per_m },
        span_m,
        reaction_left_n: r1,
        reaction_right_n: r2,
        max_moment_nm: eq::uniform_load_max_moment(w_n_per_m, span_m),
        samples,
        max_deflection_mm: eq::uniform_load_max_deflection(w_n_per_m, span_m, e_pa, i_m4) * MM_PER_M,
    }
}

/// Triangular load rising from 0 at the left support to w_max at the right
///
/// Peak moment uses the closed form w_max·L²/(9√3) rather than a search over
/// the samples.
pub fn solve_linearly_varying(
    span_m: f64,
    w_max_n_per_m: f64,
    e_pa: f64,
    i_m4: f64,
    sample_count: usize,
) -> AnalysisResult {
    let (r1, r2) = eq::triangular_load_reactions(w_max_n_per_m, span_m);
    let samples = sample_diagram(span_m, sample_count, |x| {
        (
            eq::triangular_load_shear(w_max_n_per_m, span_m, x),
            eq::triangular_load_moment(w_max_n_per_m, span_m, x),
            eq::triangular_load_deflection(w_max_n_per_m, span_m, x, e_pa, i_m4) * MM_PER_M,
        )
    });

    AnalysisResult {
        load_case: LoadCase::LinearlyVaryingDistributed { w_max_n_per_m },
        span_m,
        reaction_left_n: r1,
        reaction_right_n: r2,
        max_moment_nm: eq::triangular_load_max_moment(w_max_n_per_m, span_m),
        samples,
        max_deflection_mm: eq::triangular_load_max_deflection(w_max_n_per_m, span_m, e_pa, i_m4)
            * MM_PER_M,
    }
}

/// Couple M applied at the right support
///
/// This model carries no deflection for an end moment: every deflection
/// sample and the peak are zero. E and I are accepted for a uniform solver
/// signature only.
pub fn solve_applied_moment(span_m: f64, m_nm: f64, _e_pa: f64, _i_m4: f64, sample_count: usize) -> AnalysisResult {
    let (r1, r2) = eq::applied_moment_reactions(m_nm, span_m);
    let samples = sample_diagram(span_m, sample_count, |x| {
        (
            eq::applied_moment_shear(m_nm, span_m),
            eq::applied_moment_moment(m_nm, span_m, x),
            0.0,
        )
    });

    AnalysisResult {
        load_case: LoadCase::AppliedMoment { m_nm },
        span_m,
        reaction_left_n: r1,
        reaction_right_n: r2,
        max_moment_nm: m_nm.abs(),
        samples,
        max_deflection_mm: 0.0,
    }
}
