//! # Strength and Serviceability Checks
//!
//! Pure pass/fail checks applied to an analysis result:
//!
//! - [`stress_check`] - extreme-fiber bending stress M/Z against an allowable
//! - [`deflection_check`] - peak deflection against span/250
//! - [`stress_distribution`] - linear stress profile over the section depth
//!
//! Units are the caller's. The beam calculation passes moments in N·mm and
//! section moduli in mm³ so stresses come out in MPa.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::checks::{deflection_check, stress_check};
//!
//! // 20 kN·m on a 300 x 500 mm section (Z = 12.5e6 mm³) against M20
//! let stress = stress_check(20e6, 12.5e6, 20.0).unwrap();
//! assert!((stress.actual_mpa - 1.6).abs() < 1e-12);
//! assert!(stress.passes);
//!
//! let deflection = deflection_check(12.0, 4000.0).unwrap();
//! assert_eq!(deflection.limit_mm, 16.0);
//! assert!(deflection.passes);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};

/// Serviceability limit: allowable deflection is span / 250
pub const SERVICEABILITY_SPAN_RATIO: f64 = 250.0;

/// Outcome of a bending stress check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressCheck {
    /// Extreme-fiber stress M/Z
    pub actual_mpa: f64,
    /// Allowable stress compared against
    pub allowable_mpa: f64,
    /// |actual| / allowable. Must be ≤ 1.0 to pass.
    pub utilisation: f64,
    /// actual ≤ allowable
    pub passes: bool,
}

/// Outcome of a deflection check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionCheck {
    /// Peak deflection (mm)
    pub actual_mm: f64,
    /// span / 250 (mm)
    pub limit_mm: f64,
    /// actual / limit
    pub utilisation: f64,
    /// actual ≤ limit (non-strict)
    pub passes: bool,
}

/// Compare the extreme-fiber stress M/Z against an allowable stress.
///
/// # Errors
///
/// `InvalidInput` if Z or the allowable stress is not a positive, finite
/// number, or if the moment is not finite.
pub fn stress_check(m_max: f64, z: f64, allowable: f64) -> CalcResult<StressCheck> {
    if !z.is_finite() || z <= 0.0 {
        return Err(CalcError::invalid_input(
            "z",
            z.to_string(),
            "Section modulus must be positive",
        ));
    }
    require_positive("allowable", allowable)?;
    if !m_max.is_finite() {
        return Err(CalcError::invalid_input(
            "m_max",
            m_max.to_string(),
            "Moment must be finite",
        ));
    }

    let actual = m_max / z;
    Ok(StressCheck {
        actual_mpa: actual,
        allowable_mpa: allowable,
        utilisation: actual.abs() / allowable,
        passes: actual <= allowable,
    })
}

/// Compare a peak deflection against the span/250 serviceability limit.
///
/// # Errors
///
/// `InvalidInput` if the span is not positive or the deflection is negative
/// or not finite.
pub fn deflection_check(actual_mm: f64, span_mm: f64) -> CalcResult<DeflectionCheck> {
    require_positive("span_mm", span_mm)?;
    require_non_negative("actual_mm", actual_mm)?;

    let limit_mm = span_mm / SERVICEABILITY_SPAN_RATIO;
    Ok(DeflectionCheck {
        actual_mm,
        limit_mm,
        utilisation: actual_mm / limit_mm,
        passes: actual_mm <= limit_mm,
    })
}

/// Stress at evenly spaced depths through the section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressProfile {
    /// Depth below the extreme fiber, 0 to d inclusive
    pub depths: Vec<f64>,
    /// Stress at each depth, same unit as the fiber stress
    pub stresses: Vec<f64>,
}

/// Linear stress profile from `stress_at_fibre` at depth 0 down to zero at
/// full depth, sampled at `points` positions.
///
/// # Errors
///
/// `InvalidInput` if the depth is not positive or fewer than two points are
/// requested.
pub fn stress_distribution(stress_at_fibre: f64, depth: f64, points: usize) -> CalcResult<StressProfile> {
    require_positive("depth", depth)?;
    if points < 2 {
        return Err(CalcError::invalid_input(
            "points",
            points.to_string(),
            "At least two points are needed for a profile",
        ));
    }

    let last = points - 1;
    let depths: Vec<f64> = (0..points)
        .map(|i| if i == last { depth } else { depth * (i as f64 / last as f64) })
        .collect();
    let stresses = depths
        .iter()
        .map(|&y| stress_at_fibre * (1.0 - y / depth))
        .collect();

    Ok(StressProfile { depths, stresses })
}
