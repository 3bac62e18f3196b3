//! Load cases and load combinations
//!
//! # Overview
//!
//! - [`LoadCase`] - The single load pattern applied to the beam (closed set of five)
//! - [`LoadCaseKind`] - Payload-free discriminant with the stable string tags
//! - [`LoadParams`] - Loosely-typed parameter bag used when building a case from a tag
//! - [`LoadCategory`] - Dead / live / wind / seismic classification
//! - [`LoadCombination`] / [`LimitState`] - Factored combinations per limit state
//!
//! All magnitudes are SI: N for point loads, N/m for distributed loads, N·m
//! for moments, m for positions.
//!
//! # Example
//!
//! ```
//! use beam_core::loads::{LoadCase, LoadParams};
//!
//! let params = LoadParams { w: Some(10_000.0), ..Default::default() };
//! let case = LoadCase::from_tag("udl", &params).unwrap();
//! assert_eq!(case, LoadCase::UniformDistributed { w_n_per_m: 10_000.0 });
//! assert_eq!(case.total_vertical_load(4.0), 40_000.0);
//!
//! assert!(LoadCase::from_tag("cantilever", &params).is_err());
//! ```

pub mod combinations;
pub mod load_types;

pub use combinations::{
    combinations_for, factored_loads, governing, FactoredLoad, LimitState, LoadCombination,
    LoadComponents,
};
pub use load_types::LoadCategory;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, CalcError, CalcResult};

/// Load pattern applied to a simply-supported beam.
///
/// ## JSON Example
///
/// ```json
/// { "type": "PointAnywhere", "p_n": 20000.0, "a_m": 1.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LoadCase {
    /// Point load P (N) at midspan
    PointCenter { p_n: f64 },

    /// Point load P (N) at distance a (m) from the left support
    PointAnywhere { p_n: f64, a_m: f64 },

    /// Uniform load w (N/m) over the full span
    UniformDistributed { w_n_per_m: f64 },

    /// Triangular load rising from 0 at x = 0 to w_max (N/m) at x = L
    LinearlyVaryingDistributed { w_max_n_per_m: f64 },

    /// Couple M (N·m) applied at the right support. Either sign is valid.
    AppliedMoment { m_nm: f64 },
}

impl LoadCase {
    /// Payload-free discriminant
    pub fn kind(&self) -> LoadCaseKind {
        match self {
            LoadCase::PointCenter { .. } => LoadCaseKind::PointCenter,
            LoadCase::PointAnywhere { .. } => LoadCaseKind::PointAnywhere,
            LoadCase::UniformDistributed { .. } => LoadCaseKind::UniformDistributed,
            LoadCase::LinearlyVaryingDistributed { .. } => LoadCaseKind::LinearlyVaryingDistributed,
            LoadCase::AppliedMoment { .. } => LoadCaseKind::AppliedMoment,
        }
    }

    /// Stable string tag (e.g., "udl")
    pub fn tag(&self) -> &'static str {
        self.kind().tag()
    }

    /// Primary magnitude as entered (N, N/m or N·m depending on the case)
    pub fn magnitude(&self) -> f64 {
        match *self {
            LoadCase::PointCenter { p_n } => p_n,
            LoadCase::PointAnywhere { p_n, .. } => p_n,
            LoadCase::UniformDistributed { w_n_per_m } => w_n_per_m,
            LoadCase::LinearlyVaryingDistributed { w_max_n_per_m } => w_max_n_per_m,
            LoadCase::AppliedMoment { m_nm } => m_nm,
        }
    }

    /// Total vertical load (N) the reactions must balance.
    ///
    /// Zero for an applied moment, which is self-equilibrating.
    pub fn total_vertical_load(&self, span_m: f64) -> f64 {
        match *self {
            LoadCase::PointCenter { p_n } => p_n,
            LoadCase::PointAnywhere { p_n, .. } => p_n,
            LoadCase::UniformDistributed { w_n_per_m } => w_n_per_m * span_m,
            LoadCase::LinearlyVaryingDistributed { w_max_n_per_m } => w_max_n_per_m * span_m / 2.0,
            LoadCase::AppliedMoment { .. } => 0.0,
        }
    }

    /// Validate the payload against the span.
    ///
    /// Point and distributed magnitudes must be finite and non-negative; the
    /// point-load position must lie in [0, L]; an applied moment only needs to
    /// be finite.
    pub fn validate(&self, span_m: f64) -> CalcResult<()> {
        match *self {
            LoadCase::PointCenter { p_n } => require_non_negative("p_n", p_n),
            LoadCase::PointAnywhere { p_n, a_m } => {
                require_non_negative("p_n", p_n)?;
                if !a_m.is_finite() || a_m < 0.0 || a_m > span_m {
                    return Err(CalcError::invalid_input(
                        "a_m",
                        a_m.to_string(),
                        format!("Load position must lie within the span [0, {}]", span_m),
                    ));
                }
                Ok(())
            }
            LoadCase::UniformDistributed { w_n_per_m } => require_non_negative("w_n_per_m", w_n_per_m),
            LoadCase::LinearlyVaryingDistributed { w_max_n_per_m } => {
                require_non_negative("w_max_n_per_m", w_max_n_per_m)
            }
            LoadCase::AppliedMoment { m_nm } => {
                if !m_nm.is_finite() {
                    return Err(CalcError::invalid_input(
                        "m_nm",
                        m_nm.to_string(),
                        "Applied moment must be finite",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Build a load case from a string tag and a parameter bag.
    ///
    /// # Errors
    ///
    /// - `InvalidLoadCase` if the tag is not one of the supported tags
    /// - `InvalidInput` if a parameter the case needs is missing
    pub fn from_tag(tag: &str, params: &LoadParams) -> CalcResult<Self> {
        let kind: LoadCaseKind = tag.parse()?;
        let case = match kind {
            LoadCaseKind::PointCenter => LoadCase::PointCenter {
                p_n: required(params.p, "P")?,
            },
            LoadCaseKind::PointAnywhere => LoadCase::PointAnywhere {
                p_n: required(params.p, "P")?,
                a_m: required(params.a, "a")?,
            },
            LoadCaseKind::UniformDistributed => LoadCase::UniformDistributed {
                w_n_per_m: required(params.w, "w")?,
            },
            LoadCaseKind::LinearlyVaryingDistributed => LoadCase::LinearlyVaryingDistributed {
                w_max_n_per_m: required(params.w_max, "w_max")?,
            },
            LoadCaseKind::AppliedMoment => LoadCase::AppliedMoment {
                m_nm: required(params.m_applied, "M_applied")?,
            },
        };
        Ok(case)
    }
}

fn required(value: Option<f64>, field: &str) -> CalcResult<f64> {
    value.ok_or_else(|| CalcError::invalid_input(field, "missing", "Parameter is required for this load type"))
}

/// Discriminant of [`LoadCase`] with the string tags used by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadCaseKind {
    PointCenter,
    PointAnywhere,
    #[serde(rename = "udl")]
    UniformDistributed,
    #[serde(rename = "uvl")]
    LinearlyVaryingDistributed,
    #[serde(rename = "moment")]
    AppliedMoment,
}

impl LoadCaseKind {
    /// All supported load patterns
    pub const ALL: [LoadCaseKind; 5] = [
        LoadCaseKind::PointCenter,
        LoadCaseKind::PointAnywhere,
        LoadCaseKind::UniformDistributed,
        LoadCaseKind::LinearlyVaryingDistributed,
        LoadCaseKind::AppliedMoment,
    ];

    /// Stable string tag
    pub fn tag(&self) -> &'static str {
        match self {
            LoadCaseKind::PointCenter => "point_center",
            LoadCaseKind::PointAnywhere => "point_anywhere",
            LoadCaseKind::UniformDistributed => "udl",
            LoadCaseKind::LinearlyVaryingDistributed => "uvl",
            LoadCaseKind::AppliedMoment => "moment",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadCaseKind::PointCenter => "Point load at midspan",
            LoadCaseKind::PointAnywhere => "Point load at any position",
            LoadCaseKind::UniformDistributed => "Uniformly distributed load",
            LoadCaseKind::LinearlyVaryingDistributed => "Linearly varying load",
            LoadCaseKind::AppliedMoment => "Applied end moment",
        }
    }
}

impl FromStr for LoadCaseKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoadCaseKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.tag() == s.trim())
            .ok_or_else(|| CalcError::invalid_load_case(s))
    }
}

impl std::fmt::Display for LoadCaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Parameter bag for [`LoadCase::from_tag`] (SI units).
///
/// Field names follow the request vocabulary (`P`, `a`, `w`, `w_max`, `M_applied`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadParams {
    /// Point load (N)
    #[serde(rename = "P", default)]
    pub p: Option<f64>,
    /// Point-load position from the left support (m)
    #[serde(default)]
    pub a: Option<f64>,
    /// Uniform load (N/m)
    #[serde(default)]
    pub w: Option<f64>,
    /// Peak triangular load (N/m)
    #[serde(default)]
    pub w_max: Option<f64>,
    /// Applied moment (N·m)
    #[serde(rename = "M_applied", default)]
    pub m_applied: Option<f64>,
}
