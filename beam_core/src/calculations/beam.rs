//! # Simply-Supported Beam Calculation
//!
//! Full check of a rectangular reinforced-concrete or steel beam under one
//! load case: analysis, bending stress against the grade strength,
//! deflection against span/250, and the load-combination summary for the
//! selected limit state.
//!
//! ## Assumptions
//!
//! - Simply-supported (pin-roller) boundary conditions
//! - Single load case per calculation
//! - Rectangular section, linear-elastic material
//! - Analysis uses the unfactored load; combinations are reported alongside
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::{calculate, BeamInput};
//! use beam_core::loads::LoadCase;
//!
//! let input = BeamInput::new(
//!     "B-1",
//!     4.0,
//!     LoadCase::UniformDistributed { w_n_per_m: 10_000.0 },
//!     0.3,
//!     0.5,
//!     "M20",
//! );
//!
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.max_moment_nm, 20_000.0);
//! assert!(result.stress_ok);
//! assert!(result.deflection_ok);
//! println!("Bending stress: {:.2} MPa", result.stress_mpa);
//! println!("Governing: {}", result.governing_combination.name);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::loads::{factored_loads, governing, FactoredLoad, LimitState, LoadCase, LoadComponents};
use crate::materials::{material_lookup, MaterialProperties};
use crate::sections::{rectangular_section, SectionProperties};
use crate::settings::MAX_SAMPLE_COUNT;
use crate::units::{Meters, Millimeters, NewtonMeters, NewtonMillimeters};

use super::beam_analysis::compute_beam_response;
use super::checks::{deflection_check, stress_check, stress_distribution, DeflectionCheck, StressCheck, StressProfile};

/// Points in the reported stress profile
const STRESS_PROFILE_POINTS: usize = 10;

fn default_material_grade() -> String {
    "M20".to_string()
}

fn default_sample_count() -> usize {
    10
}

/// Input parameters for a simply-supported beam (SI units).
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "span_m": 6.0,
///   "load_case": { "type": "PointAnywhere", "p_n": 20000.0, "a_m": 1.5 },
///   "width_m": 0.3,
///   "depth_m": 0.5,
///   "material_grade": "M25",
///   "sample_count": 25,
///   "limit_state": "collapse"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam (e.g., "B-1")
    #[serde(default)]
    pub label: String,

    /// Span between supports (m)
    pub span_m: f64,

    /// Load pattern and magnitude
    pub load_case: LoadCase,

    /// Section width b (m)
    pub width_m: f64,

    /// Section depth d (m)
    pub depth_m: f64,

    /// Material grade designation (e.g., "M20", "Fe415")
    #[serde(default = "default_material_grade")]
    pub material_grade: String,

    /// Diagram stations, 2 to [`MAX_SAMPLE_COUNT`]
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    /// Limit state for the combination summary
    #[serde(default)]
    pub limit_state: LimitState,

    /// Round the reported peak moment to this many decimals
    #[serde(default)]
    pub moment_decimals: Option<u32>,
}

impl BeamInput {
    /// Input with default sample count, limit state and no rounding
    pub fn new(
        label: impl Into<String>,
        span_m: f64,
        load_case: LoadCase,
        width_m: f64,
        depth_m: f64,
        material_grade: impl Into<String>,
    ) -> Self {
        BeamInput {
            label: label.into(),
            span_m,
            load_case,
            width_m,
            depth_m,
            material_grade: material_grade.into(),
            sample_count: default_sample_count(),
            limit_state: LimitState::default(),
            moment_decimals: None,
        }
    }

    /// Validate input parameters.
    ///
    /// Section dimensions, E and the load payload are checked further down
    /// the pipeline; this catches the request-level limits.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("span_m", self.span_m)?;
        if !(2..=MAX_SAMPLE_COUNT).contains(&self.sample_count) {
            return Err(CalcError::invalid_input(
                "sample_count",
                self.sample_count.to_string(),
                format!("Sample count must be between 2 and {}", MAX_SAMPLE_COUNT),
            ));
        }
        if let Some(decimals) = self.moment_decimals {
            if decimals > 12 {
                return Err(CalcError::invalid_input(
                    "moment_decimals",
                    decimals.to_string(),
                    "At most 12 decimals are supported",
                ));
            }
        }
        Ok(())
    }

    /// Span in millimetres, the unit of the deflection limit
    pub fn span_mm(&self) -> f64 {
        Millimeters::from(Meters(self.span_m)).value()
    }
}

/// Results from a beam calculation.
///
/// Field names `R1`, `R2`, `M_max`, `x`, `shear`, `moment` and `deflection`
/// keep the response vocabulary in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    /// Label copied from the input
    pub label: String,

    /// Load case analysed
    pub load_case: LoadCase,

    /// Section used
    pub section: SectionProperties,

    /// Material used
    pub material: MaterialProperties,

    // === Reactions and demand ===
    /// Left reaction (N)
    #[serde(rename = "R1")]
    pub reaction_left_n: f64,

    /// Right reaction (N)
    #[serde(rename = "R2")]
    pub reaction_right_n: f64,

    /// Peak moment (N·m), rounded when `moment_decimals` was set
    #[serde(rename = "M_max")]
    pub max_moment_nm: f64,

    // === Diagrams ===
    /// Sample positions (m)
    #[serde(rename = "x")]
    pub x_m: Vec<f64>,

    /// Shear at each sample (N)
    #[serde(rename = "shear")]
    pub shear_n: Vec<f64>,

    /// Moment at each sample (N·m)
    #[serde(rename = "moment")]
    pub moment_nm: Vec<f64>,

    /// Deflection at each sample (mm, positive downward)
    #[serde(rename = "deflection")]
    pub deflection_mm: Vec<f64>,

    /// Peak deflection (mm)
    pub max_deflection_mm: f64,

    // === Checks ===
    /// Extreme-fiber bending stress (MPa)
    pub stress_mpa: f64,

    /// Bending stress within the grade strength
    pub stress_ok: bool,

    /// Deflection within span/250
    pub deflection_ok: bool,

    /// Bending check detail
    pub stress_check: StressCheck,

    /// Deflection check detail
    pub deflection_check: DeflectionCheck,

    /// Linear stress profile over the depth (mm, MPa)
    pub stress_profile: StressProfile,

    // === Combinations ===
    /// Limit state the combinations belong to
    pub limit_state: LimitState,

    /// Every combination of the limit state, in table order
    pub combinations: Vec<FactoredLoad>,

    /// Largest factored combination
    pub governing_combination: FactoredLoad,
}

impl BeamResult {
    /// Check if both stress and deflection pass
    pub fn passes(&self) -> bool {
        self.stress_ok && self.deflection_ok
    }

    /// Get the governing (highest) utilisation ratio
    pub fn governing_utilisation(&self) -> f64 {
        self.stress_check.utilisation.max(self.deflection_check.utilisation)
    }

    /// Get a description of what governs the design
    pub fn governing_condition(&self) -> &'static str {
        if self.stress_check.utilisation >= self.deflection_check.utilisation {
            "Bending stress"
        } else {
            "Deflection"
        }
    }
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Calculate reactions, diagrams, stress and deflection checks for a beam.
///
/// # Errors
///
/// - `InvalidInput` for a bad span, section, sample count or load payload
/// - `MaterialNotFound` for an unknown grade (no fallback is applied here)
///
/// No partial result is returned on failure.
pub fn calculate(input: &BeamInput) -> CalcResult<BeamResult> {
    input.validate()?;

    let section = rectangular_section(input.width_m, input.depth_m)?;
    let material = material_lookup(&input.material_grade)?;

    debug!(
        "beam '{}': {} m, {} x {} m, grade {}",
        input.label, input.span_m, input.width_m, input.depth_m, material.grade
    );

    let analysis = compute_beam_response(
        input.span_m,
        &input.load_case,
        material.e_pa,
        section.i_m4,
        input.sample_count,
    )?;

    // N·mm over mm³ gives MPa
    let m_nmm = NewtonMillimeters::from(NewtonMeters(analysis.max_moment_nm)).value();
    let stress = stress_check(m_nmm, section.z_mm3(), material.allowable_stress_mpa())?;
    let deflection = deflection_check(analysis.max_deflection_mm, input.span_mm())?;

    let depth_mm = Millimeters::from(Meters(section.depth_m)).value();
    let stress_profile = stress_distribution(stress.actual_mpa, depth_mm, STRESS_PROFILE_POINTS)?;

    let components = LoadComponents::from_load_case(&input.load_case);
    let combinations = factored_loads(&components, input.limit_state);
    let governing_combination = governing(&components, input.limit_state);

    let max_moment_nm = match input.moment_decimals {
        Some(decimals) => round_to(analysis.max_moment_nm, decimals),
        None => analysis.max_moment_nm,
    };

    debug!(
        "beam '{}': stress {:.3} MPa (ok = {}), deflection {:.3} mm (ok = {})",
        input.label, stress.actual_mpa, stress.passes, deflection.actual_mm, deflection.passes
    );

    Ok(BeamResult {
        label: input.label.clone(),
        load_case: input.load_case,
        section,
        material,
        reaction_left_n: analysis.reaction_left_n,
        reaction_right_n: analysis.reaction_right_n,
        max_moment_nm,
        x_m: analysis.x_samples(),
        shear_n: analysis.shear_samples(),
        moment_nm: analysis.moment_samples(),
        deflection_mm: analysis.deflection_samples(),
        max_deflection_mm: analysis.max_deflection_mm,
        stress_mpa: stress.actual_mpa,
        stress_ok: stress.passes,
        deflection_ok: deflection.passes,
        stress_check: stress,
        deflection_check: deflection,
        stress_profile,
        limit_state: input.limit_state,
        combinations,
        governing_combination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn udl_beam() -> BeamInput {
        BeamInput::new(
            "Test Beam",
            4.0,
            LoadCase::UniformDistributed { w_n_per_m: 10_000.0 },
            0.3,
            0.5,
            "M20",
        )
    }

    #[test]
    fn test_udl_beam() {
        let result = calculate(&udl_beam()).unwrap();

        assert_eq!(result.max_moment_nm, 20_000.0);
        assert_relative_eq!(result.reaction_left_n, 20_000.0);
        assert_relative_eq!(result.reaction_right_n, 20_000.0);
        assert_relative_eq!(result.stress_mpa, 1.6, max_relative = 1e-9);
        assert!(result.stress_ok);

        // δ = 5wL⁴/(384EI) with E = 25 GPa, I = 0.003125 m⁴
        let expected = 5.0 * 10_000.0 * 256.0 / (384.0 * 25e9 * 0.003125) * 1000.0;
        assert_relative_eq!(result.max_deflection_mm, expected, max_relative = 1e-9);
        assert_eq!(result.deflection_check.limit_mm, 16.0);
        assert!(result.deflection_ok);
        assert!(result.passes());

        assert_eq!(result.x_m.len(), 10);
        assert_eq!(result.shear_n.len(), 10);
        assert_eq!(result.moment_nm.len(), 10);
        assert_eq!(result.deflection_mm.len(), 10);
    }

    #[test]
    fn test_combinations_for_udl() {
        let result = calculate(&udl_beam()).unwrap();
        assert_eq!(result.limit_state, LimitState::Collapse);
        assert_eq!(result.combinations.len(), 6);
        // 1.5DL + 1.5LL and 1.5DL + 1.5WL tie; the earlier one governs
        assert_eq!(result.governing_combination.name, "1.5DL + 1.5LL");
        assert_eq!(result.governing_combination.load, 15_000.0);
    }

    #[test]
    fn test_stress_failure() {
        let mut input = udl_beam();
        input.load_case = LoadCase::UniformDistributed { w_n_per_m: 150_000.0 };
        let result = calculate(&input).unwrap();
        // M = 300 kN·m → 24 MPa > 20 MPa
        assert_relative_eq!(result.stress_mpa, 24.0, max_relative = 1e-9);
        assert!(!result.stress_ok);
        assert!(!result.passes());
        assert_eq!(result.governing_condition(), "Bending stress");
        assert_relative_eq!(result.governing_utilisation(), 1.2, max_relative = 1e-9);
    }

    #[test]
    fn test_steel_grade() {
        let mut input = udl_beam();
        input.material_grade = "fe415".to_string();
        let result = calculate(&input).unwrap();
        assert_eq!(result.material.grade, "Fe415");
        assert_eq!(result.stress_check.allowable_mpa, 415.0);
    }

    #[test]
    fn test_unknown_material_propagates() {
        let mut input = udl_beam();
        input.material_grade = "M99".to_string();
        let err = calculate(&input).unwrap_err();
        assert_eq!(err, CalcError::material_not_found("M99"));
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = udl_beam();
        input.span_m = 0.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = udl_beam();
        input.depth_m = -0.5;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = udl_beam();
        input.sample_count = MAX_SAMPLE_COUNT + 1;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = udl_beam();
        input.load_case = LoadCase::PointAnywhere { p_n: 1_000.0, a_m: 5.0 };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_moment_rounding() {
        let mut input = udl_beam();
        input.span_m = 3.0;
        input.load_case = LoadCase::PointAnywhere { p_n: 10_000.0, a_m: 1.0 };
        input.moment_decimals = Some(2);
        let result = calculate(&input).unwrap();
        assert_relative_eq!(result.max_moment_nm, 6_666.67, max_relative = 1e-12);
        // reactions are not rounded
        assert_relative_eq!(result.reaction_left_n, 20_000.0 / 3.0, max_relative = 1e-12);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_stress_profile() {
        let result = calculate(&udl_beam()).unwrap();
        let profile = &result.stress_profile;
        assert_eq!(profile.depths.len(), 10);
        assert_eq!(profile.depths[9], 500.0);
        assert_eq!(profile.stresses[0], result.stress_mpa);
        assert_eq!(profile.stresses[9], 0.0);
    }

    #[test]
    fn test_idempotent() {
        let input = udl_beam();
        assert_eq!(calculate(&input).unwrap(), calculate(&input).unwrap());
    }

    #[test]
    fn test_input_json_defaults() {
        let json = r#"{
            "span_m": 6.0,
            "load_case": { "type": "PointCenter", "p_n": 20000.0 },
            "width_m": 0.3,
            "depth_m": 0.5
        }"#;
        let input: BeamInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.material_grade, "M20");
        assert_eq!(input.sample_count, 10);
        assert_eq!(input.limit_state, LimitState::Collapse);
        assert_eq!(input.label, "");
    }

    #[test]
    fn test_result_json_field_names() {
        let result = calculate(&udl_beam()).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        for key in ["R1", "R2", "M_max", "x", "shear", "moment", "deflection", "stress_ok", "deflection_ok"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }
}
