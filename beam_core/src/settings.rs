//! # Analysis Settings
//!
//! Defaults applied when a request leaves a field out. Settings are plain
//! data: the library never reads the environment, and the CLI loads them
//! from an optional JSON file.
//!
//! Every field is optional in JSON; missing fields take their defaults.
//!
//! ```json
//! { "default_sample_count": 50, "fallback_material_grade": "M25" }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::settings::AnalysisSettings;
//!
//! let settings = AnalysisSettings::from_json_str(r#"{ "default_sample_count": 50 }"#).unwrap();
//! assert_eq!(settings.default_sample_count, 50);
//! assert_eq!(settings.fallback_material_grade, "M20");
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::LimitState;
use crate::materials::material_lookup;

/// Upper bound on diagram samples per analysis
pub const MAX_SAMPLE_COUNT: usize = 500;

/// Defaults used to fill in a beam request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Diagram samples when the request gives none
    pub default_sample_count: usize,

    /// Grade substituted for an unknown material designation
    pub fallback_material_grade: String,

    /// Limit state used for the load-combination summary
    pub default_limit_state: LimitState,

    /// Round the reported peak moment to this many decimals (no rounding if None)
    pub moment_decimals: Option<u32>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            default_sample_count: 10,
            fallback_material_grade: "M20".to_string(),
            default_limit_state: LimitState::Collapse,
            moment_decimals: None,
        }
    }
}

impl AnalysisSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let settings: AnalysisSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        Self::from_json_str(&contents).map_err(|err| match err {
            CalcError::SerializationError { reason } => CalcError::SerializationError {
                reason: format!("Invalid settings in {}: {}", path.display(), reason),
            },
            other => other,
        })
    }

    /// Reject a sample count outside [2, MAX_SAMPLE_COUNT] or an unknown
    /// fallback grade.
    pub fn validate(&self) -> CalcResult<()> {
        if !(2..=MAX_SAMPLE_COUNT).contains(&self.default_sample_count) {
            return Err(CalcError::invalid_input(
                "default_sample_count",
                self.default_sample_count.to_string(),
                format!("Sample count must be between 2 and {}", MAX_SAMPLE_COUNT),
            ));
        }
        material_lookup(&self.fallback_material_grade)?;
        Ok(())
    }
}
