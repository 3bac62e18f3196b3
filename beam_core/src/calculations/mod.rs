//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`beam_analysis`] - Reactions and sampled diagrams for one load case
//! - [`load_cases`] - Per-load-case solvers behind the dispatcher
//! - [`checks`] - Stress and deflection checks
//! - [`beam`] - Full beam check: section, material, analysis, checks, combinations

pub mod beam;
pub mod beam_analysis;
pub mod checks;
pub mod load_cases;

// Re-export commonly used types
pub use beam::{calculate, BeamInput, BeamResult};
pub use beam_analysis::{compute_beam_response, compute_from_tag, sample_positions, AnalysisResult, DiagramPoint};
pub use checks::{
    deflection_check, stress_check, stress_distribution, DeflectionCheck, StressCheck, StressProfile,
    SERVICEABILITY_SPAN_RATIO,
};
