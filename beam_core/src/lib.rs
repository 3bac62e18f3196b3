//! # beam_core - Simply-Supported Beam Analysis Engine
//!
//! `beam_core` computes support reactions, shear, bending moment and deflection
//! for a simply-supported beam under one of five standard load cases, then
//! checks bending stress and deflection for a rectangular concrete or steel
//! section. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **SI inside**: N, m, Pa, m⁴ throughout; deflections reported in mm
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::calculations::compute_beam_response;
//! use beam_core::loads::LoadCase;
//! use beam_core::sections::rectangular_section;
//! use beam_core::materials::material_lookup;
//!
//! let section = rectangular_section(0.3, 0.5).unwrap();
//! let concrete = material_lookup("M25").unwrap();
//! let load = LoadCase::PointCenter { p_n: 50_000.0 };
//!
//! let result = compute_beam_response(6.0, &load, concrete.e_pa, section.i_m4, 21).unwrap();
//! assert_eq!(result.reaction_left_n, 25_000.0);
//! assert_eq!(result.max_moment_nm, 75_000.0);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("max_deflection_mm"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Analysis dispatcher, load-case solvers, checks, full beam calculation
//! - [`equations`] - Closed-form beam and section formulas
//! - [`loads`] - Load cases, categories and limit-state combinations
//! - [`materials`] - Concrete and steel grade table
//! - [`sections`] - Rectangular section properties
//! - [`settings`] - Request defaults
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod sections;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, compute_beam_response, AnalysisResult, BeamInput, BeamResult};
pub use errors::{CalcError, CalcResult};
pub use loads::{LimitState, LoadCase};
pub use settings::AnalysisSettings;
