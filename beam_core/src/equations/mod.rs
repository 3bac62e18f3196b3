//! # Structural Mechanics Equations
//!
//! All closed-form formulas used by the solvers live here, in one place, so
//! they can be checked against references independently of sampling and
//! result assembly.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported beam formulas (reactions, shear, moment, deflection)
//! - [`section`] - Rectangular cross-section properties (A, I, Z)
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Shear**: Positive when left side moves up relative to right
//! - **Deflection**: Positive downward
//! - **Reactions**: Positive upward (resisting gravity)

pub mod beam;
pub mod section;

pub use section::{rectangular_area, rectangular_moment_of_inertia, rectangular_section_modulus};
