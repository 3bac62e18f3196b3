//! # Cross-Section Property Formulas
//!
//! Geometric properties of a solid rectangular section bending about its
//! strong axis. Inputs in meters give results in m², m⁴ and m³.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Second moment of area
//! - `Z` = Section modulus (I/c, where c = d/2 is the distance to the extreme fiber)
//! - `b` = Width of section
//! - `d` = Depth (height) of section
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1

/// Calculate cross-sectional area for rectangular section
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × d
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_area;
///
/// // 300 mm x 500 mm beam
/// let area = rectangular_area(0.3, 0.5);
/// assert!((area - 0.15).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_area(b: f64, d: f64) -> f64 {
    b * d
}

/// Calculate second moment of area for rectangular section about centroidal axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │ ════════│ ← neutral axis at d/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula (Strong Axis Bending)
/// I = bd³/12
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

/// Calculate section modulus for rectangular section
///
/// # Formula
/// Z = I / (d/2)
///
/// Kept in the I/c form rather than bd²/6 so it shares rounding with the
/// inertia actually used in deflection.
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_section_modulus;
///
/// // Z = (0.3 × 0.5³ / 12) / 0.25 = 0.0125 m³
/// let z = rectangular_section_modulus(0.3, 0.5);
/// assert!((z - 0.0125).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_section_modulus(b: f64, d: f64) -> f64 {
    rectangular_moment_of_inertia(b, d) / (d / 2.0)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
