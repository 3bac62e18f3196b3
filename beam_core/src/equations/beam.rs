//! # Simply-Supported Beam Formulas
//!
//! Closed-form equations for a simply-supported beam (pin at x = 0, roller at
//! x = L) under the five supported load patterns. Every function is pure and
//! unit-agnostic; the solvers feed them SI values (N, m, Pa, m⁴), so
//! deflections come out in meters.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `x` = Position along beam from left support
//! - `a` = Load position from left support, `b = L - a`
//! - `P` = Point load magnitude
//! - `w` = Uniform load intensity
//! - `w_max` = Peak intensity of a triangular load (at x = L)
//! - `M0` = Applied end moment
//! - `E` = Modulus of elasticity, `I` = Second moment of area
//! - `R1` = Left reaction, `R2` = Right reaction
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive causes tension on bottom (sagging)
//! - Shear: Positive when left side up relative to right
//! - Deflection: Positive downward
//! - Reactions: Positive upward
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Structural Analysis by R.C. Hibbeler

/// Relative band (fraction of L) within which a sample counts as sitting on
/// a shear discontinuity. Such a sample takes the right-hand branch.
pub const POSITION_TOLERANCE: f64 = 1e-9;

/// `x` lies strictly left of `at`, beyond rounding noise
#[inline]
fn left_of(x: f64, at: f64, l: f64) -> bool {
    x < at - POSITION_TOLERANCE * l
}

// =============================================================================
// POINT LOAD AT MIDSPAN
// =============================================================================

/// Reactions for point load P at midspan
///
/// ```text
///           P
///           ↓
///    ───────┬───────
///    △     L/2      △
///   R1  ←────L────→ R2
/// ```
///
/// # Formula
/// R1 = R2 = P/2
#[inline]
pub fn center_load_reactions(p: f64) -> (f64, f64) {
    let r = p / 2.0;
    (r, r)
}

/// Shear at position x for a midspan point load
///
/// # Formulas
/// - V(x) = +R1   for x < L/2
/// - V(x) = -R2   for x ≥ L/2
///
/// A sample at midspan, to within [`POSITION_TOLERANCE`], takes the
/// right-hand branch.
#[inline]
pub fn center_load_shear(p: f64, l: f64, x: f64) -> f64 {
    let (r1, r2) = center_load_reactions(p);
    if left_of(x, l / 2.0, l) {
        r1
    } else {
        -r2
    }
}

/// Moment at position x for a midspan point load
///
/// # Formulas
/// - M(x) = R1·x              for x < L/2
/// - M(x) = R1·x - P(x - L/2) for x ≥ L/2
#[inline]
pub fn center_load_moment(p: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = center_load_reactions(p);
    if x < l / 2.0 {
        r1 * x
    } else {
        r1 * x - p * (x - l / 2.0)
    }
}

/// Maximum moment for a midspan point load
///
/// # Formula
/// M_max = PL/4
#[inline]
pub fn center_load_max_moment(p: f64, l: f64) -> f64 {
    p * l / 4.0
}

/// Deflection at position x for a midspan point load
///
/// # Formulas
/// For x ≤ L/2:
/// ```text
/// δ(x) = Px(3L² - 4x²) / (48EI)
/// ```
/// For x > L/2 the same expression is evaluated at L - x, which keeps the
/// profile symmetric about midspan.
#[inline]
pub fn center_load_deflection(p: f64, l: f64, x: f64, e: f64, i: f64) -> f64 {
    let xi = if x <= l / 2.0 { x } else { l - x };
    p * xi / (48.0 * e * i) * (3.0 * l * l - 4.0 * xi * xi)
}

/// Maximum deflection for a midspan point load
///
/// # Formula
/// δ_max = PL³ / (48EI)   at x = L/2
#[inline]
pub fn center_load_max_deflection(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (48.0 * e * i)
}

// =============================================================================
// POINT LOAD AT ANY POSITION
// Simply-supported beam with concentrated load P at distance 'a' from left
// =============================================================================

/// Calculate reactions for point load P at position a on span L
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   R1  ←───────L────→ R2
/// ```
///
/// # Formulas (Roark's Table 8.1, Case 1a)
/// - R1 = P(L-a)/L
/// - R2 = Pa/L
///
/// Only L appears as a divisor, so a = 0 and a = L are well defined.
///
/// # Returns
/// (R1, R2) - Left and right reactions (positive upward)
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    let r1 = p * (b / l);
    let r2 = p * (a / l);
    (r1, r2)
}

/// Calculate shear at position x for point load P at position a
///
/// # Formulas
/// - V(x) = R1           for x < a
/// - V(x) = R1 - P       for x ≥ a
///
/// A sample on the load, to within [`POSITION_TOLERANCE`], takes the x ≥ a
/// branch.
#[inline]
pub fn point_load_shear(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    if left_of(x, a, l) {
        r1
    } else {
        r1 - p
    }
}

/// Calculate moment at position x for point load P at position a
///
/// # Formulas (Roark's Table 8.1, Case 1a)
/// - M(x) = R1·x           for x ≤ a
/// - M(x) = R1·x - P(x-a)  for x > a
///
/// Maximum moment occurs at the load point:
/// - M_max = R1·a = R2·(L-a)
#[inline]
pub fn point_load_moment(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    if x <= a {
        r1 * x
    } else {
        r1 * x - p * (x - a)
    }
}

/// Maximum moment for point load at position a
///
/// # Formula
/// M_max = R1·a
#[inline]
pub fn point_load_max_moment(p: f64, a: f64, l: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    r1 * a
}

/// Calculate deflection at position x for point load P at position a
///
/// # Formulas (Roark's Table 8.1, Case 1a)
///
/// For x ≤ a:
/// ```text
/// δ(x) = Pbx(L² - b² - x²) / (6EIL)
/// ```
///
/// For x > a:
/// ```text
/// δ(x) = Pa(L-x)(2Lx - x² - a²) / (6EIL)
/// ```
///
/// where b = L - a. The second form is the first one mirrored about the load
/// (L² - a² - (L-x)² = 2Lx - x² - a²).
#[inline]
pub fn point_load_deflection(p: f64, a: f64, l: f64, x: f64, e: f64, i: f64) -> f64 {
    let b = l - a;
    let ei = e * i;

    if x <= a {
        p * b * x * (l * l - b * b - x * x) / (6.0 * ei * l)
    } else {
        p * a * (l - x) * (2.0 * l * x - x * x - a * a) / (6.0 * ei * l)
    }
}

// =============================================================================
// UNIFORM LOAD FORMULAS
// Simply-supported beam with uniform load w over entire span
// =============================================================================

/// Calculate reactions for uniform load w over full span L
///
/// ```text
///    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
///    ═════════════════
///    △                △
///   R1  ←─────L─────→ R2
/// ```
///
/// # Formula
/// R1 = R2 = wL/2
#[inline]
pub fn uniform_load_reactions(w: f64, l: f64) -> (f64, f64) {
    let r = w * l / 2.0;
    (r, r)
}

/// Calculate shear at position x for uniform load w over full span
///
/// # Formula
/// V(x) = R1 - wx
///
/// - At x=0: V = +wL/2
/// - At x=L/2: V = 0
/// - At x=L: V = -wL/2
#[inline]
pub fn uniform_load_shear(w: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = uniform_load_reactions(w, l);
    r1 - w * x
}

/// Calculate moment at position x for uniform load w over full span
///
/// # Formula (Roark's Table 8.1, Case 2a)
/// M(x) = R1·x - wx²/2
#[inline]
pub fn uniform_load_moment(w: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = uniform_load_reactions(w, l);
    r1 * x - w * x * x / 2.0
}

/// Maximum moment for uniform load
///
/// # Formula
/// M_max = wL²/8
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// Calculate deflection at position x for uniform load w
///
/// # Formula (Roark's Table 8.1, Case 2a)
/// δ(x) = wx(L³ - 2Lx² + x³) / (24EI)
#[inline]
pub fn uniform_load_deflection(w: f64, l: f64, x: f64, e: f64, i: f64) -> f64 {
    w * x * (l.powi(3) - 2.0 * l * x * x + x.powi(3)) / (24.0 * e * i)
}

/// Maximum deflection for uniform load (at midspan)
///
/// # Formula
/// δ_max = 5wL⁴ / (384EI)
#[inline]
pub fn uniform_load_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    5.0 * w * l.powi(4) / (384.0 * e * i)
}

// =============================================================================
// TRIANGULAR (LINEARLY VARYING) LOAD FORMULAS
// Intensity rises from 0 at x = 0 to w_max at x = L
// =============================================================================

/// Reactions for a triangular load rising to w_max at the right support
///
/// ```text
///                  ↓ w_max
///              ↓ ↓ ↓
///        ↓ ↓ ↓ ↓ ↓ ↓
///    ════════════════
///    △               △
///   R1  ←────L────→ R2
/// ```
///
/// # Formulas
/// Resultant P = w_max·L/2 acting at x_cg = 2L/3
/// - R2 = P·x_cg/L  (= 2P/3)
/// - R1 = P - R2    (= P/3)
#[inline]
pub fn triangular_load_reactions(w_max: f64, l: f64) -> (f64, f64) {
    let total = w_max * l / 2.0;
    let x_cg = 2.0 * l / 3.0;
    let r2 = total * x_cg / l;
    let r1 = total - r2;
    (r1, r2)
}

/// Shear at position x for a triangular load
///
/// # Formula
/// V(x) = R1 - (w_max/L)·x²/2
#[inline]
pub fn triangular_load_shear(w_max: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = triangular_load_reactions(w_max, l);
    r1 - (w_max / l) * (x * x) / 2.0
}

/// Moment at position x for a triangular load
///
/// # Formula
/// M(x) = R1·x - w_max·x³/(6L)
#[inline]
pub fn triangular_load_moment(w_max: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = triangular_load_reactions(w_max, l);
    r1 * x - (w_max * x.powi(3)) / (6.0 * l)
}

/// Maximum moment for a triangular load
///
/// Shear vanishes at x = L/√3, giving
///
/// # Formula
/// M_max = w_max·L² / (9√3)
///
/// Grouped exactly as written so results agree bit-for-bit with other
/// implementations of the same expression.
#[inline]
pub fn triangular_load_max_moment(w_max: f64, l: f64) -> f64 {
    (w_max * l * l) / (9.0 * 3.0_f64.sqrt())
}

/// Deflection at position x for a triangular load
///
/// # Formula (Roark's Table 8.1, Case 2c)
/// δ(x) = w_max·x(7L⁴ - 10L²x² + 3x⁴) / (360EIL)
#[inline]
pub fn triangular_load_deflection(w_max: f64, l: f64, x: f64, e: f64, i: f64) -> f64 {
    let l2 = l * l;
    let x2 = x * x;
    w_max * x * (7.0 * l2 * l2 - 10.0 * l2 * x2 + 3.0 * x2 * x2) / (360.0 * e * i * l)
}

/// Reported peak deflection for a triangular load
///
/// # Formula
/// δ_max = w_max·L⁴ / (30EI)
///
/// This bounds the profile from above (the profile peak is ≈ 0.00652·w_max·L⁴/EI).
#[inline]
pub fn triangular_load_max_deflection(w_max: f64, l: f64, e: f64, i: f64) -> f64 {
    (w_max * l.powi(4)) / (30.0 * e * i)
}

// =============================================================================
// APPLIED END MOMENT
// Couple M0 applied at the right support, no transverse load
// =============================================================================

/// Reactions for an applied end moment
///
/// # Formulas
/// - R1 = -M0/L
/// - R2 = +M0/L
///
/// The reactions form a couple; their sum is exactly zero.
#[inline]
pub fn applied_moment_reactions(m0: f64, l: f64) -> (f64, f64) {
    let r2 = m0 / l;
    (-r2, r2)
}

/// Shear for an applied end moment: constant R1 over the span
#[inline]
pub fn applied_moment_shear(m0: f64, l: f64) -> f64 {
    applied_moment_reactions(m0, l).0
}

/// Moment at position x for an applied end moment
///
/// # Formula
/// M(x) = M0·x/L  (0 at the left support, M0 at the loaded end)
#[inline]
pub fn applied_moment_moment(m0: f64, l: f64, x: f64) -> f64 {
    m0 * x / l
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const E: f64 = 25e9;
    const I: f64 = 8.33e-6;

    #[test]
    fn test_center_load() {
        // 6 m span, 12 kN at midspan
        let (r1, r2) = center_load_reactions(12_000.0);
        assert_eq!(r1, 6_000.0);
        assert_eq!(r2, 6_000.0);
        assert_relative_eq!(center_load_moment(12_000.0, 6.0, 3.0), 18_000.0, epsilon = 1e-9);
        assert_relative_eq!(center_load_max_moment(12_000.0, 6.0), 18_000.0);
        assert_eq!(center_load_shear(12_000.0, 6.0, 3.0), -6_000.0);
        assert_eq!(center_load_shear(12_000.0, 6.0, 2.999), 6_000.0);
    }

    #[test]
    fn test_center_load_deflection_peak_matches_closed_form() {
        let mid = center_load_deflection(12_000.0, 6.0, 3.0, E, I);
        let peak = center_load_max_deflection(12_000.0, 6.0, E, I);
        assert_relative_eq!(mid, peak, max_relative = 1e-12);
    }

    #[test]
    fn test_point_load_reactions() {
        // 1000 N at 3 m on 10 m span
        let (r1, r2) = point_load_reactions(1000.0, 3.0, 10.0);
        assert_relative_eq!(r1, 700.0, epsilon = 1e-9);
        assert_relative_eq!(r2, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_point_load_moment_continuous_at_load() {
        let left = point_load_moment(1000.0, 3.0, 10.0, 3.0);
        let right = point_load_moment(1000.0, 3.0, 10.0, 3.0 + 1e-12);
        assert_relative_eq!(left, 2100.0, epsilon = 1e-9);
        assert_relative_eq!(left, right, epsilon = 1e-6);
        assert_relative_eq!(point_load_max_moment(1000.0, 3.0, 10.0), 2100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_point_load_deflection_continuous_at_load() {
        let left = point_load_deflection(1000.0, 3.0, 10.0, 3.0, E, I);
        let right = point_load_deflection(1000.0, 3.0, 10.0, 3.0 + 1e-9, E, I);
        assert_relative_eq!(left, right, max_relative = 1e-6);
        assert!(left > 0.0);
    }

    #[test]
    fn test_point_load_deflection_under_load() {
        // δ(a) = P·a²·b²/(3EIL)
        let (p, a, l) = (1000.0, 3.0, 10.0);
        let b = l - a;
        let expected = p * a * a * b * b / (3.0 * E * I * l);
        assert_relative_eq!(point_load_deflection(p, a, l, a, E, I), expected, max_relative = 1e-12);

        // Right-hand branch evaluated from the mirrored beam
        let x = 6.5;
        let mirrored = point_load_deflection(p, b, l, l - x, E, I);
        assert_relative_eq!(point_load_deflection(p, a, l, x, E, I), mirrored, max_relative = 1e-12);
    }

    #[test]
    fn test_point_load_shear_on_load_position() {
        // 3.3·(2/6) rounds away from 1.1
        let x = 3.3 * (2.0 / 6.0);
        assert_eq!(point_load_shear(9_000.0, 1.1, 3.3, x), point_load_shear(9_000.0, 1.1, 3.3, 1.1));
        assert_relative_eq!(point_load_shear(9_000.0, 1.1, 3.3, 1.1), -3_000.0, max_relative = 1e-12);
        assert_relative_eq!(point_load_shear(9_000.0, 1.1, 3.3, 1.0), 6_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_center_load_shear_just_below_midspan() {
        assert_eq!(center_load_shear(10_000.0, 3.3, 1.6499999999999997), -5_000.0);
    }

    #[test]
    fn test_point_load_at_support_is_inert() {
        let (r1, r2) = point_load_reactions(1000.0, 0.0, 10.0);
        assert_eq!(r1, 1000.0);
        assert_eq!(r2, 0.0);
        assert_eq!(point_load_max_moment(1000.0, 0.0, 10.0), 0.0);
        assert_eq!(point_load_deflection(1000.0, 0.0, 10.0, 4.0, E, I), 0.0);
    }

    #[test]
    fn test_uniform_load() {
        // 10 m span, 100 N/m
        assert_relative_eq!(uniform_load_moment(100.0, 10.0, 5.0), 1250.0, epsilon = 1e-9);
        assert_relative_eq!(uniform_load_max_moment(100.0, 10.0), 1250.0);
        assert_eq!(uniform_load_shear(100.0, 10.0, 5.0), 0.0);
        assert_eq!(uniform_load_shear(100.0, 10.0, 10.0), -500.0);
        let mid = uniform_load_deflection(100.0, 10.0, 5.0, E, I);
        assert_relative_eq!(mid, uniform_load_max_deflection(100.0, 10.0, E, I), max_relative = 1e-12);
    }

    #[test]
    fn test_triangular_load_reactions() {
        // w_max = 9 kN/m on 6 m → P = 27 kN
        let (r1, r2) = triangular_load_reactions(9_000.0, 6.0);
        assert_relative_eq!(r1, 9_000.0, max_relative = 1e-12);
        assert_relative_eq!(r2, 18_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_triangular_load_peak_moment_at_zero_shear() {
        let (w, l) = (9_000.0, 6.0);
        let x0 = l / 3.0_f64.sqrt();
        assert!(triangular_load_shear(w, l, x0).abs() < 1e-8);
        assert_relative_eq!(
            triangular_load_moment(w, l, x0),
            triangular_load_max_moment(w, l),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_triangular_load_deflection_vanishes_at_supports() {
        assert_eq!(triangular_load_deflection(9_000.0, 6.0, 0.0, E, I), 0.0);
        assert!(triangular_load_deflection(9_000.0, 6.0, 6.0, E, I).abs() < 1e-15);
        let peak = triangular_load_max_deflection(9_000.0, 6.0, E, I);
        let mid = triangular_load_deflection(9_000.0, 6.0, 3.1, E, I);
        assert!(peak > mid);
    }

    #[test]
    fn test_triangular_load_deflection_reference_peak() {
        // Profile peak ≈ 0.006522·w·L⁴/(EI) at x = L·√(1 - √(8/15)) ≈ 0.5193L
        let (w, l) = (9_000.0, 6.0);
        let x_peak = l * (1.0 - (8.0_f64 / 15.0).sqrt()).sqrt();
        assert_relative_eq!(x_peak / l, 0.5193, max_relative = 1e-4);

        let peak = triangular_load_deflection(w, l, x_peak, E, I);
        assert_relative_eq!(peak, 0.006522 * w * l.powi(4) / (E * I), max_relative = 1e-4);

        for x in [0.5, 1.5, 2.5, 3.0, 3.2, 3.5, 4.5, 5.5] {
            assert!(triangular_load_deflection(w, l, x, E, I) <= peak);
        }
        assert!(peak < triangular_load_max_deflection(w, l, E, I));
    }

    #[test]
    fn test_triangular_load_deflection_midspan() {
        // δ(L/2) = 5·w·L⁴/(768EI)
        let (w, l): (f64, f64) = (9_000.0, 6.0);
        let expected = 5.0 * w * l.powi(4) / (768.0 * E * I);
        assert_relative_eq!(triangular_load_deflection(w, l, l / 2.0, E, I), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_applied_moment() {
        let (r1, r2) = applied_moment_reactions(8_000.0, 4.0);
        assert_eq!(r1, -2_000.0);
        assert_eq!(r2, 2_000.0);
        assert_eq!(r1 + r2, 0.0);
        assert_eq!(applied_moment_shear(8_000.0, 4.0), -2_000.0);
        assert_eq!(applied_moment_moment(8_000.0, 4.0, 4.0), 8_000.0);
        assert_eq!(applied_moment_moment(8_000.0, 4.0, 0.0), 0.0);
    }
}
