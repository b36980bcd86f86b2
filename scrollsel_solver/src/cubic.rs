// Copyright 2026 the Scrollsel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form root finding for cubics in Bernstein form.
//!
//! The curve engine needs to invert the X component of its easing Bezier on
//! every scroll event, potentially several times per frame, so iterative
//! root finding (bisection, Newton) is avoided entirely in favor of
//! Cardano's method on the depressed cubic. Degenerate configurations where
//! the cubic collapses to a quadratic or linear curve (for example a
//! stiffness of `1.0`, i.e. zero curvature, which yields a straight line)
//! are detected up front and solved at the lower degree instead of dividing
//! by a near-zero leading coefficient.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use core::f64::consts::TAU;

/// Coefficients with magnitude below this are treated as zero when deciding
/// the effective degree of the polynomial.
const COEFF_EPSILON: f64 = 1e-6;

fn approx_zero(v: f64) -> bool {
    v.abs() < COEFF_EPSILON
}

/// Real roots of a cubic: at most three values, in solver emission order.
///
/// The order is the one produced by the trigonometric/Cardano branches of
/// [`solve_bernstein_roots`] and is relied upon by the curve engine's
/// first-in-range tie-break, so it is part of this type's contract.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CubicRoots {
    vals: [f64; 3],
    len: u8,
}

impl CubicRoots {
    const fn empty() -> Self {
        Self {
            vals: [0.0; 3],
            len: 0,
        }
    }

    fn push(&mut self, t: f64) {
        debug_assert!(self.len < 3, "a cubic has at most three real roots");
        self.vals[self.len as usize] = t;
        self.len += 1;
    }

    /// Returns the roots as a slice, in emission order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.vals[..self.len as usize]
    }

    /// Returns the number of real roots found (0 to 3).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` if no real root was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl IntoIterator for CubicRoots {
    type Item = f64;
    type IntoIter = core::iter::Take<core::array::IntoIter<f64, 3>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vals.into_iter().take(self.len as usize)
    }
}

/// Finds the parameter values `t` at which a cubic curve with Bernstein
/// coefficients `(p0, p1, p2, p3)` equals `x`.
///
/// The Bernstein coefficients are first converted to standard polynomial
/// form `a·t³ + b·t² + c·t + d = 0` (with `d` absorbing `-x`), then solved:
///
/// - If the leading coefficient vanishes the curve is really quadratic or
///   linear and is solved as such; a fully constant curve yields no roots.
/// - Otherwise Cardano's method on the depressed cubic applies, using the
///   trigonometric form when the discriminant is negative (three real
///   roots).
///
/// Roots are *not* filtered to `[0, 1]`; callers select the range they care
/// about. Roots outside the curve's parameter range are still mathematically
/// valid solutions of the polynomial.
#[must_use]
pub fn solve_bernstein_roots(x: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> CubicRoots {
    let a = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
    let mut b = 3.0 * p0 - 6.0 * p1 + 3.0 * p2;
    let mut c = -3.0 * p0 + 3.0 * p1;
    let mut d = p0 - x;

    let mut roots = CubicRoots::empty();

    if approx_zero(a) {
        // Not a genuine cubic; root-find at the lower degree.
        if approx_zero(b) {
            if !approx_zero(c) {
                // Linear.
                roots.push(-d / c);
            }
            // Constant curve: no solutions.
            return roots;
        }
        // Quadratic. A negative discriminant means both roots are complex;
        // report none rather than a pair of NaNs.
        let disc = c * c - 4.0 * b * d;
        if disc >= 0.0 {
            let q = disc.sqrt();
            let b2 = 2.0 * b;
            roots.push((q - c) / b2);
            roots.push((-c - q) / b2);
        }
        return roots;
    }

    // Normalize and depress: t = u - b/3 removes the quadratic term.
    b /= a;
    c /= a;
    d /= a;
    let b3 = b / 3.0;
    let p = (3.0 * c - b * b) / 3.0;
    let p_third = p / 3.0;
    let q = (2.0 * b * b * b - 9.0 * b * c + 27.0 * d) / 27.0;
    let q2 = q / 2.0;
    let discriminant = q2 * q2 + p_third * p_third * p_third;

    if discriminant < 0.0 {
        // Three distinct real roots. Finding them via Cardano directly would
        // route through complex arithmetic, so use the trigonometric form.
        let mp3 = -p / 3.0;
        let r = (mp3 * mp3 * mp3).sqrt();
        let cos_phi = (-q / (2.0 * r)).clamp(-1.0, 1.0);
        let phi = cos_phi.acos();
        let t1 = 2.0 * r.cbrt();
        roots.push(t1 * (phi / 3.0).cos() - b3);
        roots.push(t1 * ((phi + TAU) / 3.0).cos() - b3);
        roots.push(t1 * ((phi + 2.0 * TAU) / 3.0).cos() - b3);
    } else if discriminant == 0.0 {
        // Repeated root.
        let u = if q2 < 0.0 { (-q2).cbrt() } else { -q2.cbrt() };
        roots.push(2.0 * u - b3);
        roots.push(-u - b3);
    } else {
        // One real root.
        let sd = discriminant.sqrt();
        let u = (-q2 + sd).cbrt();
        let v = (q2 + sd).cbrt();
        roots.push(u - v - b3);
    }

    roots
}

#[cfg(test)]
mod tests {
    use super::{CubicRoots, solve_bernstein_roots};

    /// Evaluates the cubic with Bernstein coefficients `(p0, p1, p2, p3)`
    /// at parameter `t`.
    fn bernstein(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
        let mt = 1.0 - t;
        p0 * mt * mt * mt + 3.0 * p1 * mt * mt * t + 3.0 * p2 * mt * t * t + p3 * t * t * t
    }

    fn assert_contains_root(roots: CubicRoots, expected: f64) {
        assert!(
            roots.as_slice().iter().any(|t| (t - expected).abs() < 1e-6),
            "expected root {expected} in {:?}",
            roots.as_slice()
        );
    }

    #[test]
    fn recovers_planted_roots_of_a_true_cubic() {
        // Control points of the easing curve for width 1, curvature 0.4;
        // strictly increasing in t, so each x in [0, 1] has one root there.
        let (p0, p1, p2, p3) = (0.0, 0.4, 0.6, 1.0);
        for t in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
            let x = bernstein(p0, p1, p2, p3, t);
            let roots = solve_bernstein_roots(x, p0, p1, p2, p3);
            assert!(!roots.is_empty());
            assert_contains_root(roots, t);
        }
    }

    #[test]
    fn solves_collapsed_linear_curve() {
        // Equally spaced coefficients make the Bernstein cubic collapse to
        // the identity: B(t) = t.
        let roots = solve_bernstein_roots(0.3, 0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0);
        assert_eq!(roots.len(), 1);
        assert_contains_root(roots, 0.3);
    }

    #[test]
    fn solves_collapsed_quadratic_curve() {
        // B(t) = t^2 has Bernstein coefficients (0, 0, 1/3, 1); the leading
        // coefficient cancels and the solver must take the quadratic path.
        let (p0, p1, p2, p3) = (0.0, 0.0, 1.0 / 3.0, 1.0);
        let roots = solve_bernstein_roots(0.25, p0, p1, p2, p3);
        assert_eq!(roots.len(), 2);
        assert_contains_root(roots, 0.5);
    }

    #[test]
    fn quadratic_with_no_real_solution_is_empty() {
        // B(t) = t^2 never reaches negative targets; the quadratic path
        // must report no roots instead of NaNs.
        let roots = solve_bernstein_roots(-0.25, 0.0, 0.0, 1.0 / 3.0, 1.0);
        assert!(roots.is_empty());
    }

    #[test]
    fn constant_curve_has_no_roots() {
        let roots = solve_bernstein_roots(0.5, 0.0, 0.0, 0.0, 0.0);
        assert!(roots.is_empty());
        assert_eq!(roots.as_slice(), &[] as &[f64]);
    }

    #[test]
    fn three_real_roots_are_all_reported() {
        // B(t) for coefficients chosen so the curve wiggles: x-coordinate of
        // a non-monotone Bezier, hit in its folded region.
        let (p0, p1, p2, p3) = (0.0, 1.5, -0.5, 1.0);
        let t_probe = 0.5;
        let x = bernstein(p0, p1, p2, p3, t_probe);
        let roots = solve_bernstein_roots(x, p0, p1, p2, p3);
        assert_eq!(roots.len(), 3);
        assert_contains_root(roots, t_probe);
        // Every reported root actually solves the equation.
        for t in roots {
            assert!((bernstein(p0, p1, p2, p3, t) - x).abs() < 1e-6);
        }
    }

    #[test]
    fn iteration_matches_slice() {
        let roots = solve_bernstein_roots(0.3, 0.0, 0.4, 0.6, 1.0);
        let mut n = 0;
        for (i, t) in roots.into_iter().enumerate() {
            assert_eq!(t, roots.as_slice()[i]);
            n += 1;
        }
        assert_eq!(n, roots.len());
    }
}
