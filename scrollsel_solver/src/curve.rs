// Copyright 2026 the Scrollsel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotone Bezier easing curve and its evaluation by horizontal offset.

use kurbo::{CubicBez, ParamCurve, Point};

use crate::cubic::solve_bernstein_roots;

/// Builds the easing Bezier from `(0, 0)` to `(width, height)`.
///
/// The inner control points sit at `(curvature·width, 0)` and
/// `(width - curvature·width, height)`. For `curvature` in `[0, 0.5]` the X
/// component is monotonically non-decreasing in the curve parameter, which
/// makes the curve invertible as a function of x.
fn easing_bez(width: f64, height: f64, curvature: f64) -> CubicBez {
    let inset = curvature * width;
    CubicBez::new(
        Point::ZERO,
        Point::new(inset, 0.0),
        Point::new(width - inset, height),
        Point::new(width, height),
    )
}

/// Roots this close to the parameter range still count as inside it. The
/// closed-form solve puts the endpoint roots (x = 0, x = width) a few ulps
/// outside `[0, 1]` for some curvatures; without the tolerance the curve
/// would be undefined at its own endpoints.
const ROOT_EPSILON: f64 = 1e-9;

/// Finds the curve parameter whose X coordinate equals `x`, if any.
///
/// When several roots fall inside `[0, 1]` (possible only in numerically
/// degenerate configurations), the first root in the solver's emission order
/// wins. This is an accepted approximation, not a general curve inverse.
fn find_t(width: f64, curvature: f64, x: f64) -> Option<f64> {
    let inset = curvature * width;
    let roots = solve_bernstein_roots(x, 0.0, inset, width - inset, width);
    roots
        .into_iter()
        .find(|t| (-ROOT_EPSILON..=1.0 + ROOT_EPSILON).contains(t))
        .map(|t| t.clamp(0.0, 1.0))
}

/// Evaluates a continuous, monotone easing function at horizontal offset `x`.
///
/// The function `f` runs from `f(0) = 0` to `f(width) = height` and is
/// monotonically non-decreasing in between; `curvature` controls how sharply
/// it bends near its endpoints (`0.0` is a straight line). These properties
/// guarantee that linear combinations of several such curves stay continuous
/// and monotone, which is what the blend in `curve_middle` relies on.
///
/// A plain Bezier is not a function of x at all (it is parametric), but with
/// the control-point layout of this curve it coincides with one: the X
/// component is inverted in closed form via [`solve_bernstein_roots`] and
/// the curve is then evaluated at the recovered parameter.
///
/// Returns the point `(x, f(x))`, or `None` when `x` lies outside the
/// curve's domain.
///
/// `width` must be positive; perception ranges are validated accordingly by
/// [`SolverParams::new`](crate::SolverParams::new).
#[must_use]
pub fn curve(width: f64, height: f64, curvature: f64, x: f64) -> Option<Point> {
    let t = find_t(width, curvature, x)?;
    Some(easing_bez(width, height, curvature).eval(t))
}

#[cfg(test)]
mod tests {
    use super::curve;

    #[test]
    fn boundary_values_are_exact_for_any_curvature() {
        for curvature in [0.0, 0.1, 0.25, 0.4, 0.5] {
            let start = curve(2500.0, 0.5, curvature, 0.0).unwrap();
            assert!(start.y.abs() < 1e-9, "curvature {curvature}");
            let end = curve(2500.0, 0.5, curvature, 2500.0).unwrap();
            assert!((end.y - 0.5).abs() < 1e-9, "curvature {curvature}");
        }
    }

    #[test]
    fn zero_curvature_is_a_straight_line() {
        let (width, height) = (1000.0, 0.5);
        for x in [0.0, 125.0, 400.0, 999.0, 1000.0] {
            let pt = curve(width, height, 0.0, x).unwrap();
            let expected = height * x / width;
            assert!((pt.y - expected).abs() < 1e-6, "x = {x}");
        }
    }

    #[test]
    fn out_of_domain_offsets_have_no_value() {
        assert!(curve(100.0, 1.0, 0.4, -5.0).is_none());
        assert!(curve(100.0, 1.0, 0.4, 105.0).is_none());
    }

    #[test]
    fn is_monotone_in_x() {
        let mut prev = -1.0;
        for i in 0..=100 {
            let x = f64::from(i) * 10.0;
            let y = curve(1000.0, 1.0, 0.4, x).unwrap().y;
            assert!(y >= prev - 1e-9, "x = {x}");
            prev = y;
        }
    }

    #[test]
    fn reports_the_x_it_was_asked_for() {
        let pt = curve(800.0, 0.3, 0.35, 321.0).unwrap();
        assert!((pt.x - 321.0).abs() < 1e-6);
    }
}
