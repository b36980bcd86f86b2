// Copyright 2026 the Scrollsel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Top/bottom curve components, the overlap blend, and the dispatch over
//! which edge distances are known.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::curve::curve;
use crate::params::SolverParams;

/// Evaluates the top-edge easing curve at distance `x` from the top edge.
///
/// The curve spans the top perception range horizontally and rises from
/// `0.0` at the edge to `selection_y_mid` at the far end of the range.
#[must_use]
pub fn curve_top(params: &SolverParams, x: f64) -> Option<f64> {
    curve(
        params.top_perception_range(),
        params.selection_y_mid(),
        1.0 - params.stiffness(),
        x,
    )
    .map(|pt| pt.y)
}

/// Evaluates the bottom-edge easing curve at offset `x`.
///
/// The curve spans the bottom perception range horizontally and covers the
/// remaining `1.0 - selection_y_mid` of the ratio interval. Note that `x`
/// here is measured from the *far end* of the bottom range
/// (`bottom_perception_range - bottom_distance`), so the value rises as the
/// bottom edge approaches.
#[must_use]
pub fn curve_bottom(params: &SolverParams, x: f64) -> Option<f64> {
    curve(
        params.bottom_perception_range(),
        1.0 - params.selection_y_mid(),
        1.0 - params.stiffness(),
        x,
    )
    .map(|pt| pt.y)
}

/// Blends the top and bottom curves when both edge distances are known.
///
/// Inside the overlap zone of the two perception ranges the curves crossfade
/// with piecewise-linear weights, eased by a square root so the handoff
/// slows near the edges of the blend window; outside it the nearer edge's
/// curve fully dominates. At the window boundaries the blend degenerates to
/// the respective single-edge curve, so there is no seam in the combined
/// ratio.
///
/// Returns `None` if either curve evaluation fails; callers fall back per
/// the [`compute_selection_ratio`] dispatch.
#[must_use]
pub fn curve_middle(params: &SolverParams, top_distance: f64, bottom_distance: f64) -> Option<f64> {
    let top_y = curve_top(params, top_distance)?;
    let bottom_y = curve_bottom(
        params,
        params.bottom_perception_range() - bottom_distance,
    )?;

    let x = top_distance;
    let total_width = top_distance + bottom_distance;
    let weight_from = (total_width - params.bottom_perception_range()).max(0.0);
    let weight_to = params.top_perception_range().min(total_width);
    let weight_dist = weight_to - weight_from;

    let (top_weight_raw, bottom_weight_raw) = if x < weight_from {
        (1.0, 0.0)
    } else if x > weight_to {
        (0.0, 1.0)
    } else if weight_dist == 0.0 {
        // Both distances are zero (content fits the viewport exactly): the
        // blend window collapses to a point and neither edge is nearer, so
        // the curves contribute evenly instead of dividing zero by zero.
        (0.5, 0.5)
    } else {
        let w = (x - weight_from) / weight_dist;
        (1.0 - w, w)
    };
    let top_weight = top_weight_raw.sqrt();
    let bottom_weight = bottom_weight_raw.sqrt();

    let top_y_shifted = top_y - params.selection_y_mid();
    Some(top_y_shifted * top_weight + bottom_y * bottom_weight + params.selection_y_mid())
}

/// Computes the selection ratio from the two optional edge distances.
///
/// The dispatch over which distances are known:
///
/// | top edge  | bottom edge | result                                        |
/// |-----------|-------------|-----------------------------------------------|
/// | known     | known       | [`curve_middle`] blend                        |
/// | known     | unknown     | [`curve_top`] at the top distance             |
/// | unknown   | known       | [`curve_bottom`] shifted up by the mid ratio  |
/// | unknown   | unknown     | `selection_y_mid` (neutral position)          |
///
/// If a remap interval is configured, the resulting ratio is affinely mapped
/// into it as a final step. `None` is never remapped: it always propagates
/// unchanged, meaning "no decision possible", and is never conflated with a
/// numeric zero.
#[must_use]
pub fn compute_selection_ratio(
    params: &SolverParams,
    top_distance: Option<f64>,
    bottom_distance: Option<f64>,
) -> Option<f64> {
    let ratio = match (top_distance, bottom_distance) {
        (Some(top), Some(bottom)) => curve_middle(params, top, bottom),
        (Some(top), None) => curve_top(params, top),
        (None, Some(bottom)) => curve_bottom(params, params.bottom_perception_range() - bottom)
            .map(|y| y + params.selection_y_mid()),
        (None, None) => Some(params.selection_y_mid()),
    };

    match params.remap() {
        Some(interval) => ratio.map(|r| interval.remap(r)),
        None => ratio,
    }
}
