// Copyright 2026 the Scrollsel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end properties of the selection-ratio solver.
//!
//! These exercise `compute_selection_ratio` as a black box: monotonicity as
//! an edge approaches, exact boundary and neutral values, remap behavior,
//! and the degenerate straight-line configuration.

use scrollsel_solver::{
    RemapInterval, SolverParams, compute_selection_ratio, curve, solve_bernstein_roots,
};

#[test]
fn ratio_is_monotone_as_the_top_edge_approaches() {
    let params = SolverParams::default();
    let mut prev = f64::INFINITY;
    let mut d = params.top_perception_range();
    while d >= 0.0 {
        let ratio = compute_selection_ratio(&params, Some(d), None).unwrap();
        assert!(
            ratio <= prev + 1e-9,
            "ratio must not increase as the top edge nears (d = {d})"
        );
        prev = ratio;
        d -= 25.0;
    }
    // And it bottoms out at the edge itself.
    let at_edge = compute_selection_ratio(&params, Some(0.0), None).unwrap();
    assert!(at_edge.abs() < 1e-6);
}

#[test]
fn ratio_is_monotone_as_the_bottom_edge_approaches() {
    let params = SolverParams::default();
    let mut prev = -f64::INFINITY;
    let mut d = params.bottom_perception_range();
    while d >= 0.0 {
        let ratio = compute_selection_ratio(&params, None, Some(d)).unwrap();
        assert!(
            ratio >= prev - 1e-9,
            "ratio must not decrease as the bottom edge nears (d = {d})"
        );
        prev = ratio;
        d -= 25.0;
    }
    let at_edge = compute_selection_ratio(&params, None, Some(0.0)).unwrap();
    assert!((at_edge - 1.0).abs() < 1e-6);
}

#[test]
fn neutral_default_is_exact() {
    let params = SolverParams::new(1200.0, 900.0, 0.37, 0.8).unwrap();
    assert_eq!(compute_selection_ratio(&params, None, None), Some(0.37));
}

#[test]
fn remap_shifts_and_scales_the_ratio() {
    let params = SolverParams::default().with_remap(RemapInterval::new(0.1, 0.9).unwrap());

    // Neutral 0.5 lands in the middle of the remapped interval.
    let neutral = compute_selection_ratio(&params, None, None).unwrap();
    assert!((neutral - 0.5).abs() < 1e-12);

    // The interval endpoints are reached at the content edges.
    let top = compute_selection_ratio(&params, Some(0.0), None).unwrap();
    assert!((top - 0.1).abs() < 1e-6);
    let bottom = compute_selection_ratio(&params, None, Some(0.0)).unwrap();
    assert!((bottom - 0.9).abs() < 1e-6);
}

#[test]
fn remap_never_applies_to_none() {
    // A top distance beyond the perception range is a provider contract
    // violation; the curve has no value there and the remap must not
    // manufacture one.
    let params = SolverParams::default().with_remap(RemapInterval::new(5.0, 10.0).unwrap());
    let out_of_domain = compute_selection_ratio(&params, Some(99_999.0), None);
    assert_eq!(out_of_domain, None);
}

#[test]
fn without_remap_is_the_identity() {
    let remapped = SolverParams::default().with_remap(RemapInterval::new(0.0, 2.0).unwrap());
    let plain = remapped.without_remap();
    let r0 = compute_selection_ratio(&plain, Some(700.0), None).unwrap();
    let r1 = compute_selection_ratio(&remapped, Some(700.0), None).unwrap();
    assert!((r1 - 2.0 * r0).abs() < 1e-9);
}

#[test]
fn full_stiffness_degenerates_to_straight_lines() {
    // stiffness 1.0 means zero curvature: the easing curve is a straight
    // line and the ratio interpolates linearly with the distance.
    let params = SolverParams::new(2000.0, 2000.0, 0.5, 1.0).unwrap();
    for d in [0.0, 500.0, 1000.0, 1500.0, 2000.0] {
        let ratio = compute_selection_ratio(&params, Some(d), None).unwrap();
        let expected = 0.5 * d / 2000.0;
        assert!((ratio - expected).abs() < 1e-6, "d = {d}");
    }
}

#[test]
fn curve_endpoint_contract_holds_for_public_curve() {
    for curvature in [0.0, 0.2, 0.5] {
        let start = curve(640.0, 1.0, curvature, 0.0).unwrap();
        assert!(start.y.abs() < 1e-9);
        let end = curve(640.0, 1.0, curvature, 640.0).unwrap();
        assert!((end.y - 1.0).abs() < 1e-9);
    }
}

#[test]
fn planted_roots_are_recovered_through_the_public_solver() {
    // Strictly monotone Bernstein coefficients: one root per target value.
    let (p0, p1, p2, p3) = (0.0, 0.25, 0.75, 1.0);
    for t in [0.05, 0.33, 0.5, 0.66, 0.95] {
        let mt = 1.0 - t;
        let x = 3.0 * p1 * mt * mt * t + 3.0 * p2 * mt * t * t + p3 * t * t * t;
        let roots = solve_bernstein_roots(x, p0, p1, p2, p3);
        assert!(
            roots.as_slice().iter().any(|r| (r - t).abs() < 1e-6),
            "t = {t}, roots = {:?}",
            roots.as_slice()
        );
    }
}

#[test]
fn touching_both_edges_yields_a_definite_ratio() {
    // A list short enough to fit the viewport measures 0 to both edges —
    // an in-contract input (distances live in `[0, range)`). The result
    // must be a definite ratio, never NaN.
    let params = SolverParams::default();
    let ratio = compute_selection_ratio(&params, Some(0.0), Some(0.0)).unwrap();
    assert!(ratio.is_finite());
    assert!((ratio - 0.5).abs() < 1e-9);

    // Remap must propagate the definite value, not a NaN.
    let remapped = params.with_remap(RemapInterval::new(0.2, 0.8).unwrap());
    let ratio = compute_selection_ratio(&remapped, Some(0.0), Some(0.0)).unwrap();
    assert!(ratio.is_finite());
    assert!((ratio - 0.5).abs() < 1e-9);
}

#[test]
fn documented_scenarios() {
    // top = 0, bottom unknown: pinned to the top.
    let params = SolverParams::default();
    let r = compute_selection_ratio(&params, Some(0.0), None).unwrap();
    assert!(r.abs() < 1e-6);

    // Both unknown: neutral.
    assert_eq!(compute_selection_ratio(&params, None, None), Some(0.5));

    // Symmetric midpoints: close to center.
    let r = compute_selection_ratio(&params, Some(1250.0), Some(1250.0)).unwrap();
    assert!((r - 0.5).abs() < 0.05);
}
