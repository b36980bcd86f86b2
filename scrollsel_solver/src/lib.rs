// Copyright 2026 the Scrollsel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrollsel Solver: the numeric core of scroll-to-select.
//!
//! As a long scrollable list is scrolled, a "scroll-to-select" interaction
//! continuously computes a single real-valued **selection ratio** describing
//! which vertical position of the viewport should currently be treated as
//! selected: `0.0` means the very top edge of the content, `1.0` the very
//! bottom edge, and values in between track a smooth easing curve as either
//! edge comes into range.
//!
//! This crate is that computation and nothing else. It is a pure function of
//! two optional "distance to content edge" measurements plus a small
//! [`SolverParams`] record:
//!
//! - When **neither** edge is within the perception range (the common case
//!   for large lists), the ratio rests at the neutral
//!   [`selection_y_mid`](SolverParams::selection_y_mid) position.
//! - When **one** edge is within range, the ratio follows a monotone cubic
//!   Bezier easing curve from the neutral position toward that edge, reaching
//!   `0.0`/`1.0` exactly as the edge is reached.
//! - When **both** edges are within range (short content), the two easing
//!   curves are crossfaded over their overlap zone so the ratio stays
//!   continuous with no visible seam.
//!
//! Inverting the easing curve (finding the Bezier parameter for a given
//! horizontal offset) is done in closed form via Cardano's method on the
//! curve's Bernstein coefficients — see [`solve_bernstein_roots`]. No
//! iterative root finding is involved, so a solve is a fixed, small number of
//! floating-point operations and is cheap enough to run many times per frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use scrollsel_solver::{SolverParams, compute_selection_ratio};
//!
//! let params = SolverParams::default();
//!
//! // Both edges farther away than the perception range: neutral position.
//! assert_eq!(compute_selection_ratio(&params, None, None), Some(0.5));
//!
//! // Scrolled all the way to the top edge: selection pinned to the top.
//! let at_top = compute_selection_ratio(&params, Some(0.0), None).unwrap();
//! assert!(at_top.abs() < 1e-6);
//!
//! // Bottom edge reached (distance 0 to the bottom): pinned to the bottom.
//! let at_bottom = compute_selection_ratio(&params, None, Some(0.0)).unwrap();
//! assert!((at_bottom - 1.0).abs() < 1e-6);
//! ```
//!
//! ## Contract with the distance provider
//!
//! The solver does not measure anything itself. Callers obtain the two
//! distances from an edge-distance provider (see the `scrollsel_measure`
//! crate) under the contract that a reported distance is non-negative and
//! strictly less than the corresponding perception range; an edge at or
//! beyond the range must be reported as `None`. Unknown distances degrade
//! gracefully per the dispatch table of [`compute_selection_ratio`]; the
//! solver itself returns `None` only when a curve evaluation genuinely has
//! no answer.
//!
//! The solver holds no mutable state and performs no I/O; every entry point
//! is referentially transparent and safe to call concurrently.
//!
//! The intermediate curve functions ([`curve`], [`curve_top`],
//! [`curve_bottom`], [`curve_middle`]) are public to support debugging and
//! visualization of the easing behavior.
//!
//! This crate is `no_std`.

#![no_std]

mod cubic;
mod curve;
mod params;
mod solve;

pub use cubic::{CubicRoots, solve_bernstein_roots};
pub use curve::curve;
pub use params::{ParamsError, RemapInterval, SolverParams};
pub use solve::{compute_selection_ratio, curve_bottom, curve_middle, curve_top};
