// Copyright 2026 the Scrollsel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrollsel Select: the selection surface of scroll-to-select.
//!
//! The other two crates in this family are pure inputs and math: a distance
//! provider (`scrollsel_measure`) and the ratio solver (`scrollsel_solver`).
//! This crate is where those are wired to an application:
//!
//! - [`Selector`] is the single-method capability an application implements
//!   to react to a freshly computed selection ratio (typically by
//!   highlighting the item under the corresponding viewport position). What
//!   to do when the ratio is `None` — most commonly keeping the previous
//!   selection — is the application's policy.
//! - [`SelectionArea`] restricts selection to a sub-band of the viewport.
//!   It is an immutable value: to move or resize the area, construct a new
//!   one and rebuild the solver parameters from it; the next scroll event
//!   picks it up naturally.
//! - [`ScrollSelector`] is a headless controller that, on every vertical
//!   scroll delta, measures both edge distances, runs the solver, and
//!   notifies the selector.
//!
//! ## Minimal example
//!
//! ```rust
//! use scrollsel_measure::{ExtentDistanceMeasure, FixedItemExtents, Viewport};
//! use scrollsel_select::{ScrollSelector, Selector};
//! use scrollsel_solver::SolverParams;
//!
//! struct Highlight {
//!     last_ratio: Option<f64>,
//! }
//!
//! impl Selector for Highlight {
//!     fn on_selection_updated(
//!         &mut self,
//!         ratio: Option<f64>,
//!         _top_distance: Option<f64>,
//!         _bottom_distance: Option<f64>,
//!         _scroll_delta: f64,
//!     ) {
//!         // Keep the previous selection when the solver has no answer.
//!         if ratio.is_some() {
//!             self.last_ratio = ratio;
//!         }
//!     }
//! }
//!
//! let mut measure = ExtentDistanceMeasure::new(FixedItemExtents::new(1000, 20.0));
//! measure.set_viewport(Some(Viewport::new(0, 10, 0.0, 0.0)));
//!
//! let mut selector = ScrollSelector::new(
//!     SolverParams::default(),
//!     measure,
//!     Highlight { last_ratio: None },
//! );
//!
//! // The list is at its top: the ratio snaps to 0.
//! selector.on_scrolled(-12.0);
//! assert!(selector.selector().last_ratio.unwrap().abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod area;
mod driver;
mod selector;

pub use area::{SelectionArea, SelectionAreaError};
pub use driver::ScrollSelector;
pub use selector::Selector;
