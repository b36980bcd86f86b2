// Copyright 2026 the Scrollsel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless controller wiring measurement, solving, and selection together.

use scrollsel_measure::{DistanceMeasure, Edge};
use scrollsel_solver::{SolverParams, compute_selection_ratio};

use crate::selector::Selector;

/// Drives scroll-to-select from scroll deltas.
///
/// On every vertical scroll delta the controller measures the distance to
/// both content edges, computes the selection ratio, and notifies the
/// [`Selector`]. The two measurements are independent; no ordering between
/// them is assumed.
///
/// The controller is headless: hosts forward their scroll events to
/// [`on_scrolled`](Self::on_scrolled) and keep the measure's viewport
/// snapshot current. Horizontal-only scroll updates should be reported with
/// a delta of `0.0`, which is ignored.
#[derive(Clone, Debug)]
pub struct ScrollSelector<D, S> {
    params: SolverParams,
    measure: D,
    selector: S,
    enabled: bool,
}

impl<D: DistanceMeasure, S: Selector> ScrollSelector<D, S> {
    /// Creates an enabled controller.
    #[must_use]
    pub fn new(params: SolverParams, measure: D, selector: S) -> Self {
        Self {
            params,
            measure,
            selector,
            enabled: true,
        }
    }

    /// Handles a vertical scroll by `delta` units.
    ///
    /// Does nothing while disabled or when `delta` is zero.
    pub fn on_scrolled(&mut self, delta: f64) {
        if !self.enabled || delta == 0.0 {
            return;
        }

        let top = self
            .measure
            .measure(self.params.top_perception_range(), Edge::Top);
        let bottom = self
            .measure
            .measure(self.params.bottom_perception_range(), Edge::Bottom);
        let ratio = compute_selection_ratio(&self.params, top, bottom);

        self.selector.on_selection_updated(ratio, top, bottom, delta);
    }

    /// Returns the current solver parameters.
    #[must_use]
    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Replaces the solver parameters; the next scroll event uses them.
    pub fn set_params(&mut self, params: SolverParams) {
        self.params = params;
    }

    /// Returns `true` if scroll events are currently processed.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables processing of scroll events.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns a shared reference to the distance measure.
    #[must_use]
    pub fn measure(&self) -> &D {
        &self.measure
    }

    /// Returns a mutable reference to the distance measure.
    ///
    /// Hosts use this to refresh the viewport snapshot after layout.
    pub fn measure_mut(&mut self) -> &mut D {
        &mut self.measure
    }

    /// Returns a shared reference to the selector.
    #[must_use]
    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Returns a mutable reference to the selector.
    pub fn selector_mut(&mut self) -> &mut S {
        &mut self.selector
    }

    /// Consumes the controller, returning the measure and selector.
    pub fn into_parts(self) -> (D, S) {
        (self.measure, self.selector)
    }
}
