// Copyright 2026 the Scrollsel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection capability implemented by the embedding application.

/// Reacts to a freshly computed selection ratio.
///
/// Implementations typically translate the ratio into a viewport Y position
/// (`y = viewport_extent * ratio`) and mark the item found there. The raw
/// edge distances and the scroll delta that triggered the update are passed
/// along for implementations that want them (for example, to bias the
/// selection in the scroll direction).
///
/// A ratio of `None` means the solver could not decide; the fallback policy
/// (usually: keep the previous selection) belongs to the implementation.
pub trait Selector {
    /// Called after every solve with the computed ratio and its inputs.
    fn on_selection_updated(
        &mut self,
        ratio: Option<f64>,
        top_distance: Option<f64>,
        bottom_distance: Option<f64>,
        scroll_delta: f64,
    );
}
