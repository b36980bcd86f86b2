// Copyright 2026 the Scrollsel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The distance-measure contract and the outward-scanning implementation.

use crate::extents::ItemExtents;

/// A content edge of a scrollable strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// The very top edge of the content.
    Top,
    /// The very bottom edge of the content.
    Bottom,
}

/// Measures the distance from the current scroll position to a content edge.
///
/// This is the provider contract consumed by the selection-ratio solver:
///
/// - A returned distance is non-negative and strictly less than
///   `perception_range`.
/// - An edge at or beyond the perception range — or one the provider cannot
///   determine cheaply — is reported as `None`, never as a sentinel number.
///
/// `measure` takes `&mut self` because implementations may have to measure
/// off-screen items on demand (see [`ItemExtents::extent_of`]).
pub trait DistanceMeasure {
    /// Returns the distance to `edge`, or `None` if it exceeds
    /// `perception_range`.
    fn measure(&mut self, perception_range: f64, edge: Edge) -> Option<f64>;
}

/// Snapshot of which items the host currently has realized.
///
/// All values live in viewport coordinates. The overhangs describe how far
/// the outermost realized items extend past the viewport: `leading_overhang`
/// is the part of the first realized item hidden above the viewport top, and
/// `trailing_overhang` the part of the last realized item hidden below the
/// viewport bottom. For a host with child geometry this is
/// `-first_child_top` and `last_child_bottom - viewport_extent`
/// respectively, clamped to zero (the constructor clamps).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Index of the first realized item.
    pub first_realized: usize,
    /// Index of the last realized item (inclusive).
    pub last_realized: usize,
    /// How far the first realized item extends above the viewport top.
    pub leading_overhang: f64,
    /// How far the last realized item extends below the viewport bottom.
    pub trailing_overhang: f64,
}

impl Viewport {
    /// Creates a viewport snapshot, clamping negative overhangs to zero.
    #[must_use]
    pub fn new(
        first_realized: usize,
        last_realized: usize,
        leading_overhang: f64,
        trailing_overhang: f64,
    ) -> Self {
        Self {
            first_realized,
            last_realized,
            leading_overhang: leading_overhang.max(0.0),
            trailing_overhang: trailing_overhang.max(0.0),
        }
    }
}

/// [`DistanceMeasure`] over an [`ItemExtents`] model.
///
/// Starting from the outermost realized item's overhang, the measure walks
/// item by item away from the viewport, accumulating extents, until either
/// the content edge is reached (the accumulated distance is returned) or the
/// accumulated distance reaches the perception range (`None`). The walk is
/// therefore bounded by the perception range no matter how long the list is.
///
/// Hosts refresh the [`Viewport`] snapshot whenever layout or scroll state
/// changes; with no snapshot (or an empty model) every measurement is
/// `None`.
#[derive(Clone, Debug)]
pub struct ExtentDistanceMeasure<M> {
    model: M,
    viewport: Option<Viewport>,
}

impl<M: ItemExtents> ExtentDistanceMeasure<M> {
    /// Creates a measure over `model` with no viewport snapshot yet.
    #[must_use]
    pub fn new(model: M) -> Self {
        Self {
            model,
            viewport: None,
        }
    }

    /// Replaces the viewport snapshot. `None` means nothing is realized.
    pub fn set_viewport(&mut self, viewport: Option<Viewport>) {
        self.viewport = viewport;
    }

    /// Returns the current viewport snapshot.
    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Returns a shared reference to the underlying extent model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Returns a mutable reference to the underlying extent model.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }
}

impl<M: ItemExtents> DistanceMeasure for ExtentDistanceMeasure<M> {
    fn measure(&mut self, perception_range: f64, edge: Edge) -> Option<f64> {
        let viewport = self.viewport?;
        let len = self.model.len();
        if len == 0 {
            return None;
        }

        let mut explored;
        match edge {
            Edge::Top => {
                explored = viewport.leading_overhang;
                let mut index = viewport.first_realized;
                while explored < perception_range && index > 0 {
                    index -= 1;
                    explored += self.model.extent_of(index);
                }
            }
            Edge::Bottom => {
                explored = viewport.trailing_overhang;
                let mut index = viewport.last_realized + 1;
                while explored < perception_range && index < len {
                    explored += self.model.extent_of(index);
                    index += 1;
                }
            }
        }

        if explored >= perception_range {
            None
        } else {
            Some(explored)
        }
    }
}
