// Copyright 2026 the Scrollsel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrollsel Measure: edge-distance measurement for scroll-to-select.
//!
//! The selection-ratio solver consumes, for each content edge, an optional
//! distance: how far the viewport would have to scroll to reach the very top
//! or the very bottom of the content, or `None` when the edge lies beyond a
//! caller-supplied **perception range** and scanning further would be too
//! expensive. This crate defines that provider contract ([`DistanceMeasure`]
//! and [`Edge`]) plus a headless implementation for virtualized lists.
//!
//! The implementation ([`ExtentDistanceMeasure`]) does not know about
//! widgets. It works against an [`ItemExtents`] model — a dense strip of
//! items `0..len` whose per-item extents may have to be measured on demand,
//! possibly for items that are not currently realized on screen — together
//! with a [`Viewport`] snapshot describing which items the host currently
//! has realized and how far the outermost ones overhang the viewport.
//! Distance to an edge is then the overhang of the outermost realized item
//! plus the summed extents of every item beyond it, scanned outward until
//! the edge is found or the perception range is exhausted.
//!
//! ## Minimal example
//!
//! ```rust
//! use scrollsel_measure::{
//!     DistanceMeasure, Edge, ExtentDistanceMeasure, FixedItemExtents, Viewport,
//! };
//!
//! // 100 items, each 20 units tall; items 10..=14 are realized and the
//! // first of them pokes 5 units above the viewport top.
//! let model = FixedItemExtents::new(100, 20.0);
//! let mut measure = ExtentDistanceMeasure::new(model);
//! measure.set_viewport(Some(Viewport::new(10, 14, 5.0, 0.0)));
//!
//! // Ten whole items above the realized strip plus the 5-unit overhang.
//! assert_eq!(measure.measure(500.0, Edge::Top), Some(205.0));
//!
//! // The bottom edge is 85 * 20 = 1700 units away: farther than the
//! // 500-unit perception range, so it is reported as unknown.
//! assert_eq!(measure.measure(500.0, Edge::Bottom), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod extents;
mod measure;

pub use extents::{FixedItemExtents, ItemExtents};
pub use measure::{DistanceMeasure, Edge, ExtentDistanceMeasure, Viewport};
