// Copyright 2026 the Scrollsel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item-extent models used by the scanning distance measure.

/// A dense 1D strip of items `0..len` with measurable per-item extents.
///
/// `extent_of` takes `&mut self` because measuring an item that is not
/// currently realized on screen may require binding it into an off-screen
/// scratch slot and running layout on it; implementations are free to cache
/// the result. For the same reason a single call can be comparatively
/// expensive, which is exactly why the distance measure is bounded by a
/// perception range rather than scanning to the content edge unconditionally.
///
/// Extents are expected to be finite and non-negative, in the same 1D
/// coordinate space (typically logical pixels) as the perception ranges.
pub trait ItemExtents {
    /// Number of items in the strip.
    fn len(&self) -> usize;

    /// Returns `true` if the strip holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The extent (height) of the item at `index`, measuring it if needed.
    ///
    /// `index` is in `0..len`.
    fn extent_of(&mut self, index: usize) -> f64;
}

/// An [`ItemExtents`] model where every item has the same extent.
///
/// Useful for fixed-row-height lists and as a simple stand-in in tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedItemExtents {
    len: usize,
    extent: f64,
}

impl FixedItemExtents {
    /// Creates a model of `len` items, each `extent` units tall.
    #[must_use]
    pub fn new(len: usize, extent: f64) -> Self {
        Self { len, extent }
    }
}

impl ItemExtents for FixedItemExtents {
    fn len(&self) -> usize {
        self.len
    }

    fn extent_of(&mut self, _index: usize) -> f64 {
        self.extent
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedItemExtents, ItemExtents};

    #[test]
    fn fixed_model_basics() {
        let mut model = FixedItemExtents::new(3, 12.5);
        assert_eq!(model.len(), 3);
        assert!(!model.is_empty());
        assert_eq!(model.extent_of(0), 12.5);
        assert_eq!(model.extent_of(2), 12.5);

        let empty = FixedItemExtents::new(0, 1.0);
        assert!(empty.is_empty());
    }
}
