// Copyright 2026 the Scrollsel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sub-band of the viewport where selection is allowed.

use core::fmt;

use scrollsel_solver::RemapInterval;

/// Error produced when constructing an invalid [`SelectionArea`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionAreaError {
    /// A bound fell outside `[0, 1]` or was not finite.
    OutOfBounds,
    /// `ratio_from` was not strictly below `ratio_to`.
    EmptyInterval,
}

impl fmt::Display for SelectionAreaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "selection area bounds must lie within [0, 1]"),
            Self::EmptyInterval => write!(f, "selection area must not be empty"),
        }
    }
}

impl core::error::Error for SelectionAreaError {}

/// The sub-band of a scrollable viewport where selection may occur.
///
/// Both bounds are ratios relative to the viewport extent, so an area keeps
/// its meaning when the viewport is resized. Shrinking the area lets an
/// application keep the selected item away from the outermost rows without
/// touching the viewport itself.
///
/// `SelectionArea` is an immutable value. To reconfigure the area at
/// runtime, build a new one and derive fresh solver parameters from it via
/// [`remap_interval`](Self::remap_interval); the next scroll event will use
/// them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionArea {
    ratio_from: f64,
    ratio_to: f64,
}

impl SelectionArea {
    /// Creates a selection area spanning `ratio_from..ratio_to` of the
    /// viewport.
    ///
    /// # Errors
    ///
    /// Bounds must satisfy `0 <= ratio_from < ratio_to <= 1`.
    pub fn new(ratio_from: f64, ratio_to: f64) -> Result<Self, SelectionAreaError> {
        if !(0.0..=1.0).contains(&ratio_from) || !(0.0..=1.0).contains(&ratio_to) {
            return Err(SelectionAreaError::OutOfBounds);
        }
        if ratio_from >= ratio_to {
            return Err(SelectionAreaError::EmptyInterval);
        }
        Ok(Self {
            ratio_from,
            ratio_to,
        })
    }

    /// Start of the area as a ratio of the viewport extent.
    #[must_use]
    pub fn ratio_from(&self) -> f64 {
        self.ratio_from
    }

    /// End of the area as a ratio of the viewport extent.
    #[must_use]
    pub fn ratio_to(&self) -> f64 {
        self.ratio_to
    }

    /// Returns `true` if the area covers the whole viewport.
    #[must_use]
    pub fn covers_whole_view(&self) -> bool {
        self.ratio_from == 0.0 && self.ratio_to == 1.0
    }

    /// Absolute start boundary (Y) of the area within a viewport of the
    /// given extent.
    #[must_use]
    pub fn from_y(&self, viewport_extent: f64) -> f64 {
        viewport_extent * self.ratio_from
    }

    /// Absolute end boundary (Y) of the area within a viewport of the given
    /// extent.
    #[must_use]
    pub fn to_y(&self, viewport_extent: f64) -> f64 {
        viewport_extent * self.ratio_to
    }

    /// Extent (height) of the area within a viewport of the given extent.
    #[must_use]
    pub fn area_extent(&self, viewport_extent: f64) -> f64 {
        self.to_y(viewport_extent) - self.from_y(viewport_extent)
    }

    /// Remaps a ratio from the area's space into viewport space.
    ///
    /// Given a ratio in `[0, 1]` relative to this area, returns the
    /// corresponding ratio relative to the enclosing viewport, so that
    /// `y = viewport_extent * remap_for_view(area_ratio)`.
    #[must_use]
    pub fn remap_for_view(&self, area_ratio: f64) -> f64 {
        if self.covers_whole_view() {
            area_ratio
        } else {
            self.ratio_from + (self.ratio_to - self.ratio_from) * area_ratio
        }
    }

    /// The solver remap interval that makes computed ratios land inside
    /// this area.
    ///
    /// Plug the result into
    /// [`SolverParams::with_remap`](scrollsel_solver::SolverParams::with_remap).
    #[must_use]
    pub fn remap_interval(&self) -> RemapInterval {
        RemapInterval {
            from: self.ratio_from,
            to: self.ratio_to,
        }
    }
}

impl Default for SelectionArea {
    /// The whole viewport.
    fn default() -> Self {
        Self {
            ratio_from: 0.0,
            ratio_to: 1.0,
        }
    }
}
