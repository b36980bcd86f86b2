// Copyright 2026 the Scrollsel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Solver parameter record and its validation.

use core::fmt;

/// Error produced when a parameter record violates its preconditions.
///
/// Precondition violations are caller errors and are rejected eagerly at
/// construction time rather than surfacing later as meaningless ratios.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParamsError {
    /// A perception range was zero, negative, or not finite.
    NonPositivePerceptionRange,
    /// `selection_y_mid` was outside `[0, 1]` or not finite.
    SelectionYMidOutOfRange,
    /// `stiffness` was outside `[0, 1]` or not finite.
    StiffnessOutOfRange,
    /// A remap interval endpoint was NaN or infinite.
    NonFiniteRemapBound,
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositivePerceptionRange => {
                write!(f, "perception range must be positive and finite")
            }
            Self::SelectionYMidOutOfRange => {
                write!(f, "selection_y_mid must lie within [0, 1]")
            }
            Self::StiffnessOutOfRange => write!(f, "stiffness must lie within [0, 1]"),
            Self::NonFiniteRemapBound => write!(f, "remap interval bounds must be finite"),
        }
    }
}

impl core::error::Error for ParamsError {}

/// Target interval for remapping the computed ratio.
///
/// By default the selection ratio lives in `(0, 1)`. A remap interval scales
/// and shifts it affinely into `(from, to)`:
/// `remapped = from + (to - from) * ratio`. Reversed intervals
/// (`to < from`) are allowed and simply invert the direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RemapInterval {
    /// Value the ratio `0.0` maps to.
    pub from: f64,
    /// Value the ratio `1.0` maps to.
    pub to: f64,
}

impl RemapInterval {
    /// Creates a remap interval, rejecting non-finite endpoints.
    pub fn new(from: f64, to: f64) -> Result<Self, ParamsError> {
        if from.is_finite() && to.is_finite() {
            Ok(Self { from, to })
        } else {
            Err(ParamsError::NonFiniteRemapBound)
        }
    }

    /// Affinely maps a ratio from `(0, 1)` into this interval.
    #[must_use]
    pub fn remap(&self, ratio: f64) -> f64 {
        self.from + (self.to - self.from) * ratio
    }
}

/// Immutable input parameters for a selection-ratio solve.
///
/// A `SolverParams` value is read-only during a solve; there is no shared
/// mutable state anywhere in the solver. Live reconfiguration is simply a
/// matter of constructing a new value and passing it into the next solve.
///
/// The default parameters mirror a typical phone-sized scrolling view:
/// perception ranges of `2500.0` (roughly one to two viewport heights of
/// look-ahead), a neutral position at the viewport middle, and a gentle
/// easing bend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverParams {
    top_perception_range: f64,
    bottom_perception_range: f64,
    selection_y_mid: f64,
    stiffness: f64,
    remap: Option<RemapInterval>,
}

impl SolverParams {
    /// Creates a validated parameter record with no remap interval.
    ///
    /// # Errors
    ///
    /// Returns a [`ParamsError`] if either perception range is not strictly
    /// positive and finite, or if `selection_y_mid` / `stiffness` fall
    /// outside `[0, 1]`.
    pub fn new(
        top_perception_range: f64,
        bottom_perception_range: f64,
        selection_y_mid: f64,
        stiffness: f64,
    ) -> Result<Self, ParamsError> {
        if !(top_perception_range > 0.0 && top_perception_range.is_finite())
            || !(bottom_perception_range > 0.0 && bottom_perception_range.is_finite())
        {
            return Err(ParamsError::NonPositivePerceptionRange);
        }
        if !(0.0..=1.0).contains(&selection_y_mid) {
            return Err(ParamsError::SelectionYMidOutOfRange);
        }
        if !(0.0..=1.0).contains(&stiffness) {
            return Err(ParamsError::StiffnessOutOfRange);
        }
        Ok(Self {
            top_perception_range,
            bottom_perception_range,
            selection_y_mid,
            stiffness,
            remap: None,
        })
    }

    /// Returns a copy of these parameters with the given remap interval.
    #[must_use]
    pub fn with_remap(mut self, remap: RemapInterval) -> Self {
        self.remap = Some(remap);
        self
    }

    /// Returns a copy of these parameters with no remap interval.
    #[must_use]
    pub fn without_remap(mut self) -> Self {
        self.remap = None;
        self
    }

    /// Maximum distance the provider may scan toward the top content edge.
    #[must_use]
    pub fn top_perception_range(&self) -> f64 {
        self.top_perception_range
    }

    /// Maximum distance the provider may scan toward the bottom content edge.
    #[must_use]
    pub fn bottom_perception_range(&self) -> f64 {
        self.bottom_perception_range
    }

    /// Ratio assigned when neither content edge is within perception range.
    ///
    /// `0.0` is the viewport top, `1.0` the viewport bottom. This is also the
    /// split point between the top and bottom easing curves.
    #[must_use]
    pub fn selection_y_mid(&self) -> f64 {
        self.selection_y_mid
    }

    /// Easing curve stiffness.
    ///
    /// `0.0` is the maximal curve bend; `1.0` is a straight line. The curve's
    /// Bezier curvature is `1.0 - stiffness`.
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    /// Optional target interval the final ratio is remapped into.
    #[must_use]
    pub fn remap(&self) -> Option<RemapInterval> {
        self.remap
    }
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            top_perception_range: 2500.0,
            bottom_perception_range: 2500.0,
            selection_y_mid: 0.5,
            stiffness: 0.6,
            remap: None,
        }
    }
}
