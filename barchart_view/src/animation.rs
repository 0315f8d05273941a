// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative transition requests.
//!
//! The views never run animations themselves. They describe a property change from an old value
//! to a new one and hand it to the surface, which plays it on its own clock.

use kurbo::{BezPath, Point, Size};

use crate::constants::ANIMATION_DURATION;

/// A property transition, from the previous geometry to the current one.
#[derive(Clone, Debug, PartialEq)]
pub enum AnimatedProperty {
    /// Morph a path element by element. Both paths share the same element structure.
    Path {
        /// Path before the update.
        from: BezPath,
        /// Path after the update.
        to: BezPath,
    },
    /// Move the layer's center.
    Position {
        /// Center before the update.
        from: Point,
        /// Center after the update.
        to: Point,
    },
    /// Resize the layer around its center.
    Bounds {
        /// Size before the update.
        from: Size,
        /// Size after the update.
        to: Size,
    },
}

/// Easing curve of a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimingFunction {
    /// Slow start and slow end.
    #[default]
    EaseInEaseOut,
}

impl TimingFunction {
    /// The two inner control points of the unit cubic Bezier defining this curve.
    ///
    /// The curve runs from `(0, 0)` to `(1, 1)`; x is time and y is progress.
    pub fn control_points(self) -> (Point, Point) {
        match self {
            Self::EaseInEaseOut => (Point::new(0.42, 0.0), Point::new(0.58, 1.0)),
        }
    }
}

/// A transition request for one layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    /// What changes.
    pub property: AnimatedProperty,
    /// Duration in seconds.
    pub duration: f64,
    /// Easing curve.
    pub timing: TimingFunction,
}

impl Animation {
    /// Creates a transition with the standard duration and easing.
    pub fn new(property: AnimatedProperty) -> Self {
        Self {
            property,
            duration: ANIMATION_DURATION,
            timing: TimingFunction::EaseInEaseOut,
        }
    }

    /// Morphs a path.
    pub fn path(from: BezPath, to: BezPath) -> Self {
        Self::new(AnimatedProperty::Path { from, to })
    }

    /// Moves a center point.
    pub fn position(from: Point, to: Point) -> Self {
        Self::new(AnimatedProperty::Position { from, to })
    }

    /// Resizes bounds.
    pub fn bounds(from: Size, to: Size) -> Self {
        Self::new(AnimatedProperty::Bounds { from, to })
    }
}
