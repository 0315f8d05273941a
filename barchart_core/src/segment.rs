// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line and curve descriptors handed to renderers.
//!
//! Both descriptors are plain point bundles; [`LineSegment::to_path`], [`CurvedSegment::to_path`]
//! and [`curved_path`] lower them into `kurbo` paths with a fixed element structure, so a
//! renderer can interpolate between an old and a new path element by element.

use kurbo::{BezPath, Point};

/// A straight segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    /// Start of the segment.
    pub start_point: Point,
    /// End of the segment.
    pub end_point: Point,
}

impl LineSegment {
    /// Creates a segment between two points.
    pub fn new(start_point: impl Into<Point>, end_point: impl Into<Point>) -> Self {
        Self {
            start_point: start_point.into(),
            end_point: end_point.into(),
        }
    }

    /// Creates a horizontal segment at `y` spanning `x0..x1`.
    pub fn horizontal(y: f64, x0: f64, x1: f64) -> Self {
        Self::new((x0, y), (x1, y))
    }

    /// Creates a vertical segment at `x` spanning `y0..y1`.
    pub fn vertical(x: f64, y0: f64, y1: f64) -> Self {
        Self::new((x, y0), (x, y1))
    }

    /// Returns the segment as an open path (`move_to`, `line_to`).
    pub fn to_path(&self) -> BezPath {
        let mut p = BezPath::new();
        p.move_to(self.start_point);
        p.line_to(self.end_point);
        p
    }
}

/// A cubic Bezier curve followed by a straight closing segment.
///
/// Renderers draw `start_point -> end_point` as a cubic curve through both control points, then a
/// line `end_point -> to_point`, then close the shape back to `start_point`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvedSegment {
    /// Where the curve starts.
    pub start_point: Point,
    /// Where the curve ends.
    pub end_point: Point,
    /// Target of the straight segment drawn after the curve.
    pub to_point: Point,
    /// First cubic control point.
    pub control_point1: Point,
    /// Second cubic control point.
    pub control_point2: Point,
}

impl CurvedSegment {
    /// Creates a curved segment.
    pub fn new(
        start_point: impl Into<Point>,
        end_point: impl Into<Point>,
        to_point: impl Into<Point>,
        control_point1: impl Into<Point>,
        control_point2: impl Into<Point>,
    ) -> Self {
        Self {
            start_point: start_point.into(),
            end_point: end_point.into(),
            to_point: to_point.into(),
            control_point1: control_point1.into(),
            control_point2: control_point2.into(),
        }
    }

    /// Creates a pure curve whose closing segment is empty (`to_point == end_point`).
    pub fn arc(
        start_point: impl Into<Point>,
        end_point: impl Into<Point>,
        control_point1: impl Into<Point>,
        control_point2: impl Into<Point>,
    ) -> Self {
        let end_point = end_point.into();
        Self::new(
            start_point,
            end_point,
            end_point,
            control_point1,
            control_point2,
        )
    }

    /// Returns this segment as a closed, fillable path.
    pub fn to_path(&self) -> BezPath {
        curved_path(core::slice::from_ref(self))
    }
}

/// Chains curved segments into one closed path.
///
/// Each segment contributes a `curve_to` and a `line_to`. When a segment does not start where the
/// previous one stopped, a `line_to` bridges the gap. An empty slice yields an empty path.
pub fn curved_path(segments: &[CurvedSegment]) -> BezPath {
    let mut p = BezPath::new();
    let Some(first) = segments.first() else {
        return p;
    };
    p.move_to(first.start_point);
    let mut current = first.start_point;
    for segment in segments {
        if segment.start_point != current {
            p.line_to(segment.start_point);
        }
        p.curve_to(
            segment.control_point1,
            segment.control_point2,
            segment.end_point,
        );
        p.line_to(segment.to_point);
        current = segment.to_point;
    }
    p.close_path();
    p
}
