// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape primitives accepted by a [`RenderSurface`].
//!
//! Each shape knows how to draw itself and which property to animate when it replaces an older
//! version of itself: paths morph, labels and dots move, rectangles move and resize.

extern crate alloc;

use alloc::string::String;

use barchart_core::LineSegment;
use kurbo::{BezPath, Circle, Point, Rect};
use peniko::Color;

use crate::constants::{DASH_PATTERN, LABEL_FONT_SIZE};
use crate::{Animation, LayerId, RenderSurface};

/// A filled closed path (curved bar halves, bubbles).
#[derive(Clone, Debug)]
pub struct CurveShape {
    /// Closed path in content coordinates.
    pub path: BezPath,
    /// Fill color.
    pub fill: Color,
}

impl CurveShape {
    /// Creates a filled path.
    pub fn new(path: BezPath, fill: Color) -> Self {
        Self { path, fill }
    }

    /// Draws the shape, morphing from `previous` when given.
    pub fn draw_on(self, surface: &mut impl RenderSurface, previous: Option<BezPath>) -> LayerId {
        let to = self.path.clone();
        let layer = surface.draw(Primitive::Curve(self));
        if let Some(from) = previous {
            surface.animate(layer, Animation::path(from, to));
        }
        layer
    }
}

/// A stroked straight line.
#[derive(Clone, Debug)]
pub struct LineShape {
    /// Line geometry.
    pub segment: LineSegment,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub stroke_width: f64,
    /// Dash pattern (on, off), or `None` for a solid line.
    pub dash: Option<[f64; 2]>,
}

impl LineShape {
    /// Creates a solid line of width 1.
    pub fn new(segment: LineSegment, stroke: Color) -> Self {
        Self {
            segment,
            stroke,
            stroke_width: 1.0,
            dash: None,
        }
    }

    /// Sets the stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Uses the standard dash pattern when `dashed` is set.
    pub fn with_dashed(mut self, dashed: bool) -> Self {
        self.dash = dashed.then_some(DASH_PATTERN);
        self
    }

    /// Draws the line, morphing from `previous` when given.
    pub fn draw_on(
        self,
        surface: &mut impl RenderSurface,
        previous: Option<LineSegment>,
    ) -> LayerId {
        let to = self.segment.to_path();
        let layer = surface.draw(Primitive::Line(self));
        if let Some(from) = previous {
            surface.animate(layer, Animation::path(from.to_path(), to));
        }
        layer
    }
}

/// A single line of text, horizontally centered in its frame.
#[derive(Clone, Debug)]
pub struct TextLabel {
    /// Frame the text is laid out in.
    pub frame: Rect,
    /// Text content (unshaped).
    pub text: String,
    /// Text color.
    pub color: Color,
    /// Font size.
    pub font_size: f64,
}

impl TextLabel {
    /// Creates a label with the standard font size.
    pub fn new(frame: Rect, text: impl Into<String>, color: Color) -> Self {
        Self {
            frame,
            text: text.into(),
            color,
            font_size: LABEL_FONT_SIZE,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Draws the label, sliding its center from `previous` when given.
    pub fn draw_on(self, surface: &mut impl RenderSurface, previous: Option<Rect>) -> LayerId {
        let to = self.frame.center();
        let layer = surface.draw(Primitive::Text(self));
        if let Some(from) = previous {
            surface.animate(layer, Animation::position(from.center(), to));
        }
        layer
    }
}

/// A filled circle.
#[derive(Clone, Copy, Debug)]
pub struct CircleShape {
    /// Circle geometry.
    pub circle: Circle,
    /// Fill color.
    pub fill: Color,
}

impl CircleShape {
    /// Creates a filled circle.
    pub fn new(circle: Circle, fill: Color) -> Self {
        Self { circle, fill }
    }

    /// Draws the circle, sliding from the `previous` center when given.
    pub fn draw_on(self, surface: &mut impl RenderSurface, previous: Option<Point>) -> LayerId {
        let to = self.circle.center;
        let layer = surface.draw(Primitive::Circle(self));
        if let Some(from) = previous {
            surface.animate(layer, Animation::position(from, to));
        }
        layer
    }
}

/// A filled axis-aligned rectangle.
#[derive(Clone, Copy, Debug)]
pub struct RectShape {
    /// Rectangle geometry; may be inverted for negative bar heights.
    pub rect: Rect,
    /// Fill color.
    pub fill: Color,
}

impl RectShape {
    /// Creates a filled rectangle.
    pub fn new(rect: Rect, fill: Color) -> Self {
        Self { rect, fill }
    }

    /// Draws the rectangle, moving and resizing from `previous` when given.
    pub fn draw_on(self, surface: &mut impl RenderSurface, previous: Option<Rect>) -> LayerId {
        let to = self.rect;
        let layer = surface.draw(Primitive::Rect(self));
        if let Some(from) = previous {
            surface.animate(layer, Animation::position(from.center(), to.center()));
            surface.animate(layer, Animation::bounds(from.size(), to.size()));
        }
        layer
    }
}

/// Anything a chart can ask a surface to draw.
#[derive(Clone, Debug)]
pub enum Primitive {
    /// A filled closed path.
    Curve(CurveShape),
    /// A stroked line.
    Line(LineShape),
    /// A text label.
    Text(TextLabel),
    /// A filled circle.
    Circle(CircleShape),
    /// A filled rectangle.
    Rect(RectShape),
}

impl Primitive {
    /// Conservative bounds of the primitive's geometry.
    ///
    /// Text uses its frame; stroke width is ignored.
    pub fn bounds(&self) -> Rect {
        use kurbo::Shape;

        match self {
            Self::Curve(c) => c.path.bounding_box(),
            Self::Line(l) => Rect::from_points(l.segment.start_point, l.segment.end_point),
            Self::Text(t) => t.frame.abs(),
            Self::Circle(c) => c.circle.bounding_box(),
            Self::Rect(r) => r.rect.abs(),
        }
    }
}
