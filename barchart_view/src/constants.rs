// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing constants used by the chart views.

use peniko::Color;
use peniko::color::palette::css;

/// Duration of every transition, in seconds.
pub const ANIMATION_DURATION: f64 = 0.5;

/// Font size of value and title labels.
pub const LABEL_FONT_SIZE: f64 = 14.0;

/// Stroke color of the basic chart's reference lines.
pub const HORIZONTAL_LINE_COLOR: Color = Color::new([0.803_921_6, 0.803_921_6, 0.803_921_6, 1.0]);
/// Dash pattern (on, off) of dashed reference lines.
pub const DASH_PATTERN: [f64; 2] = [4.0, 4.0];

/// Stroke width of the beautiful chart's linking line.
pub const LINKING_LINE_WIDTH: f64 = 2.0;
/// Color of the value label inside the bubble.
pub const BUBBLE_TEXT_COLOR: Color = css::WHITE;
