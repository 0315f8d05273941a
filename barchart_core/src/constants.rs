// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named layout constants shared by both chart styles.
//!
//! These values reproduce the reference look of the charts exactly. Presenters read them through
//! their layout configs (see [`BasicLayout`](crate::BasicLayout) and
//! [`BeautifulLayout`](crate::BeautifulLayout)); the bubble and label constants are fixed.

/// Default bar width of the basic chart.
pub const BASIC_BAR_WIDTH: f64 = 40.0;
/// Default gap between two basic bars (and before the first one).
pub const BASIC_SPACE: f64 = 20.0;
/// Space reserved above the plotting area of the basic chart for value labels.
pub const BASIC_TOP_SPACE: f64 = 40.0;
/// Space reserved below the plotting area of the basic chart for titles.
pub const BASIC_BOTTOM_SPACE: f64 = 40.0;

/// Default bar width of the beautiful chart.
pub const BEAUTIFUL_BAR_WIDTH: f64 = 140.0;
/// Default horizontal step adjustment of the beautiful chart.
///
/// Negative, so neighbouring curved bars overlap by half their width.
pub const BEAUTIFUL_SPACE: f64 = -70.0;
/// Space reserved above the plotting area of the beautiful chart for the bubble.
pub const BEAUTIFUL_TOP_SPACE: f64 = 100.0;
/// Space reserved below the plotting area of the beautiful chart for titles.
pub const BEAUTIFUL_BOTTOM_SPACE: f64 = 40.0;

/// Fractions of the plotting height at which reference lines are drawn, with their dash flag.
pub const HORIZONTAL_LINE_FRACTIONS: [(f64, bool); 3] = [(0.0, false), (0.5, true), (1.0, false)];
/// Stroke width of the reference lines.
pub const HORIZONTAL_LINE_WIDTH: f64 = 0.5;

/// Height of every text label frame.
pub const LABEL_HEIGHT: f64 = 22.0;
/// Gap between the bottom of a bar and its title frame.
pub const TITLE_MARGIN: f64 = 10.0;
/// Distance from the top of a basic bar up to its value frame.
pub const VALUE_MARGIN: f64 = 30.0;

/// Control point of the curved bar sides, as a fraction of the bar width from its left edge.
///
/// The right side mirrors it at `1.0 - MAIN_BAR_CONTROL_FRACTION`.
pub const MAIN_BAR_CONTROL_FRACTION: f64 = 0.3;

/// Radius of the value bubble.
pub const TOP_BUBBLE_RADIUS: f64 = 20.0;
/// Cubic Bezier factor approximating a quarter circle: `4/3 * (sqrt(2) - 1)`.
pub const BEZIER_CIRCLE_FACTOR: f64 = 0.552_284_749_831;
/// Vertical distance from a bar top up to the bubble's horizontal midline.
pub const TOP_BUBBLE_OFFSET: f64 = 80.0;
/// Length of the bubble's pointer below its midline, in radii.
pub const TOP_BUBBLE_TIP_FACTOR: f64 = 1.5;
/// Distance from the bubble midline up to its value frame.
pub const TOP_BUBBLE_TEXT_OFFSET: f64 = 6.0;

/// Gap between a bar top and the start of its linking line.
pub const LINKING_LINE_GAP: f64 = 4.0;
/// Length of the linking line.
pub const LINKING_LINE_LENGTH: f64 = 40.0;
/// Radius of the dot at the upper end of the linking line.
pub const LINKING_DOT_RADIUS: f64 = 3.0;
