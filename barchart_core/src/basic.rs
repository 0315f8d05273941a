// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout for the basic (rectangular) bar chart.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::constants::{
    BASIC_BAR_WIDTH, BASIC_BOTTOM_SPACE, BASIC_SPACE, BASIC_TOP_SPACE, HORIZONTAL_LINE_FRACTIONS,
    HORIZONTAL_LINE_WIDTH, LABEL_HEIGHT, TITLE_MARGIN, VALUE_MARGIN,
};
use crate::{DataEntry, LineSegment};

/// Layout inputs for [`BasicBarChartPresenter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasicLayout {
    /// Width of every bar.
    pub bar_width: f64,
    /// Gap between bars, also used before the first and after the last bar.
    pub space: f64,
    /// Space reserved above the plotting area.
    pub top_space: f64,
    /// Space reserved below the plotting area.
    pub bottom_space: f64,
}

impl Default for BasicLayout {
    fn default() -> Self {
        Self {
            bar_width: BASIC_BAR_WIDTH,
            space: BASIC_SPACE,
            top_space: BASIC_TOP_SPACE,
            bottom_space: BASIC_BOTTOM_SPACE,
        }
    }
}

impl BasicLayout {
    /// Sets the bar width.
    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Sets the gap between bars.
    pub fn with_space(mut self, space: f64) -> Self {
        self.space = space;
        self
    }

    /// Sets the space reserved above the plotting area.
    pub fn with_top_space(mut self, top_space: f64) -> Self {
        self.top_space = top_space;
        self
    }

    /// Sets the space reserved below the plotting area.
    pub fn with_bottom_space(mut self, bottom_space: f64) -> Self {
        self.bottom_space = bottom_space;
        self
    }
}

/// Computed geometry of one basic bar.
#[derive(Clone, Debug)]
pub struct BasicBarEntry {
    /// Top-left corner of the bar.
    pub position: Point,
    /// Bar width.
    pub bar_width: f64,
    /// Bar height in view units.
    pub bar_height: f64,
    /// Gap between bars, used to widen the label frames.
    pub space: f64,
    /// The input this bar was computed from.
    pub data: DataEntry,
}

impl BasicBarEntry {
    /// The bar rectangle.
    pub fn bar_frame(&self) -> Rect {
        frame(
            self.position.x,
            self.position.y,
            self.bar_width,
            self.bar_height,
        )
    }

    /// Frame of the value label, above the bar.
    pub fn text_value_frame(&self) -> Rect {
        frame(
            self.position.x - self.space / 2.0,
            self.position.y - VALUE_MARGIN,
            self.bar_width + self.space,
            LABEL_HEIGHT,
        )
    }

    /// Frame of the title label, below the bar.
    pub fn bottom_title_frame(&self) -> Rect {
        frame(
            self.position.x - self.space / 2.0,
            self.position.y + self.bar_height + TITLE_MARGIN,
            self.bar_width + self.space,
            LABEL_HEIGHT,
        )
    }
}

/// A reference line spanning the whole chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalLine {
    /// Line geometry.
    pub segment: LineSegment,
    /// Whether the line is drawn dashed.
    pub is_dashed: bool,
    /// Stroke width.
    pub width: f64,
}

/// Maps data entries to [`BasicBarEntry`] geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BasicBarChartPresenter {
    /// Layout inputs.
    pub layout: BasicLayout,
}

impl BasicBarChartPresenter {
    /// Creates a presenter with the given layout.
    pub fn new(layout: BasicLayout) -> Self {
        Self { layout }
    }

    /// Height available to bars once the top and bottom label rows are reserved.
    pub fn plotting_height(&self, view_height: f64) -> f64 {
        view_height - self.layout.bottom_space - self.layout.top_space
    }

    /// Total horizontal extent of `entry_count` bars, for a scrollable container.
    pub fn compute_content_width(&self, entry_count: usize) -> f64 {
        let BasicLayout { bar_width, space, .. } = self.layout;
        (bar_width + space) * entry_count as f64 + space
    }

    /// Computes one bar per entry, index-aligned with `entries`.
    pub fn compute_bar_entries(
        &self,
        entries: &[DataEntry],
        view_height: f64,
    ) -> Vec<BasicBarEntry> {
        let BasicLayout {
            bar_width,
            space,
            bottom_space,
            ..
        } = self.layout;
        let plotting_height = self.plotting_height(view_height);

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let bar_height = entry.height * plotting_height;
                let x = space + index as f64 * (bar_width + space);
                let y = view_height - bottom_space - bar_height;
                BasicBarEntry {
                    position: Point::new(x, y),
                    bar_width,
                    bar_height,
                    space,
                    data: entry.clone(),
                }
            })
            .collect()
    }

    /// Computes the reference lines at 0%, 50% and 100% of the plotting height.
    ///
    /// Only the middle line is dashed. Lines depend on the entry count (through the content
    /// width), never on entry values.
    pub fn compute_horizontal_lines(
        &self,
        entry_count: usize,
        view_height: f64,
    ) -> [HorizontalLine; 3] {
        let plotting_height = self.plotting_height(view_height);
        let length = self.compute_content_width(entry_count);
        HORIZONTAL_LINE_FRACTIONS.map(|(fraction, is_dashed)| {
            let y = view_height - self.layout.bottom_space - fraction * plotting_height;
            HorizontalLine {
                segment: LineSegment::horizontal(y, 0.0, length),
                is_dashed,
                width: HORIZONTAL_LINE_WIDTH,
            }
        })
    }
}

/// Builds `(x, y, w, h)` without normalizing, so negative heights stay visible to callers.
pub(crate) fn frame(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, x + width, y + height)
}
