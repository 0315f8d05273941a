// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout for the beautiful chart: curved bars under a value bubble.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Rect};

use crate::basic::frame;
use crate::constants::{
    BEAUTIFUL_BAR_WIDTH, BEAUTIFUL_BOTTOM_SPACE, BEAUTIFUL_SPACE, BEAUTIFUL_TOP_SPACE,
    BEZIER_CIRCLE_FACTOR, LABEL_HEIGHT, LINKING_DOT_RADIUS, LINKING_LINE_GAP,
    LINKING_LINE_LENGTH, MAIN_BAR_CONTROL_FRACTION, TITLE_MARGIN, TOP_BUBBLE_OFFSET,
    TOP_BUBBLE_RADIUS, TOP_BUBBLE_TEXT_OFFSET, TOP_BUBBLE_TIP_FACTOR,
};
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::{CurvedSegment, DataEntry, LineSegment, curved_path};

/// Layout inputs for [`BeautifulBarChartPresenter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeautifulLayout {
    /// Width of every bar (the full base of its curved silhouette).
    pub bar_width: f64,
    /// Added to `bar_width` to get the horizontal step; negative values make bars overlap.
    pub space: f64,
    /// Space reserved above the plotting area for the bubble.
    pub top_space: f64,
    /// Space reserved below the plotting area.
    pub bottom_space: f64,
}

impl Default for BeautifulLayout {
    fn default() -> Self {
        Self {
            bar_width: BEAUTIFUL_BAR_WIDTH,
            space: BEAUTIFUL_SPACE,
            top_space: BEAUTIFUL_TOP_SPACE,
            bottom_space: BEAUTIFUL_BOTTOM_SPACE,
        }
    }
}

impl BeautifulLayout {
    /// Sets the bar width.
    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Sets the step adjustment between bars.
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

/// The curved silhouette of a bar: two halves meeting at the top center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MainBarEntry {
    /// Top-left corner of the bar's bounding box.
    pub origin: Point,
    /// Bar width.
    pub bar_width: f64,
    /// Bar height.
    pub bar_height: f64,
}

impl MainBarEntry {
    /// Left and right halves.
    ///
    /// Each half curves from a bottom corner up to the top center, then closes down the center
    /// line. The second control point sits on the top edge at 30% (left) or 70% (right) of the
    /// width, which pinches the silhouette into a peak.
    pub fn curved_segments(&self) -> [CurvedSegment; 2] {
        let Point { x, y } = self.origin;
        let mid = x + self.bar_width / 2.0;
        let bottom = y + self.bar_height;

        let left = CurvedSegment::new(
            (x, bottom),
            (mid, y),
            (mid, bottom),
            (mid, bottom),
            (x + self.bar_width * MAIN_BAR_CONTROL_FRACTION, y),
        );
        let right = CurvedSegment::new(
            (x + self.bar_width, bottom),
            (mid, y),
            (mid, bottom),
            (mid, bottom),
            (x + self.bar_width * (1.0 - MAIN_BAR_CONTROL_FRACTION), y),
        );
        [left, right]
    }
}

/// The value bubble above a bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TopBubbleEntry {
    /// Left-most point of the bubble, on its horizontal midline.
    pub origin: Point,
}

impl TopBubbleEntry {
    /// Bubble radius.
    pub const RADIUS: f64 = TOP_BUBBLE_RADIUS;

    /// Places the bubble over a bar whose bottom-left corner is `bottom_left`.
    ///
    /// The midline is rounded to a whole unit so the label stays on the pixel grid.
    pub fn new(bottom_left: Point, bar_width: f64, bar_height: f64) -> Self {
        let origin = Point::new(
            bottom_left.x + bar_width / 2.0 - Self::RADIUS,
            (bottom_left.y - bar_height - TOP_BUBBLE_OFFSET).round(),
        );
        Self { origin }
    }

    /// Frame of the value label inside the bubble.
    pub fn text_value_frame(&self) -> Rect {
        frame(
            self.origin.x,
            self.origin.y - TOP_BUBBLE_TEXT_OFFSET,
            Self::RADIUS * 2.0,
            LABEL_HEIGHT,
        )
    }

    /// The bubble outline as four contiguous quarter curves.
    ///
    /// Left -> top -> right is a half circle; right -> tip -> left narrows into a pointer below
    /// the midline. Each segment's `to_point` is the next segment's `start_point` and the last
    /// one returns to [`Self::origin`].
    pub fn curved_segments(&self) -> [CurvedSegment; 4] {
        let r = Self::RADIUS;
        let c = BEZIER_CIRCLE_FACTOR * r;
        let Point { x, y } = self.origin;

        let left = Point::new(x, y);
        let top = Point::new(x + r, y - r);
        let right = Point::new(x + 2.0 * r, y);
        let tip = Point::new(x + r, y + r * TOP_BUBBLE_TIP_FACTOR);

        [
            CurvedSegment::arc(left, top, (x, y - c), (x + r - c, y - r)),
            CurvedSegment::arc(top, right, (x + r + c, y - r), (x + 2.0 * r, y - c)),
            CurvedSegment::arc(right, tip, (x + 2.0 * r, y + c), (x + r + c, y + r)),
            CurvedSegment::arc(tip, left, (x + r - c, y + r), (x, y + c)),
        ]
    }

    /// The bubble as one closed, fillable path.
    pub fn path(&self) -> BezPath {
        curved_path(&self.curved_segments())
    }
}

/// Computed geometry of one beautiful bar.
#[derive(Clone, Debug)]
pub struct BeautifulBarEntry {
    /// Top-left corner of the bar's bounding box.
    pub position: Point,
    /// Bar width.
    pub bar_width: f64,
    /// Bar height in view units.
    pub bar_height: f64,
    /// The input this bar was computed from.
    pub data: DataEntry,
    /// The curved bar body.
    pub main_bar_entry: MainBarEntry,
    /// The value bubble.
    pub top_bubble_entry: TopBubbleEntry,
}

impl BeautifulBarEntry {
    /// Computes the bar body and bubble for a bar at `position`.
    pub fn new(position: Point, bar_width: f64, bar_height: f64, data: DataEntry) -> Self {
        let main_bar_entry = MainBarEntry {
            origin: position,
            bar_width,
            bar_height,
        };
        let top_bubble_entry = TopBubbleEntry::new(
            Point::new(position.x, position.y + bar_height),
            bar_width,
            bar_height,
        );
        Self {
            position,
            bar_width,
            bar_height,
            data,
            main_bar_entry,
            top_bubble_entry,
        }
    }

    /// Frame of the title label, below the bar.
    pub fn bottom_title_frame(&self) -> Rect {
        frame(
            self.position.x,
            self.position.y + self.bar_height + TITLE_MARGIN,
            self.bar_width,
            LABEL_HEIGHT,
        )
    }

    /// Vertical line from just above the bar top up towards the bubble.
    pub fn linking_line(&self) -> LineSegment {
        let x = self.position.x + self.bar_width / 2.0;
        let y = self.position.y - LINKING_LINE_GAP;
        LineSegment::vertical(x, y, y - LINKING_LINE_LENGTH)
    }

    /// Dot at the upper end of [`Self::linking_line`].
    pub fn linking_dot(&self) -> Circle {
        Circle::new(self.linking_line().end_point, LINKING_DOT_RADIUS)
    }
}

/// Maps data entries to [`BeautifulBarEntry`] geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BeautifulBarChartPresenter {
    /// Layout inputs.
    pub layout: BeautifulLayout,
}

impl BeautifulBarChartPresenter {
    /// Creates a presenter with the given layout.
    pub fn new(layout: BeautifulLayout) -> Self {
        Self { layout }
    }

    /// Height available to bars once the bubble and title rows are reserved.
    pub fn plotting_height(&self, view_height: f64) -> f64 {
        view_height - self.layout.bottom_space - self.layout.top_space
    }

    /// Total horizontal extent of `entry_count` overlapping bars.
    pub fn compute_content_width(&self, entry_count: usize) -> f64 {
        self.layout.bar_width * (entry_count as f64 + 1.0) / 2.0
    }

    /// Computes one bar per entry, index-aligned with `entries`.
    pub fn compute_bar_entries(
        &self,
        entries: &[DataEntry],
        view_height: f64,
    ) -> Vec<BeautifulBarEntry> {
        let BeautifulLayout {
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
                let x = index as f64 * (bar_width + space);
                let y = view_height - bottom_space - bar_height;
                BeautifulBarEntry::new(Point::new(x, y), bar_width, bar_height, entry.clone())
            })
            .collect()
    }
}
