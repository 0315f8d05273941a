// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The basic bar chart view.

extern crate alloc;

use alloc::vec::Vec;

use barchart_core::{BasicBarChartPresenter, BasicBarEntry, DataEntry, pair_by_index};
use kurbo::Size;
use tracing::{debug, trace};

use crate::constants::HORIZONTAL_LINE_COLOR;
use crate::{LineShape, RectShape, RenderSurface, TextLabel};

/// Rectangular bars with value and title labels over three reference lines.
///
/// The chart owns its data and the geometry of the last frame. Each update recomputes every bar,
/// redraws the whole surface and, when animated, morphs bar `i` from its previous geometry.
#[derive(Clone, Debug)]
pub struct BasicBarChart {
    presenter: BasicBarChartPresenter,
    size: Size,
    data_entries: Vec<DataEntry>,
    bar_entries: Vec<BasicBarEntry>,
}

impl BasicBarChart {
    /// Creates an empty chart of the given view size with the default layout.
    pub fn new(size: Size) -> Self {
        Self::with_presenter(BasicBarChartPresenter::default(), size)
    }

    /// Creates an empty chart with a custom presenter.
    pub fn with_presenter(presenter: BasicBarChartPresenter, size: Size) -> Self {
        Self {
            presenter,
            size,
            data_entries: Vec::new(),
            bar_entries: Vec::new(),
        }
    }

    /// The layout presenter.
    pub fn presenter(&self) -> &BasicBarChartPresenter {
        &self.presenter
    }

    /// The view size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The data of the last update.
    pub fn data_entries(&self) -> &[DataEntry] {
        &self.data_entries
    }

    /// The geometry currently on screen.
    pub fn bar_entries(&self) -> &[BasicBarEntry] {
        &self.bar_entries
    }

    /// Scrollable content size for the current data.
    pub fn content_size(&self) -> Size {
        Size::new(
            self.presenter.compute_content_width(self.bar_entries.len()),
            self.size.height,
        )
    }

    /// Replaces the chart data and redraws.
    pub fn update_data_entries(
        &mut self,
        surface: &mut impl RenderSurface,
        entries: Vec<DataEntry>,
        animated: bool,
    ) {
        debug!(
            entries = entries.len(),
            animated,
            height = self.size.height,
            "updating basic bar chart"
        );
        let bar_entries = self
            .presenter
            .compute_bar_entries(&entries, self.size.height);
        self.set_bar_entries(surface, bar_entries, animated);
    }

    /// Resizes the view, replaying the last data without animation.
    ///
    /// Does nothing when the size is unchanged.
    pub fn set_size(&mut self, surface: &mut impl RenderSurface, size: Size) {
        if size == self.size {
            return;
        }
        debug!(
            width = size.width,
            height = size.height,
            "basic bar chart resized"
        );
        self.size = size;
        let entries = core::mem::take(&mut self.data_entries);
        self.update_data_entries(surface, entries, false);
    }

    /// Swaps in new bar geometry and redraws the surface.
    ///
    /// Bars are paired with the previous frame by index. With `animated` set, every bar that has
    /// a predecessor transitions from it; bars beyond the previous length simply appear, and
    /// predecessors beyond the new length are dropped.
    ///
    /// The chart data is taken from the new bars, so a later resize replays exactly what is shown.
    pub fn set_bar_entries(
        &mut self,
        surface: &mut impl RenderSurface,
        bar_entries: Vec<BasicBarEntry>,
        animated: bool,
    ) {
        let previous = core::mem::replace(&mut self.bar_entries, bar_entries);
        self.data_entries = self.bar_entries.iter().map(|b| b.data.clone()).collect();

        surface.clear();
        let content_size = self.content_size();
        surface.set_content_size(content_size);
        self.show_horizontal_lines(surface);

        for (index, entry, old) in pair_by_index(&previous, &self.bar_entries) {
            let old = if animated { old } else { None };
            trace!(index, transition = old.is_some(), "showing basic bar");
            show_entry(surface, entry, old);
        }
        debug!(
            bars = self.bar_entries.len(),
            dropped = previous.len().saturating_sub(self.bar_entries.len()),
            content_width = content_size.width,
            "basic bar chart redrawn"
        );
    }

    fn show_horizontal_lines(&self, surface: &mut impl RenderSurface) {
        let lines = self
            .presenter
            .compute_horizontal_lines(self.bar_entries.len(), self.size.height);
        for line in lines {
            LineShape::new(line.segment, HORIZONTAL_LINE_COLOR)
                .with_stroke_width(line.width)
                .with_dashed(line.is_dashed)
                .draw_on(surface, None);
        }
    }
}

fn show_entry(
    surface: &mut impl RenderSurface,
    entry: &BasicBarEntry,
    old: Option<&BasicBarEntry>,
) {
    let color = entry.data.color;

    RectShape::new(entry.bar_frame(), color).draw_on(surface, old.map(BasicBarEntry::bar_frame));

    TextLabel::new(
        entry.text_value_frame(),
        entry.data.text_value.clone(),
        color,
    )
    .draw_on(surface, old.map(BasicBarEntry::text_value_frame));

    TextLabel::new(entry.bottom_title_frame(), entry.data.title.clone(), color)
        .draw_on(surface, old.map(BasicBarEntry::bottom_title_frame));
}
