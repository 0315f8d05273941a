// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The beautiful bar chart view.

extern crate alloc;

use alloc::vec::Vec;

use barchart_core::{BeautifulBarChartPresenter, BeautifulBarEntry, DataEntry, pair_by_index};
use kurbo::Size;
use tracing::{debug, trace};

use crate::constants::{BUBBLE_TEXT_COLOR, LINKING_LINE_WIDTH};
use crate::{CircleShape, CurveShape, LineShape, RenderSurface, TextLabel};

/// Curved, overlapping bars, each topped by a value bubble on a short stem.
///
/// Updates behave like [`BasicBarChart`](crate::BasicBarChart): full redraw, index pairing,
/// optional transitions. There are no reference lines.
#[derive(Clone, Debug)]
pub struct BeautifulBarChart {
    presenter: BeautifulBarChartPresenter,
    size: Size,
    data_entries: Vec<DataEntry>,
    bar_entries: Vec<BeautifulBarEntry>,
}

impl BeautifulBarChart {
    /// Creates an empty chart of the given view size with the default layout.
    pub fn new(size: Size) -> Self {
        Self::with_presenter(BeautifulBarChartPresenter::default(), size)
    }

    /// Creates an empty chart with a custom presenter.
    pub fn with_presenter(presenter: BeautifulBarChartPresenter, size: Size) -> Self {
        Self {
            presenter,
            size,
            data_entries: Vec::new(),
            bar_entries: Vec::new(),
        }
    }

    /// The layout presenter.
    pub fn presenter(&self) -> &BeautifulBarChartPresenter {
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
    pub fn bar_entries(&self) -> &[BeautifulBarEntry] {
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
            "updating beautiful bar chart"
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
            "beautiful bar chart resized"
        );
        self.size = size;
        let entries = core::mem::take(&mut self.data_entries);
        self.update_data_entries(surface, entries, false);
    }

    /// Swaps in new bar geometry and redraws the surface.
    ///
    /// Pairing follows [`BasicBarChart::set_bar_entries`](crate::BasicBarChart::set_bar_entries);
    /// and the chart data is likewise taken from the new bars.
    pub fn set_bar_entries(
        &mut self,
        surface: &mut impl RenderSurface,
        bar_entries: Vec<BeautifulBarEntry>,
        animated: bool,
    ) {
        let previous = core::mem::replace(&mut self.bar_entries, bar_entries);
        self.data_entries = self.bar_entries.iter().map(|b| b.data.clone()).collect();

        surface.clear();
        let content_size = self.content_size();
        surface.set_content_size(content_size);

        for (index, entry, old) in pair_by_index(&previous, &self.bar_entries) {
            let old = if animated { old } else { None };
            trace!(index, transition = old.is_some(), "showing beautiful bar");
            show_entry(surface, entry, old);
        }
        debug!(
            bars = self.bar_entries.len(),
            dropped = previous.len().saturating_sub(self.bar_entries.len()),
            content_width = content_size.width,
            "beautiful bar chart redrawn"
        );
    }
}

fn show_entry(
    surface: &mut impl RenderSurface,
    entry: &BeautifulBarEntry,
    old: Option<&BeautifulBarEntry>,
) {
    let color = entry.data.color;

    // Bar body, one layer per half.
    let halves = entry.main_bar_entry.curved_segments();
    let old_halves = old.map(|o| o.main_bar_entry.curved_segments());
    for (side, half) in halves.iter().enumerate() {
        let previous = old_halves
            .as_ref()
            .and_then(|h| h.get(side))
            .map(|h| h.to_path());
        CurveShape::new(half.to_path(), color).draw_on(surface, previous);
    }

    CurveShape::new(entry.top_bubble_entry.path(), color)
        .draw_on(surface, old.map(|o| o.top_bubble_entry.path()));

    LineShape::new(entry.linking_line(), color)
        .with_stroke_width(LINKING_LINE_WIDTH)
        .draw_on(surface, old.map(BeautifulBarEntry::linking_line));

    CircleShape::new(entry.linking_dot(), color)
        .draw_on(surface, old.map(|o| o.linking_dot().center));

    TextLabel::new(
        entry.top_bubble_entry.text_value_frame(),
        entry.data.text_value.clone(),
        BUBBLE_TEXT_COLOR,
    )
    .draw_on(surface, old.map(|o| o.top_bubble_entry.text_value_frame()));

    TextLabel::new(entry.bottom_title_frame(), entry.data.title.clone(), color)
        .draw_on(surface, old.map(BeautifulBarEntry::bottom_title_frame));
}
