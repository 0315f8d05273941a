// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart input records.

extern crate alloc;

use alloc::string::String;

use peniko::Color;

/// One bar's worth of input.
///
/// `height` is a fraction of the plotting area, not a pixel value: `0.0` is an empty bar and
/// `1.0` fills the whole plotting height. Values outside `[0, 1]` are accepted and produce bars
/// that extend past the reserved margins.
#[derive(Clone, Debug)]
pub struct DataEntry {
    /// Fill color of the bar and its labels.
    pub color: Color,
    /// Bar height as a fraction of the plotting height.
    pub height: f64,
    /// Text shown above (basic) or inside the bubble over (beautiful) the bar.
    pub text_value: String,
    /// Text shown below the bar.
    pub title: String,
}

impl DataEntry {
    /// Creates an entry with the given color and height and empty labels.
    pub fn new(color: Color, height: f64) -> Self {
        Self {
            color,
            height,
            text_value: String::new(),
            title: String::new(),
        }
    }

    /// Sets the value label.
    pub fn with_text_value(mut self, text_value: impl Into<String>) -> Self {
        self.text_value = text_value.into();
        self
    }

    /// Sets the title label.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
