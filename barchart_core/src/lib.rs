// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout presenters for animated bar charts.
//!
//! This crate is the geometry half of the chart: it turns an ordered list of [`DataEntry`]
//! values into positioned bar geometry for two styles.
//! - **Basic**: rectangles with a value label above and a title below, plus three reference
//!   lines ([`BasicBarChartPresenter`]).
//! - **Beautiful**: curved bars with a value bubble and a linking line
//!   ([`BeautifulBarChartPresenter`]).
//!
//! Every function here is pure: output depends only on the entries, their indices, the layout
//! config and the view height. Degenerate inputs (zero or negative heights, empty lists) produce
//! well-defined geometry rather than errors.
//!
//! Rendering and animation live downstream; [`pair_by_index`] is the pairing rule used to match
//! an old bar list against a new one.

#![no_std]

extern crate alloc;

mod basic;
mod beautiful;
pub mod constants;
mod data;
#[cfg(not(feature = "std"))]
mod float;
mod pairing;
mod segment;

pub use basic::{BasicBarChartPresenter, BasicBarEntry, BasicLayout, HorizontalLine};
pub use beautiful::{
    BeautifulBarChartPresenter, BeautifulBarEntry, BeautifulLayout, MainBarEntry, TopBubbleEntry,
};
pub use data::DataEntry;
pub use pairing::pair_by_index;
pub use segment::{CurvedSegment, LineSegment, curved_path};
