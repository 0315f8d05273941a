// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated bar chart views on top of `barchart_core`.
//!
//! A view owns the chart data and the geometry of its last frame. On each update it:
//! - recomputes every bar with its presenter,
//! - clears the host [`RenderSurface`] and resizes its content area,
//! - draws each bar's [`Primitive`]s, and
//! - when animated, asks the surface to transition bar `i` from its previous geometry.
//!
//! Bars are matched by index only (see [`barchart_core::pair_by_index`]).
//!
//! The surface is supplied per call and is the only side effect: hosts implement
//! [`RenderSurface`] over their layer tree or canvas, and [`RecordingSurface`] captures the calls
//! in memory.

#![no_std]

extern crate alloc;

mod animation;
mod basic_chart;
mod beautiful_chart;
#[cfg(test)]
mod chart_tests;
pub mod constants;
mod primitive;
mod recording;
mod surface;

pub use animation::{AnimatedProperty, Animation, TimingFunction};
pub use basic_chart::BasicBarChart;
pub use beautiful_chart::BeautifulBarChart;
pub use primitive::{CircleShape, CurveShape, LineShape, Primitive, RectShape, TextLabel};
pub use recording::{RecordingSurface, SurfaceCommand};
pub use surface::{LayerId, RenderSurface};
