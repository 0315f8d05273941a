// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders both bar chart styles to `barchart_demo.html`.
//!
//! Each chart is shown as its first frame, then after an animated update with fresh random data,
//! then after an animated update to a shorter list. Set `RUST_LOG=barchart_view=trace` to watch
//! the views work.

mod html;
mod svg;

use anyhow::{Context, Result};
use barchart_core::DataEntry;
use barchart_view::{BasicBarChart, BeautifulBarChart};
use chrono::{Local, NaiveDate, TimeDelta};
use kurbo::Size;
use peniko::Color;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::html::Section;
use crate::svg::SvgSurface;

const ENTRY_COUNT: usize = 20;
const SHORT_ENTRY_COUNT: usize = 8;
const VIEW_SIZE: Size = Size::new(375.0, 300.0);
const OUTPUT: &str = "barchart_demo.html";

const PALETTE: [Color; 7] = [
    Color::from_rgb8(119, 195, 68),
    Color::from_rgb8(61, 172, 247),
    Color::from_rgb8(128, 128, 128),
    Color::from_rgb8(245, 180, 51),
    Color::from_rgb8(239, 89, 49),
    Color::from_rgb8(206, 7, 85),
    Color::from_rgb8(93, 17, 247),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut rng = StdRng::seed_from_u64(0x0ba5_c4a7);
    let today = Local::now().date_naive();

    let first = generate_data_entries(&mut rng, today, ENTRY_COUNT);
    let second = generate_data_entries(&mut rng, today, ENTRY_COUNT);
    let short = generate_data_entries(&mut rng, today, SHORT_ENTRY_COUNT);

    let mut sections = Vec::new();
    sections.extend(basic_demo(&first, &second, &short));
    sections.extend(beautiful_demo(&first, &second, &short));

    let html = html::render_report("Bar chart demo", &sections);
    std::fs::write(OUTPUT, html).with_context(|| format!("writing {OUTPUT}"))?;
    info!(path = OUTPUT, sections = sections.len(), "wrote report");
    Ok(())
}

/// Random values in `10..100`, titled with consecutive dates starting today.
fn generate_data_entries(rng: &mut impl Rng, start: NaiveDate, count: usize) -> Vec<DataEntry> {
    (0..count)
        .map(|i| {
            let value: u32 = rng.random_range(10..100);
            let date = start + TimeDelta::days(i as i64);
            DataEntry::new(PALETTE[i % PALETTE.len()], f64::from(value) / 100.0)
                .with_text_value(value.to_string())
                .with_title(date.format("%-d %b").to_string())
        })
        .collect()
}

fn basic_demo(first: &[DataEntry], second: &[DataEntry], short: &[DataEntry]) -> Vec<Section> {
    let mut surface = SvgSurface::default();
    let mut chart = BasicBarChart::new(VIEW_SIZE);
    let mut sections = Vec::new();

    chart.update_data_entries(&mut surface, first.to_vec(), false);
    sections.push(section("Basic", "First frame, not animated.", &surface));

    chart.update_data_entries(&mut surface, second.to_vec(), true);
    sections.push(section(
        "Basic, updated",
        "Every bar transitions from the bar at the same index.",
        &surface,
    ));

    chart.update_data_entries(&mut surface, short.to_vec(), true);
    sections.push(section(
        "Basic, fewer entries",
        "Bars past the new length are dropped without a transition.",
        &surface,
    ));
    sections
}

fn beautiful_demo(first: &[DataEntry], second: &[DataEntry], short: &[DataEntry]) -> Vec<Section> {
    let mut surface = SvgSurface::default();
    let mut chart = BeautifulBarChart::new(VIEW_SIZE);
    let mut sections = Vec::new();

    chart.update_data_entries(&mut surface, first.to_vec(), false);
    sections.push(section("Beautiful", "First frame, not animated.", &surface));

    chart.update_data_entries(&mut surface, second.to_vec(), true);
    sections.push(section(
        "Beautiful, updated",
        "Curved bars and value bubbles morph between frames.",
        &surface,
    ));

    chart.update_data_entries(&mut surface, short.to_vec(), true);
    sections.push(section(
        "Beautiful, fewer entries",
        "Bars past the new length are dropped without a transition.",
        &surface,
    ));
    sections
}

fn section(title: &str, caption: &str, surface: &SvgSurface) -> Section {
    Section {
        title: title.to_string(),
        caption: caption.to_string(),
        svg: surface.to_svg_string(),
    }
}
