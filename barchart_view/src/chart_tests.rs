// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec::Vec;
use alloc::{format, vec};

use barchart_core::{DataEntry, TopBubbleEntry};
use kurbo::{Point, Rect, Size};
use peniko::color::palette::css;

use crate::{
    AnimatedProperty, BasicBarChart, BeautifulBarChart, LayerId, Primitive, RecordingSurface,
    SurfaceCommand, TimingFunction,
};

fn entries(heights: &[f64]) -> Vec<DataEntry> {
    heights
        .iter()
        .enumerate()
        .map(|(i, &h)| {
            DataEntry::new(css::SEA_GREEN, h)
                .with_text_value(format!("{:.0}", h * 100.0))
                .with_title(format!("{} Mar", i + 1))
        })
        .collect()
}

fn rect_layers(surface: &RecordingSurface) -> Vec<(LayerId, Rect)> {
    surface
        .primitives()
        .filter_map(|(id, p)| match p {
            Primitive::Rect(r) => Some((id, r.rect)),
            _ => None,
        })
        .collect()
}

fn count_kind(surface: &RecordingSurface, pred: impl Fn(&Primitive) -> bool) -> usize {
    surface.primitives().filter(|(_, p)| pred(p)).count()
}

fn assert_point_close(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() <= 1e-9 && (a.y - b.y).abs() <= 1e-9,
        "{a:?} != {b:?}"
    );
}

#[test]
fn basic_first_update_draws_lines_then_bars_without_transitions() {
    let mut surface = RecordingSurface::new();
    let mut chart = BasicBarChart::new(Size::new(320.0, 300.0));
    chart.update_data_entries(&mut surface, entries(&[0.5, 0.25, 1.0]), true);

    let frame = surface.current_frame();
    assert!(
        matches!(frame.first(), Some(SurfaceCommand::SetContentSize(_))),
        "content size comes right after the clear"
    );
    assert_eq!(surface.content_size(), Size::new(200.0, 300.0));

    let lines: Vec<_> = surface
        .primitives()
        .filter_map(|(_, p)| match p {
            Primitive::Line(l) => Some(l.dash.is_some()),
            _ => None,
        })
        .collect();
    assert_eq!(
        lines,
        vec![false, true, false],
        "three lines, middle one dashed"
    );

    assert_eq!(rect_layers(&surface).len(), 3, "one rect per bar");
    assert_eq!(
        count_kind(&surface, |p| matches!(p, Primitive::Text(_))),
        6,
        "value and title per bar"
    );
    assert_eq!(
        surface.animations().count(),
        0,
        "nothing to transition from on the first update"
    );

    let first_bar = rect_layers(&surface)[0].1;
    assert_eq!(first_bar, Rect::new(20.0, 150.0, 60.0, 260.0));
}

#[test]
fn basic_animated_update_moves_and_resizes_bars() {
    let mut surface = RecordingSurface::new();
    let mut chart = BasicBarChart::new(Size::new(320.0, 300.0));
    chart.update_data_entries(&mut surface, entries(&[0.5, 0.5]), false);
    chart.update_data_entries(&mut surface, entries(&[1.0, 0.0]), true);

    // Per bar: position + bounds on the rect, position on each label.
    assert_eq!(
        surface.animations().count(),
        2 * 4,
        "four transitions per bar"
    );

    let (layer, rect) = rect_layers(&surface)[0];
    assert_eq!(rect, Rect::new(20.0, 40.0, 60.0, 260.0));
    let props: Vec<_> = surface
        .animations_for(layer)
        .map(|a| {
            assert!((a.duration - 0.5).abs() < 1e-12, "half-second transitions");
            assert_eq!(a.timing, TimingFunction::EaseInEaseOut);
            a.property.clone()
        })
        .collect();
    assert_eq!(
        props,
        vec![
            AnimatedProperty::Position {
                from: Point::new(40.0, 205.0),
                to: Point::new(40.0, 150.0),
            },
            AnimatedProperty::Bounds {
                from: Size::new(40.0, 110.0),
                to: Size::new(40.0, 220.0),
            },
        ]
    );
}

#[test]
fn reference_lines_are_never_animated() {
    let mut surface = RecordingSurface::new();
    let mut chart = BasicBarChart::new(Size::new(320.0, 300.0));
    chart.update_data_entries(&mut surface, entries(&[0.5]), false);
    chart.update_data_entries(&mut surface, entries(&[0.7]), true);

    for (id, p) in surface.primitives() {
        if matches!(p, Primitive::Line(_)) {
            assert_eq!(
                surface.animations_for(id).count(),
                0,
                "line {id:?} animated"
            );
        }
    }
}

#[test]
fn unanimated_update_skips_transitions_even_with_history() {
    let mut surface = RecordingSurface::new();
    let mut chart = BasicBarChart::new(Size::new(320.0, 300.0));
    chart.update_data_entries(&mut surface, entries(&[0.5, 0.5]), false);
    chart.update_data_entries(&mut surface, entries(&[0.1, 0.9]), false);
    assert_eq!(surface.animations().count(), 0, "animated = false");
    assert_eq!(rect_layers(&surface).len(), 2, "both bars redrawn");
}

#[test]
fn longer_list_leaves_new_bars_unanimated() {
    let mut surface = RecordingSurface::new();
    let mut chart = BasicBarChart::new(Size::new(320.0, 300.0));
    chart.update_data_entries(&mut surface, entries(&[0.5]), false);
    chart.update_data_entries(&mut surface, entries(&[0.2, 0.4, 0.6]), true);

    let rects = rect_layers(&surface);
    assert_eq!(rects.len(), 3, "all new bars drawn");
    let transitions: Vec<usize> = rects
        .iter()
        .map(|(id, _)| surface.animations_for(*id).count())
        .collect();
    assert_eq!(
        transitions,
        vec![2, 0, 0],
        "only the paired bar transitions; new bars have no prior state"
    );
    assert_eq!(surface.content_size().width, 200.0);
}

#[test]
fn shorter_list_drops_old_bars() {
    let mut surface = RecordingSurface::new();
    let mut chart = BasicBarChart::new(Size::new(320.0, 300.0));
    chart.update_data_entries(&mut surface, entries(&[0.2, 0.4, 0.6, 0.8]), false);
    chart.update_data_entries(&mut surface, entries(&[0.3]), true);

    assert_eq!(chart.bar_entries().len(), 1, "state replaced in full");
    assert_eq!(rect_layers(&surface).len(), 1, "dropped bars are not drawn");
    assert_eq!(
        surface.animations().count(),
        4,
        "only the surviving bar transitions"
    );
}

#[test]
fn empty_update_clears_bars_but_keeps_lines() {
    let mut surface = RecordingSurface::new();
    let mut chart = BasicBarChart::new(Size::new(320.0, 300.0));
    chart.update_data_entries(&mut surface, entries(&[0.2, 0.4]), false);
    chart.update_data_entries(&mut surface, Vec::new(), true);

    assert_eq!(
        surface.primitives().count(),
        3,
        "only the reference lines remain"
    );
    assert_eq!(surface.content_size().width, 20.0);
}

#[test]
fn pairing_follows_index_not_title() {
    let mut surface = RecordingSurface::new();
    let mut chart = BasicBarChart::new(Size::new(320.0, 300.0));
    let monday = vec![DataEntry::new(css::RED, 0.2).with_title("Monday")];
    let tuesday = vec![DataEntry::new(css::BLUE, 0.8).with_title("Tuesday")];
    chart.update_data_entries(&mut surface, monday, false);
    chart.update_data_entries(&mut surface, tuesday, true);

    let (layer, _) = rect_layers(&surface)[0];
    assert_eq!(
        surface.animations_for(layer).count(),
        2,
        "index 0 morphs even though its title changed"
    );
}

#[test]
fn resize_replays_last_data_without_animation() {
    let mut surface = RecordingSurface::new();
    let mut chart = BasicBarChart::new(Size::new(320.0, 300.0));
    chart.update_data_entries(&mut surface, entries(&[0.5]), false);

    let before = surface.commands().len();
    chart.set_size(&mut surface, Size::new(320.0, 300.0));
    assert_eq!(surface.commands().len(), before, "same size is a no-op");

    chart.set_size(&mut surface, Size::new(320.0, 520.0));
    assert_eq!(
        surface.animations().count(),
        0,
        "layout replays are not animated"
    );
    assert_eq!(chart.data_entries().len(), 1, "data is kept across resizes");
    // 520 - 80 = 440 plotting height; half of it is 220.
    let (_, rect) = rect_layers(&surface)[0];
    assert_eq!(rect, Rect::new(20.0, 260.0, 60.0, 480.0));
    assert_eq!(surface.content_size(), Size::new(80.0, 520.0));
}

#[test]
fn beautiful_bar_draws_seven_primitives_in_order() {
    let mut surface = RecordingSurface::new();
    let mut chart = BeautifulBarChart::new(Size::new(400.0, 400.0));
    chart.update_data_entries(&mut surface, entries(&[0.5]), false);

    let kinds: Vec<&str> = surface
        .primitives()
        .map(|(_, p)| match p {
            Primitive::Curve(_) => "curve",
            Primitive::Line(_) => "line",
            Primitive::Text(_) => "text",
            Primitive::Circle(_) => "circle",
            Primitive::Rect(_) => "rect",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["curve", "curve", "curve", "line", "circle", "text", "text"],
        "halves, bubble, stem, dot, value, title"
    );
    assert_eq!(surface.content_size(), Size::new(140.0, 400.0));

    let value_color = surface.primitives().find_map(|(_, p)| match p {
        Primitive::Text(t) if t.text == "50" => Some(t.color.to_rgba8()),
        _ => None,
    });
    assert_eq!(
        value_color,
        Some(css::WHITE.to_rgba8()),
        "bubble text is white"
    );
}

#[test]
fn beautiful_animated_update_morphs_paths_from_old_geometry() {
    let mut surface = RecordingSurface::new();
    let mut chart = BeautifulBarChart::new(Size::new(400.0, 400.0));
    chart.update_data_entries(&mut surface, entries(&[0.5, 0.5]), false);
    let old_bubble = chart.bar_entries()[0].top_bubble_entry;
    chart.update_data_entries(&mut surface, entries(&[1.0, 0.25, 0.75]), true);

    // Two paired bars with seven transitions each; the third bar is new.
    assert_eq!(surface.animations().count(), 2 * 7);

    let new_bubble = chart.bar_entries()[0].top_bubble_entry;
    let bubble_layer = surface
        .primitives()
        .filter(|(_, p)| matches!(p, Primitive::Curve(_)))
        .nth(2)
        .map(|(id, _)| id);
    let Some(bubble_layer) = bubble_layer else {
        panic!("missing bubble layer");
    };
    let animation = surface.animations_for(bubble_layer).next().cloned();
    let Some(animation) = animation else {
        panic!("bubble should morph");
    };
    assert_eq!(
        animation.property,
        AnimatedProperty::Path {
            from: old_bubble.path(),
            to: new_bubble.path(),
        }
    );
}

#[test]
fn beautiful_dot_and_labels_slide_by_center() {
    let mut surface = RecordingSurface::new();
    let mut chart = BeautifulBarChart::new(Size::new(400.0, 400.0));
    chart.update_data_entries(&mut surface, entries(&[0.0]), false);
    chart.update_data_entries(&mut surface, entries(&[1.0]), true);

    let dot_layer = surface
        .primitives()
        .find(|(_, p)| matches!(p, Primitive::Circle(_)))
        .map(|(id, _)| id);
    let Some(dot_layer) = dot_layer else {
        panic!("missing dot layer");
    };
    let animation = surface.animations_for(dot_layer).next().cloned();
    match animation.map(|a| a.property) {
        Some(AnimatedProperty::Position { from, to }) => {
            // Empty bar top at 360, full bar top at 100; the dot sits 44 above.
            assert_point_close(from, Point::new(70.0, 316.0));
            assert_point_close(to, Point::new(70.0, 56.0));
        }
        other => panic!("expected a position transition, got {other:?}"),
    }

    let bubble = TopBubbleEntry::new(Point::new(0.0, 360.0), 140.0, 260.0);
    assert_point_close(bubble.origin, Point::new(50.0, 20.0));
}

#[test]
fn beautiful_resize_keeps_data() {
    let mut surface = RecordingSurface::new();
    let mut chart = BeautifulBarChart::new(Size::new(400.0, 400.0));
    chart.update_data_entries(&mut surface, entries(&[0.5, 0.5]), false);
    chart.set_size(&mut surface, Size::new(400.0, 600.0));

    assert_eq!(chart.bar_entries().len(), 2, "bars recomputed");
    assert_eq!(surface.animations().count(), 0, "not animated");
    // 600 - 140 = 460; half of it is 230, so the top sits at 600 - 40 - 230.
    assert!(
        (chart.bar_entries()[0].position.y - 330.0).abs() < 1e-9,
        "bars follow the new height"
    );
}

#[test]
fn basic_set_bar_entries_replaces_the_data_too() {
    let mut surface = RecordingSurface::new();
    let mut chart = BasicBarChart::new(Size::new(320.0, 300.0));
    chart.update_data_entries(&mut surface, entries(&[0.5, 0.5]), false);

    let data = entries(&[0.9, 0.9, 0.9]);
    let bars = chart.presenter().compute_bar_entries(&data, 300.0);
    chart.set_bar_entries(&mut surface, bars, true);
    assert_eq!(chart.data_entries().len(), 3, "data follows the new bars");

    chart.set_size(&mut surface, Size::new(320.0, 500.0));
    let heights: Vec<f64> = chart.data_entries().iter().map(|d| d.height).collect();
    assert_eq!(heights, vec![0.9, 0.9, 0.9], "resize replays the new data");
    assert_eq!(rect_layers(&surface).len(), 3, "three bars after resize");
}

#[test]
fn beautiful_set_bar_entries_replaces_the_data_too() {
    let mut surface = RecordingSurface::new();
    let mut chart = BeautifulBarChart::new(Size::new(400.0, 400.0));
    chart.update_data_entries(&mut surface, entries(&[0.5, 0.5]), false);

    let data = entries(&[0.9, 0.9, 0.9]);
    let bars = chart.presenter().compute_bar_entries(&data, 400.0);
    chart.set_bar_entries(&mut surface, bars, false);
    assert_eq!(chart.data_entries().len(), 3, "data follows the new bars");

    chart.set_size(&mut surface, Size::new(400.0, 600.0));
    assert_eq!(chart.bar_entries().len(), 3, "resize keeps all three bars");
    // 600 - 140 = 460 plotting height at 90%.
    let bar_height = chart.bar_entries()[2].bar_height;
    assert!((bar_height - 414.0).abs() < 1e-9, "height {bar_height}");
}
