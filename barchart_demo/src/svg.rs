// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`RenderSurface`] that renders to SVG, with SMIL elements for transitions.

use std::fmt::Write as _;

use barchart_view::{AnimatedProperty, Animation, LayerId, Primitive, RenderSurface};
use kurbo::{Point, Rect, Size};
use peniko::Color;

#[derive(Debug, Default)]
pub(crate) struct SvgSurface {
    layers: Vec<(LayerId, Primitive, Vec<Animation>)>,
    content_size: Size,
    next_layer: u64,
}

impl RenderSurface for SvgSurface {
    fn clear(&mut self) {
        self.layers.clear();
    }

    fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    fn draw(&mut self, primitive: Primitive) -> LayerId {
        let layer = LayerId(self.next_layer);
        self.next_layer += 1;
        self.layers.push((layer, primitive, Vec::new()));
        layer
    }

    fn animate(&mut self, layer: LayerId, animation: Animation) {
        if let Some((_, _, animations)) = self.layers.iter_mut().find(|(id, ..)| *id == layer) {
            animations.push(animation);
        } else {
            tracing::warn!(?layer, "animation for unknown layer ignored");
        }
    }
}

impl SvgSurface {
    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self.view_box();
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = write!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        );
        out.push('\n');

        for (_id, primitive, animations) in &self.layers {
            match primitive {
                Primitive::Rect(r) => {
                    let rect = r.rect.abs();
                    let _ = write!(
                        out,
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        rect.x0,
                        rect.y0,
                        rect.width(),
                        rect.height(),
                    );
                    write_paint_attr(&mut out, "fill", r.fill);
                    out.push('>');
                    write_rect_animations(&mut out, r.rect, animations);
                    out.push_str("</rect>\n");
                }
                Primitive::Text(t) => {
                    let center = t.frame.center();
                    let _ = write!(
                        out,
                        r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="hanging""#,
                        center.x, t.frame.y0, t.font_size
                    );
                    write_paint_attr(&mut out, "fill", t.color);
                    out.push('>');
                    out.push_str(&escape_xml(&t.text));
                    write_translate_animations(&mut out, animations);
                    out.push_str("</text>\n");
                }
                Primitive::Circle(c) => {
                    let _ = write!(
                        out,
                        r#"<circle cx="{}" cy="{}" r="{}""#,
                        c.circle.center.x, c.circle.center.y, c.circle.radius
                    );
                    write_paint_attr(&mut out, "fill", c.fill);
                    out.push('>');
                    write_translate_animations(&mut out, animations);
                    out.push_str("</circle>\n");
                }
                Primitive::Curve(c) => {
                    let _ = write!(out, r#"<path d="{}""#, c.path.to_svg());
                    write_paint_attr(&mut out, "fill", c.fill);
                    out.push('>');
                    write_path_animations(&mut out, animations);
                    out.push_str("</path>\n");
                }
                Primitive::Line(l) => {
                    let _ = write!(
                        out,
                        r#"<path d="{}" fill="none""#,
                        l.segment.to_path().to_svg()
                    );
                    write_paint_attr(&mut out, "stroke", l.stroke);
                    let _ = write!(out, r#" stroke-width="{}""#, l.stroke_width);
                    if let Some([on, off]) = l.dash {
                        let _ = write!(out, r#" stroke-dasharray="{on} {off}""#);
                    }
                    out.push('>');
                    write_path_animations(&mut out, animations);
                    out.push_str("</path>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }

    /// The content area, grown to cover anything drawn outside it.
    fn view_box(&self) -> Rect {
        let content = Rect::from_origin_size(Point::ORIGIN, self.content_size);
        self.layers
            .iter()
            .map(|(_, primitive, _)| primitive.bounds())
            .fold(content, |acc, b| acc.union(b))
    }
}

fn write_path_animations(out: &mut String, animations: &[Animation]) {
    for animation in animations {
        if let AnimatedProperty::Path { from, to } = &animation.property {
            let _ = write!(
                out,
                r#"<animate attributeName="d" from="{}" to="{}""#,
                from.to_svg(),
                to.to_svg()
            );
            write_timing_attrs(out, animation);
            out.push_str("/>");
        }
    }
}

/// Position transitions become a translation from the old offset back to zero.
fn write_translate_animations(out: &mut String, animations: &[Animation]) {
    for animation in animations {
        if let AnimatedProperty::Position { from, to } = animation.property {
            let offset = from - to;
            let _ = write!(
                out,
                r#"<animateTransform attributeName="transform" type="translate" from="{} {}" to="0 0""#,
                offset.x, offset.y
            );
            write_timing_attrs(out, animation);
            out.push_str("/>");
        }
    }
}

/// Rect position and bounds transitions together describe the old rectangle.
fn write_rect_animations(out: &mut String, rect: Rect, animations: &[Animation]) {
    let mut from_center = rect.center();
    let mut from_size = rect.size();
    let mut timing = None;
    for animation in animations {
        match animation.property {
            AnimatedProperty::Position { from, .. } => from_center = from,
            AnimatedProperty::Bounds { from, .. } => from_size = from,
            AnimatedProperty::Path { .. } => continue,
        }
        timing = Some(animation);
    }
    let Some(timing) = timing else {
        return;
    };

    let old = Rect::from_center_size(from_center, from_size).abs();
    let new = rect.abs();
    for (attr, from, to) in [
        ("x", old.x0, new.x0),
        ("y", old.y0, new.y0),
        ("width", old.width(), new.width()),
        ("height", old.height(), new.height()),
    ] {
        let _ = write!(
            out,
            r#"<animate attributeName="{attr}" from="{from}" to="{to}""#
        );
        write_timing_attrs(out, timing);
        out.push_str("/>");
    }
}

fn write_timing_attrs(out: &mut String, animation: &Animation) {
    let (p1, p2) = animation.timing.control_points();
    let _ = write!(
        out,
        r#" dur="{}s" calcMode="spline" keyTimes="0;1" keySplines="{} {} {} {}" fill="freeze""#,
        animation.duration, p1.x, p1.y, p2.x, p2.y
    );
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (fill, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use barchart_core::DataEntry;
    use barchart_view::{BasicBarChart, BeautifulBarChart};
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn animated_update_emits_smil_elements() {
        let mut surface = SvgSurface::default();
        let mut chart = BasicBarChart::new(Size::new(300.0, 300.0));
        chart.update_data_entries(&mut surface, vec![DataEntry::new(css::TEAL, 0.5)], false);
        let still = surface.to_svg_string();
        assert!(!still.contains("<animate"), "first frame is static");

        chart.update_data_entries(&mut surface, vec![DataEntry::new(css::TEAL, 1.0)], true);
        let moving = surface.to_svg_string();
        assert!(
            moving.contains(r#"<animate attributeName="height" from="110" to="220""#),
            "bar height should animate: {moving}"
        );
        assert!(moving.contains("animateTransform"), "labels slide");
        assert!(
            moving.contains(r#"stroke-dasharray="4 4""#),
            "middle line is dashed"
        );
    }

    #[test]
    fn beautiful_chart_morphs_paths() {
        let mut surface = SvgSurface::default();
        let mut chart = BeautifulBarChart::new(Size::new(400.0, 400.0));
        chart.update_data_entries(&mut surface, vec![DataEntry::new(css::TEAL, 0.2)], false);
        chart.update_data_entries(&mut surface, vec![DataEntry::new(css::TEAL, 0.9)], true);
        let svg = surface.to_svg_string();
        assert!(
            svg.contains(r#"<animate attributeName="d""#),
            "curves morph"
        );
        assert!(svg.contains("<circle"), "linking dot drawn");
    }

    #[test]
    fn labels_are_escaped() {
        assert_eq!(escape_xml("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
    }
}
