// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization of a [`Scene`].

use std::fmt::Write as _;

use cloudviz_core::{Mark, MarkPayload, Scene, TextAnchor, TextBaseline, TextPayload};
use kurbo::Rect;
use peniko::Brush;

/// Serializes `scene` (already in paint order) as a standalone SVG document covering `view`.
pub(crate) fn scene_to_svg(scene: &Scene, view: Rect) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height(),
    );
    for mark in scene.marks() {
        write_mark(&mut out, mark);
    }
    out.push_str("</svg>\n");
    out
}

fn write_mark(out: &mut String, mark: &Mark) {
    match &mark.payload {
        MarkPayload::Rect(r) => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                r.rect.x0,
                r.rect.y0,
                r.rect.width(),
                r.rect.height(),
            );
            write_paint(out, "fill", &r.fill);
            out.push_str("/>\n");
        }
        MarkPayload::Text(t) => write_text(out, t),
        MarkPayload::Path(p) => {
            let _ = write!(out, r#"<path d="{}""#, p.path.to_svg());
            write_paint(out, "fill", &p.fill);
            if p.stroke_width > 0.0 {
                write_paint(out, "stroke", &p.stroke);
                let _ = write!(out, r#" stroke-width="{}""#, p.stroke_width);
            }
            out.push_str("/>\n");
        }
    }
}

fn write_text(out: &mut String, t: &TextPayload) {
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}""#,
        t.pos.x, t.pos.y, t.font_size
    );
    if let Some(family) = &t.font_family {
        let _ = write!(out, r#" font-family="{}""#, escape_xml(family));
    }
    let baseline = match t.baseline {
        TextBaseline::Alphabetic => None,
        TextBaseline::Middle => Some("middle"),
        TextBaseline::Hanging => Some("hanging"),
        TextBaseline::Ideographic => Some("ideographic"),
    };
    if let Some(baseline) = baseline {
        let _ = write!(out, r#" dominant-baseline="{baseline}""#);
    }
    let anchor = match t.anchor {
        TextAnchor::Start => None,
        TextAnchor::Middle => Some("middle"),
        TextAnchor::End => Some("end"),
    };
    if let Some(anchor) = anchor {
        let _ = write!(out, r#" text-anchor="{anchor}""#);
    }
    if t.angle != 0.0 {
        let _ = write!(
            out,
            r#" transform="rotate({} {} {})""#,
            t.angle, t.pos.x, t.pos.y
        );
    }
    write_paint(out, "fill", &t.fill);
    let _ = writeln!(out, ">{}</text>", escape_xml(&t.text));
}

fn write_paint(out: &mut String, name: &str, brush: &Brush) {
    let Brush::Solid(color) = brush else {
        let _ = write!(out, r#" {name}="none""#);
        return;
    };
    let rgba = color.to_rgba8();
    if rgba.a == 0 {
        let _ = write!(out, r#" {name}="none""#);
        return;
    }
    let _ = write!(
        out,
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    );
    if rgba.a != 255 {
        let _ = write!(out, r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0);
    }
}

fn escape_xml(s: &str) -> String {
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
