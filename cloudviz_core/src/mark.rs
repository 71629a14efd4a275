// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark identity, payloads, and the mark builder.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};

/// Stable identity of a mark within a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates a mark id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the id offset by `delta`, wrapping on overflow.
    pub const fn offset(self, delta: u64) -> Self {
        Self(self.0.wrapping_add(delta))
    }
}

/// The kind of primitive a mark draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// An axis-aligned rectangle.
    Rect,
    /// A single line of unshaped text.
    Text,
    /// An arbitrary filled and/or stroked path.
    Path,
}

/// Horizontal text anchoring, matching SVG `text-anchor`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The text starts at the anchor position.
    #[default]
    Start,
    /// The text is centered on the anchor position.
    Middle,
    /// The text ends at the anchor position.
    End,
}

/// Vertical text alignment relative to the anchor position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor sits on the alphabetic baseline.
    #[default]
    Alphabetic,
    /// The anchor sits on the vertical middle of the line.
    Middle,
    /// The anchor sits at the top of the line.
    Hanging,
    /// The anchor sits at the bottom of the line.
    Ideographic,
}

/// Resolved rectangle geometry and paint.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// Resolved text geometry and paint.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// CSS font family, or `None` for the renderer default.
    pub font_family: Option<Arc<str>>,
    /// Rotation around `pos`, in degrees (clockwise in y-down coordinates).
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// Resolved path geometry and paint.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint (ignored when `stroke_width` is zero).
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

/// The drawable content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// Rectangle payload.
    Rect(RectPayload),
    /// Text payload.
    Text(TextPayload),
    /// Path payload.
    Path(PathPayload),
}

impl MarkPayload {
    /// Returns the payload kind.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Text(_) => MarkKind::Text,
            Self::Path(_) => MarkKind::Path,
        }
    }

    /// Returns geometric bounds, if they can be known without text measurement.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Path(p) => {
                if p.path.elements().is_empty() {
                    None
                } else {
                    Some(p.path.bounding_box())
                }
            }
            Self::Text(_) => None,
        }
    }
}

/// A single drawable item with stable identity and a paint-order hint.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Rendering order hint; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Drawable content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark with the given id.
    ///
    /// The builder defaults to a rect mark; call [`MarkBuilder::text`] or
    /// [`MarkBuilder::path`] to switch kinds.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder::new(id)
    }

    /// Returns the mark kind.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Returns the text payload, if this is a text mark.
    pub fn as_text(&self) -> Option<&TextPayload> {
        match &self.payload {
            MarkPayload::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the path payload, if this is a path mark.
    pub fn as_path(&self) -> Option<&PathPayload> {
        match &self.payload {
            MarkPayload::Path(p) => Some(p),
            _ => None,
        }
    }
}

/// Builder for [`Mark`].
#[derive(Clone, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    kind: MarkKind,
    z_index: i32,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    text: String,
    font_size: f64,
    font_family: Option<Arc<str>>,
    angle: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
    path: BezPath,
    fill: Brush,
    stroke: Brush,
    stroke_width: f64,
}

impl MarkBuilder {
    fn new(id: MarkId) -> Self {
        Self {
            id,
            kind: MarkKind::Rect,
            z_index: 0,
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
            text: String::new(),
            font_size: 10.0,
            font_family: None,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            path: BezPath::new(),
            fill: Brush::Solid(Color::BLACK),
            stroke: Brush::Solid(Color::TRANSPARENT),
            stroke_width: 0.0,
        }
    }

    /// Switches the builder to a rect mark.
    pub fn rect(mut self) -> Self {
        self.kind = MarkKind::Rect;
        self
    }

    /// Switches the builder to a text mark.
    pub fn text(mut self) -> Self {
        self.kind = MarkKind::Text;
        self
    }

    /// Switches the builder to a path mark.
    pub fn path(mut self) -> Self {
        self.kind = MarkKind::Path;
        self
    }

    /// Sets the z-index.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the x position (rect origin or text anchor).
    pub fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Sets the y position (rect origin or text anchor).
    pub fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Sets the rect width.
    pub fn w(mut self, w: f64) -> Self {
        self.w = w;
        self
    }

    /// Sets the rect height.
    pub fn h(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Sets the text content.
    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the font size.
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the CSS font family.
    pub fn font_family(mut self, family: impl Into<Arc<str>>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Sets the text rotation in degrees.
    pub fn angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the text anchor.
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the path geometry.
    pub fn shape(mut self, path: BezPath) -> Self {
        self.path = path;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the stroke paint.
    pub fn stroke(mut self, stroke: impl Into<Brush>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Sets the stroke width.
    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        let payload = match self.kind {
            MarkKind::Rect => MarkPayload::Rect(RectPayload {
                rect: Rect::new(self.x, self.y, self.x + self.w, self.y + self.h),
                fill: self.fill,
            }),
            MarkKind::Text => MarkPayload::Text(TextPayload {
                pos: Point::new(self.x, self.y),
                text: self.text,
                font_size: self.font_size,
                font_family: self.font_family,
                angle: self.angle,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill,
            }),
            MarkKind::Path => MarkPayload::Path(PathPayload {
                path: self.path,
                fill: self.fill,
                stroke: self.stroke,
                stroke_width: self.stroke_width,
            }),
        };
        Mark {
            id: self.id,
            z_index: self.z_index,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn builder_defaults_to_rect() {
        let m = Mark::builder(MarkId(1)).x(1.0).y(2.0).w(3.0).h(4.0).build();
        assert_eq!(m.kind(), MarkKind::Rect);
        assert_eq!(m.payload.bounds(), Some(Rect::new(1.0, 2.0, 4.0, 6.0)));
    }

    #[test]
    fn text_builder_carries_font_family_and_angle() {
        let m = Mark::builder(MarkId(7))
            .text()
            .x(10.0)
            .y(20.0)
            .content("hello")
            .font_family("Impact")
            .angle(90.0)
            .anchor(TextAnchor::Middle)
            .build();
        let t = m.as_text().expect("text payload");
        assert_eq!(t.text, "hello");
        assert_eq!(t.font_family.as_deref(), Some("Impact"));
        assert_eq!(t.angle, 90.0);
        assert_eq!(t.anchor, TextAnchor::Middle);
        assert_eq!(m.payload.bounds(), None);
    }

    #[test]
    fn empty_path_has_no_bounds() {
        let m = Mark::builder(MarkId(2)).path().build();
        assert_eq!(m.kind(), MarkKind::Path);
        assert_eq!(m.payload.bounds(), None);
    }
}
