// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-bit occupancy masks.
//!
//! Rows are packed into `u32` words, most significant bit first: pixel column `c` of a row is
//! bit `31 - (c & 31)` of word `c >> 5`.

use cloudviz_text::TextMetrics;

const HIGH_BIT: u32 = 0x8000_0000;

/// Slack for rotated corners that land a rounding error away from a pixel edge.
const EDGE_EPSILON: f64 = 1e-9;

/// The padded, rotated box of one word.
#[derive(Clone, Debug)]
pub(crate) struct Sprite {
    width: usize,
    height: usize,
    /// Offset of the top-left mask pixel from the text anchor.
    x0: i64,
    y0: i64,
    stride: usize,
    bits: Vec<u32>,
}

impl Sprite {
    /// Rasterizes the glyph box of `metrics`, centered horizontally on the anchor with the
    /// baseline through it, grown by `padding` and rotated clockwise by `rotation` degrees.
    ///
    /// Callers bound the size with [`Self::extent`] first; the mask is allocated at full size.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "box extents are small, finite pixel counts"
    )]
    pub(crate) fn new(metrics: &TextMetrics, rotation: f64, padding: f64) -> Self {
        let (half_w, top, bottom) = padded_box(metrics, padding);
        let (sin, cos) = rotation.to_radians().sin_cos();
        let (min, max) = rotated_bounds(half_w, top, bottom, sin, cos);
        let x0 = (min.0 + EDGE_EPSILON).floor();
        let y0 = (min.1 + EDGE_EPSILON).floor();
        let width = ((max.0 - EDGE_EPSILON).ceil() - x0).max(0.0) as usize;
        let height = ((max.1 - EDGE_EPSILON).ceil() - y0).max(0.0) as usize;
        let stride = (width + 31) >> 5;

        let mut bits = vec![0_u32; stride * height];
        for row in 0..height {
            let py = y0 + row as f64 + 0.5;
            for col in 0..width {
                let px = x0 + col as f64 + 0.5;
                let ux = px * cos + py * sin;
                let uy = py * cos - px * sin;
                if (-half_w..=half_w).contains(&ux) && (top..=bottom).contains(&uy) {
                    bits[row * stride + (col >> 5)] |= HIGH_BIT >> (col & 31);
                }
            }
        }

        Self {
            width,
            height,
            x0: x0 as i64,
            y0: y0 as i64,
            stride,
            bits,
        }
    }

    /// Width and height of the padded box rotated by `rotation` degrees, before rasterizing.
    ///
    /// NaN when the metrics are.
    pub(crate) fn extent(metrics: &TextMetrics, rotation: f64, padding: f64) -> (f64, f64) {
        let (half_w, top, bottom) = padded_box(metrics, padding);
        let (sin, cos) = rotation.to_radians().sin_cos();
        let (min, max) = rotated_bounds(half_w, top, bottom, sin, cos);
        (max.0 - min.0, max.1 - min.1)
    }

    #[cfg(test)]
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    #[cfg(test)]
    pub(crate) fn height(&self) -> usize {
        self.height
    }

    /// Offset of the mask's top-left corner from the anchor.
    #[cfg(test)]
    pub(crate) fn origin(&self) -> (i64, i64) {
        (self.x0, self.y0)
    }

    /// Number of occupied pixels.
    #[cfg(test)]
    pub(crate) fn area(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }
}

/// Half width, top and bottom of the unrotated padded box, relative to the anchor.
fn padded_box(metrics: &TextMetrics, padding: f64) -> (f64, f64, f64) {
    (
        metrics.advance_width * 0.5 + padding,
        -(metrics.ascent + padding),
        metrics.descent + padding,
    )
}

/// Axis-aligned corners of the box after rotation.
fn rotated_bounds(
    half_w: f64,
    top: f64,
    bottom: f64,
    sin: f64,
    cos: f64,
) -> ((f64, f64), (f64, f64)) {
    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for (x, y) in [(-half_w, top), (half_w, top), (half_w, bottom), (-half_w, bottom)] {
        let (rx, ry) = (x * cos - y * sin, x * sin + y * cos);
        min = (min.0.min(rx), min.1.min(ry));
        max = (max.0.max(rx), max.1.max(ry));
    }
    (min, max)
}

/// The occupancy of the whole layout area.
#[derive(Clone, Debug)]
pub(crate) struct Board {
    width: usize,
    height: usize,
    stride: usize,
    bits: Vec<u32>,
}

impl Board {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        let stride = (width + 31) >> 5;
        Self {
            width,
            height,
            stride,
            bits: vec![0; stride * height],
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    /// Top-left board pixel of `sprite` anchored at `(x, y)`, if the whole mask is on the board.
    fn corner(&self, sprite: &Sprite, x: i64, y: i64) -> Option<(usize, usize)> {
        let left = usize::try_from(x + sprite.x0).ok()?;
        let top = usize::try_from(y + sprite.y0).ok()?;
        (left + sprite.width <= self.width && top + sprite.height <= self.height)
            .then_some((left, top))
    }

    /// Returns `true` if `sprite` anchored at `(x, y)` lies entirely on the board.
    pub(crate) fn fits(&self, sprite: &Sprite, x: i64, y: i64) -> bool {
        self.corner(sprite, x, y).is_some()
    }

    /// Returns `true` if `sprite` anchored at `(x, y)` is off the board or hits an occupied pixel.
    pub(crate) fn collides(&self, sprite: &Sprite, x: i64, y: i64) -> bool {
        let Some((left, top)) = self.corner(sprite, x, y) else {
            return true;
        };
        spans(self.stride, sprite, left, top).any(|(i, w)| self.bits[i] & w != 0)
    }

    /// Marks the pixels of `sprite` anchored at `(x, y)` as occupied.
    ///
    /// Returns `false`, leaving the board untouched, if the sprite is not on the board.
    pub(crate) fn place(&mut self, sprite: &Sprite, x: i64, y: i64) -> bool {
        let Some((left, top)) = self.corner(sprite, x, y) else {
            return false;
        };
        for (i, w) in spans(self.stride, sprite, left, top) {
            self.bits[i] |= w;
        }
        true
    }
}

/// Board word index and shifted sprite bits for every sprite word placed at `(left, top)`.
///
/// A sprite word straddles two board words unless `left` is 32-aligned. Words past the end of
/// a board row are dropped: they only carry bits right of the sprite's width, which are zero.
fn spans(
    stride: usize,
    sprite: &Sprite,
    left: usize,
    top: usize,
) -> impl Iterator<Item = (usize, u32)> + '_ {
    let shift = left & 31;
    let col0 = left >> 5;
    (0..sprite.height).flat_map(move |row| {
        let base = (top + row) * stride;
        (0..sprite.stride).flat_map(move |j| {
            let word = sprite.bits[row * sprite.stride + j];
            let col = col0 + j;
            let head = (col < stride).then(|| (base + col, word >> shift));
            let tail = (shift != 0 && col + 1 < stride)
                .then(|| (base + col + 1, word << (32 - shift)));
            head.into_iter().chain(tail)
        })
    })
}
