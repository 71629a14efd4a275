// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spiral search placement with sprite-mask collision.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use cloudviz_text::{FontFamily, HeuristicTextMeasurer, TextMeasurer, TextStyle};
use kurbo::Size;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::trace;

use super::sprite::{Board, Sprite};
use super::{CloudLayout, LayoutJob, LayoutOutput, LayoutStep, PlacedWord};
use crate::error::{CloudError, CloudResult};
use crate::size::SizedWord;

/// Upper bound on spiral positions tried for one word.
const MAX_SPIRAL_STEPS: u32 = 1 << 20;

/// Largest width or height, in pixels, [`SpiralLayout`] lays words out in.
pub const MAX_BOUNDS: f64 = 8192.0;

/// How each word is rotated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    /// 0 or 90 degrees with equal probability.
    #[default]
    Random90,
    /// Always the given angle, in degrees.
    Fixed(f64),
    /// One of `orientations` evenly spaced angles from `from` to `to` (inclusive).
    Range {
        /// First angle, in degrees.
        from: f64,
        /// Last angle, in degrees.
        to: f64,
        /// Number of distinct angles.
        orientations: u32,
    },
}

impl Rotation {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the product is below `orientations`, a u32"
    )]
    fn sample(&self, rng: &mut StdRng) -> f64 {
        match *self {
            Self::Random90 => {
                if rng.r#gen::<f64>() < 0.5 {
                    0.0
                } else {
                    90.0
                }
            }
            Self::Fixed(angle) => angle,
            Self::Range {
                from,
                to,
                orientations,
            } => {
                if orientations <= 1 {
                    return from;
                }
                let k = (rng.r#gen::<f64>() * f64::from(orientations)) as u32;
                from + f64::from(k) * (to - from) / f64::from(orientations - 1)
            }
        }
    }
}

/// The search path around a word's starting point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spiral {
    /// A smooth spiral stretched to the area's aspect ratio.
    #[default]
    Archimedean,
    /// A square spiral walking 4 px vertical steps (scaled horizontally by the aspect ratio).
    Rectangular,
}

/// Stateful walker over a [`Spiral`]; `at` must see consecutive `t` values.
#[derive(Debug)]
struct SpiralPath {
    kind: Spiral,
    aspect: f64,
    dx: f64,
    dy: f64,
    x: f64,
    y: f64,
}

impl SpiralPath {
    fn new(kind: Spiral, width: f64, height: f64) -> Self {
        let aspect = width / height;
        Self {
            kind,
            aspect,
            dx: 4.0 * aspect,
            dy: 4.0,
            x: 0.0,
            y: 0.0,
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "leg index of a bounded walk"
    )]
    fn at(&mut self, t: f64) -> (f64, f64) {
        match self.kind {
            Spiral::Archimedean => {
                let t = t * 0.1;
                (self.aspect * t * t.cos(), t * t.sin())
            }
            Spiral::Rectangular => {
                let sign = if t < 0.0 { -1.0 } else { 1.0 };
                match ((1.0 + 4.0 * sign * t).sqrt() - sign) as i64 & 3 {
                    0 => self.x += self.dx,
                    1 => self.y += self.dy,
                    2 => self.x -= self.dx,
                    _ => self.y -= self.dy,
                }
                (self.x, self.y)
            }
        }
    }
}

/// Word-cloud placement by spiral search.
///
/// Words are placed largest first. Each starts near the center (jittered by the seeded RNG)
/// and walks outwards along the spiral until its padded, rotated box fits on the board without
/// touching an earlier word. Words that never fit are skipped.
///
/// The same words, bounds, options and seed always yield the same placement.
#[derive(Clone)]
pub struct SpiralLayout {
    padding: f64,
    font_family: FontFamily,
    rotation: Rotation,
    spiral: Spiral,
    seed: u64,
    measurer: Arc<dyn TextMeasurer + Send + Sync>,
}

impl fmt::Debug for SpiralLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpiralLayout")
            .field("padding", &self.padding)
            .field("font_family", &self.font_family)
            .field("rotation", &self.rotation)
            .field("spiral", &self.spiral)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl Default for SpiralLayout {
    fn default() -> Self {
        Self {
            padding: 5.0,
            font_family: FontFamily::named("Impact"),
            rotation: Rotation::default(),
            spiral: Spiral::default(),
            seed: 0,
            measurer: Arc::new(HeuristicTextMeasurer),
        }
    }
}

impl SpiralLayout {
    /// Creates a layout with padding 5, `Impact`, random 0/90 rotation and an archimedean spiral.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free space kept around every word, in pixels.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Sets the font family words are measured with.
    #[must_use]
    pub fn with_font_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the rotation policy.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the spiral.
    #[must_use]
    pub fn with_spiral(mut self, spiral: Spiral) -> Self {
        self.spiral = spiral;
        self
    }

    /// Sets the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the text measurer used to size word boxes.
    #[must_use]
    pub fn with_measurer(mut self, measurer: Arc<dyn TextMeasurer + Send + Sync>) -> Self {
        self.measurer = measurer;
        self
    }

    /// Returns the font family words are measured with.
    pub fn font_family(&self) -> &FontFamily {
        &self.font_family
    }
}

impl CloudLayout for SpiralLayout {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "bounds are checked finite, positive and at most `MAX_BOUNDS`"
    )]
    fn start(&self, words: &[SizedWord], bounds: Size) -> CloudResult<Box<dyn LayoutJob>> {
        if !bounds.is_finite() || bounds.width < 1.0 || bounds.height < 1.0 {
            return Err(CloudError::EmptyBounds);
        }
        if bounds.width > MAX_BOUNDS || bounds.height > MAX_BOUNDS {
            return Err(CloudError::BoundsTooLarge {
                width: bounds.width,
                height: bounds.height,
                max: MAX_BOUNDS,
            });
        }
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut queue: Vec<(SizedWord, f64)> = words
            .iter()
            .map(|w| (w.clone(), self.rotation.sample(&mut rng)))
            .collect();
        queue.sort_by(|a, b| b.0.font_size.total_cmp(&a.0.font_size));

        Ok(Box::new(SpiralJob {
            layout: self.clone(),
            rng,
            board: Board::new(bounds.width as usize, bounds.height as usize),
            bounds,
            queue: queue.into(),
            placed: Vec::new(),
            skipped: Vec::new(),
        }))
    }
}

struct SpiralJob {
    layout: SpiralLayout,
    rng: StdRng,
    board: Board,
    bounds: Size,
    queue: VecDeque<(SizedWord, f64)>,
    placed: Vec<PlacedWord>,
    skipped: Vec<SizedWord>,
}

impl SpiralJob {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "board coordinates are small pixel counts"
    )]
    fn place(&mut self, word: SizedWord, rotation: f64) {
        let style = TextStyle::new(word.font_size).with_family(self.layout.font_family.clone());
        let metrics = self.layout.measurer.measure(&word.text, &style);
        let (box_w, box_h) = Sprite::extent(&metrics, rotation, self.layout.padding);
        // False for NaN extents too.
        let fits_board =
            box_w <= self.board.width() as f64 && box_h <= self.board.height() as f64;
        if !fits_board {
            trace!(word = %word.text, font_size = word.font_size, "word larger than the board");
            self.skipped.push(word);
            return;
        }
        let sprite = Sprite::new(&metrics, rotation, self.layout.padding);

        let w = self.board.width() as i64;
        let h = self.board.height() as i64;
        let start_x = ((w as f64 * (self.rng.r#gen::<f64>() + 0.5)) as i64) >> 1;
        let start_y = ((h as f64 * (self.rng.r#gen::<f64>() + 0.5)) as i64) >> 1;
        let dt = if self.rng.r#gen::<f64>() < 0.5 { 1.0 } else { -1.0 };
        let max_delta = ((w * w + h * h) as f64).sqrt();

        let mut path = SpiralPath::new(self.layout.spiral, w as f64, h as f64);
        let mut t = 0.0;
        for _ in 0..MAX_SPIRAL_STEPS {
            let (dx, dy) = path.at(t);
            t += dt;
            let (dx, dy) = (dx.trunc() as i64, dy.trunc() as i64);
            if dx.abs().min(dy.abs()) as f64 >= max_delta {
                break;
            }
            let (x, y) = (start_x + dx, start_y + dy);
            if self.board.collides(&sprite, x, y) {
                continue;
            }
            self.board.place(&sprite, x, y);
            self.placed.push(PlacedWord {
                word,
                x: (x - (w >> 1)) as f64,
                y: (y - (h >> 1)) as f64,
                rotation,
            });
            return;
        }
        trace!(word = %word.text, font_size = word.font_size, "no room for word");
        self.skipped.push(word);
    }
}

impl LayoutJob for SpiralJob {
    fn step(&mut self, budget: usize) -> LayoutStep {
        for _ in 0..budget.max(1) {
            let Some((word, rotation)) = self.queue.pop_front() else {
                break;
            };
            self.place(word, rotation);
        }
        if self.queue.is_empty() {
            LayoutStep::Done
        } else {
            LayoutStep::Pending {
                placed: self.placed.len(),
                remaining: self.queue.len(),
            }
        }
    }

    fn finish(self: Box<Self>) -> LayoutOutput {
        let Self {
            layout,
            bounds,
            queue,
            placed,
            mut skipped,
            ..
        } = *self;
        skipped.extend(queue.into_iter().map(|(word, _)| word));
        LayoutOutput {
            size: bounds,
            font_family: layout.font_family,
            placed,
            skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::place_all;
    use crate::size::{DEFAULT_FONT_RANGE, size_words};
    use crate::tokenize::{TokenizeOptions, tokenize};

    const TEXT: &str = "Hello world normally you want more words than this. \
        Words words words, more more, hello hello world. Clouds of words want room; \
        this cloud wants more words than that one.";

    fn words() -> Vec<SizedWord> {
        size_words(
            &tokenize(TEXT, &TokenizeOptions::default()),
            DEFAULT_FONT_RANGE,
        )
    }

    fn sprite_for(layout: &SpiralLayout, placed: &PlacedWord) -> Sprite {
        let style = TextStyle::new(placed.word.font_size).with_family(layout.font_family.clone());
        let metrics = HeuristicTextMeasurer.measure(&placed.word.text, &style);
        Sprite::new(&metrics, placed.rotation, layout.padding)
    }

    fn assert_disjoint_and_in_bounds(layout: &SpiralLayout, out: &LayoutOutput) {
        let (w, h) = (out.size.width as usize, out.size.height as usize);
        let mut board = Board::new(w, h);
        for p in &out.placed {
            let sprite = sprite_for(layout, p);
            let x = p.x as i64 + (w as i64 >> 1);
            let y = p.y as i64 + (h as i64 >> 1);
            assert!(board.fits(&sprite, x, y), "{} is out of bounds", p.word.text);
            assert!(!board.collides(&sprite, x, y), "{} overlaps", p.word.text);
            board.place(&sprite, x, y);
        }
    }

    #[test]
    fn placements_never_overlap_and_stay_in_bounds() {
        for (seed, rotation, spiral) in [
            (1, Rotation::Random90, Spiral::Archimedean),
            (2, Rotation::Fixed(0.0), Spiral::Rectangular),
            (
                3,
                Rotation::Range {
                    from: -60.0,
                    to: 60.0,
                    orientations: 5,
                },
                Spiral::Archimedean,
            ),
        ] {
            let layout = SpiralLayout::new()
                .with_seed(seed)
                .with_rotation(rotation)
                .with_spiral(spiral);
            let out = place_all(&layout, &words(), Size::new(500.0, 500.0)).unwrap();
            assert!(!out.placed.is_empty());
            assert_eq!(out.placed.len() + out.skipped.len(), words().len());
            assert_disjoint_and_in_bounds(&layout, &out);
        }
    }

    #[test]
    fn fixed_rotation_and_seed_are_deterministic() {
        let layout = SpiralLayout::new()
            .with_rotation(Rotation::Fixed(0.0))
            .with_seed(42);
        let a = place_all(&layout, &words(), Size::new(500.0, 500.0)).unwrap();
        let b = place_all(&layout, &words(), Size::new(500.0, 500.0)).unwrap();
        assert_eq!(a, b);
        assert!(a.placed.iter().all(|p| p.rotation == 0.0));
    }

    #[test]
    fn largest_words_are_placed_first() {
        let layout = SpiralLayout::new().with_seed(9);
        let out = place_all(&layout, &words(), Size::new(500.0, 500.0)).unwrap();
        let sizes: Vec<f64> = out.placed.iter().map(|p| p.word.font_size).collect();
        assert!(sizes.windows(2).all(|w| w[0] >= w[1]), "{sizes:?}");
        assert_eq!(out.font_family, FontFamily::named("Impact"));
    }

    #[test]
    fn words_that_cannot_fit_are_skipped() {
        let layout = SpiralLayout::new().with_rotation(Rotation::Fixed(0.0));
        let out = place_all(&layout, &words(), Size::new(30.0, 12.0)).unwrap();
        assert!(out.placed.is_empty());
        assert_eq!(out.skipped.len(), words().len());
    }

    #[test]
    fn empty_bounds_are_rejected() {
        let layout = SpiralLayout::new();
        for size in [
            Size::new(0.0, 100.0),
            Size::new(100.0, 0.5),
            Size::new(f64::NAN, 100.0),
        ] {
            assert!(matches!(
                layout.start(&words(), size),
                Err(CloudError::EmptyBounds)
            ));
        }
    }

    #[test]
    fn oversized_bounds_are_rejected() {
        let layout = SpiralLayout::new();
        for size in [
            Size::new(1e8, 1e8),
            Size::new(500.0, MAX_BOUNDS + 1.0),
        ] {
            assert!(matches!(
                layout.start(&[], size),
                Err(CloudError::BoundsTooLarge { max, .. }) if max == MAX_BOUNDS
            ));
        }
        assert!(layout.start(&[], Size::new(MAX_BOUNDS, MAX_BOUNDS)).is_ok());
    }

    #[test]
    fn words_larger_than_the_board_are_skipped_before_rasterizing() {
        let sized = |text: &str, font_size: f64| SizedWord {
            text: text.to_owned(),
            frequency: 1,
            factor: 1.0,
            font_size,
        };
        let layout = SpiralLayout::new()
            .with_rotation(Rotation::Fixed(0.0))
            .with_seed(1);
        let input = [
            sized("huge", 1e7),
            sized("unsized", f64::NAN),
            sized("fits", 20.0),
        ];
        let out = place_all(&layout, &input, Size::new(500.0, 500.0)).unwrap();
        let placed: Vec<&str> = out.placed.iter().map(|p| p.word.text.as_str()).collect();
        assert_eq!(placed, ["fits"]);
        let mut skipped: Vec<&str> = out.skipped.iter().map(|w| w.text.as_str()).collect();
        skipped.sort_unstable();
        assert_eq!(skipped, ["huge", "unsized"]);
    }

    #[test]
    fn stepping_reports_progress_and_finish_skips_the_rest() {
        let layout = SpiralLayout::new().with_seed(5);
        let all = words();
        let mut job = layout.start(&all, Size::new(500.0, 500.0)).unwrap();
        match job.step(2) {
            LayoutStep::Pending { remaining, .. } => assert_eq!(remaining, all.len() - 2),
            LayoutStep::Done => panic!("two words cannot finish {} words", all.len()),
        }
        let out = job.finish();
        assert_eq!(out.placed.len() + out.skipped.len(), all.len());
        assert!(out.skipped.len() >= all.len() - 2);
    }

    #[test]
    fn range_rotation_uses_evenly_spaced_angles() {
        let mut rng = StdRng::seed_from_u64(3);
        let rotation = Rotation::Range {
            from: -60.0,
            to: 60.0,
            orientations: 5,
        };
        for _ in 0..50 {
            let angle = rotation.sample(&mut rng);
            assert!([-60.0, -30.0, 0.0, 30.0, 60.0].contains(&angle), "{angle}");
        }
        let single = Rotation::Range {
            from: 15.0,
            to: 90.0,
            orientations: 1,
        };
        assert_eq!(single.sample(&mut rng), 15.0);
    }

    #[test]
    fn rectangular_spiral_walks_outwards() {
        let mut path = SpiralPath::new(Spiral::Rectangular, 100.0, 100.0);
        let steps: Vec<(f64, f64)> = (0..6).map(|t| path.at(f64::from(t))).collect();
        assert_eq!(steps[0], (4.0, 0.0));
        assert_eq!(steps[1], (4.0, 4.0));
        assert!(steps.iter().all(|&(x, y)| x.abs() <= 8.0 && y.abs() <= 8.0));
    }
}
