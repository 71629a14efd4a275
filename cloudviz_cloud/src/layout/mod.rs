// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word placement.
//!
//! A [`CloudLayout`] turns sized words into a [`LayoutJob`] that can be advanced in bounded
//! steps, so a runner can interleave placement with other work. [`SpiralLayout`] is the
//! built-in implementation.

mod spiral;
mod sprite;

use cloudviz_text::FontFamily;
use kurbo::Size;

use crate::error::CloudResult;
use crate::size::SizedWord;

pub use spiral::{MAX_BOUNDS, Rotation, Spiral, SpiralLayout};

/// A word-placement algorithm.
pub trait CloudLayout: Send + Sync {
    /// Prepares a placement of `words` into an area of `bounds` pixels.
    ///
    /// Returns [`CloudError::EmptyBounds`](crate::CloudError::EmptyBounds) when `bounds` has
    /// no area, or [`CloudError::BoundsTooLarge`](crate::CloudError::BoundsTooLarge) when it
    /// exceeds what the layout can hold in memory.
    fn start(&self, words: &[SizedWord], bounds: Size) -> CloudResult<Box<dyn LayoutJob>>;
}

/// An in-progress placement.
pub trait LayoutJob: Send {
    /// Places up to `budget` more words (at least one).
    fn step(&mut self, budget: usize) -> LayoutStep;

    /// Ends the job. Words not yet attempted are reported as skipped.
    fn finish(self: Box<Self>) -> LayoutOutput;
}

/// Progress reported by [`LayoutJob::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutStep {
    /// More words remain.
    Pending {
        /// Words placed so far.
        placed: usize,
        /// Words not yet attempted.
        remaining: usize,
    },
    /// Every word has been attempted.
    Done,
}

/// A word at its final position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedWord {
    /// The sized word.
    pub word: SizedWord,
    /// Horizontal offset of the text anchor from the cloud center.
    pub x: f64,
    /// Vertical offset of the text baseline from the cloud center.
    pub y: f64,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
}

/// The result of a finished layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutOutput {
    /// Area the words were placed in.
    pub size: Size,
    /// Font family the words were measured with.
    pub font_family: FontFamily,
    /// Placed words, in placement order.
    pub placed: Vec<PlacedWord>,
    /// Words that found no free position.
    pub skipped: Vec<SizedWord>,
}

/// Runs a layout to completion on the current thread.
pub fn place_all(
    layout: &dyn CloudLayout,
    words: &[SizedWord],
    bounds: Size,
) -> CloudResult<LayoutOutput> {
    let mut job = layout.start(words, bounds)?;
    while job.step(usize::MAX) != LayoutStep::Done {}
    Ok(job.finish())
}
