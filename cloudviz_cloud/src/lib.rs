// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word clouds for cloudviz.
//!
//! The pipeline has four stages:
//!
//! 1. [`tokenize`] turns free text into distinct words with counts.
//! 2. [`size_words`] maps counts to a size factor in `[1, 10]` and a font size.
//! 3. A [`CloudLayout`] (by default [`SpiralLayout`]) places the words. A [`LayoutRunner`]
//!    runs it on a tokio task in chunks and hands back a [`LayoutTicket`].
//! 4. [`CloudRenderer`] turns the placement into text marks; [`CloudView`] keeps the scene on
//!    screen and drops completions from superseded requests.
//!
//! ```no_run
//! use cloudviz_cloud::{
//!     CloudView, DEFAULT_FONT_RANGE, LayoutRunner, SpiralLayout, TokenizeOptions, size_words,
//!     tokenize,
//! };
//! use kurbo::Size;
//!
//! # async fn demo() -> Result<(), cloudviz_cloud::CloudError> {
//! let tokens = tokenize("the cat sat. The CAT ran!", &TokenizeOptions::default());
//! let words = size_words(&tokens, DEFAULT_FONT_RANGE);
//! let runner = LayoutRunner::new(SpiralLayout::new().with_seed(7));
//! let mut view = CloudView::default().with_tracker(runner.tracker());
//! let done = runner.request(&words, Size::new(500.0, 500.0))?.wait().await?;
//! view.apply(done)?;
//! # Ok(())
//! # }
//! ```

mod config;
mod debounce;
mod error;
mod layout;
mod palette;
mod render;
mod runner;
mod size;
mod tokenize;
mod view;

pub use config::CloudConfig;
pub use debounce::{DEFAULT_QUIET, ResizeDebouncer};
pub use error::{CloudError, CloudResult};
pub use layout::{
    CloudLayout, LayoutJob, LayoutOutput, LayoutStep, MAX_BOUNDS, PlacedWord, Rotation, Spiral,
    SpiralLayout, place_all,
};
pub use palette::{CATEGORY10, parse_palette};
pub use render::CloudRenderer;
pub use runner::{
    DEFAULT_CHUNK_SIZE, LayoutCompletion, LayoutRunner, LayoutTicket, RequestToken,
    RequestTracker,
};
pub use size::{
    DEFAULT_FONT_RANGE, SizeMode, SizedWord, UNIFORM_FACTOR, size_factor, size_words,
    size_words_with,
};
pub use tokenize::{TokenizeOptions, WordToken, tokenize};
pub use view::CloudView;
