// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deserializable word-cloud settings.

use cloudviz_core::MarkId;
use cloudviz_text::FontFamily;
use kurbo::Size;
use serde::Deserialize;

use crate::error::CloudResult;
use crate::layout::{Rotation, Spiral, SpiralLayout};
use crate::palette::parse_palette;
use crate::render::CloudRenderer;
use crate::runner::{DEFAULT_CHUNK_SIZE, LayoutRunner};
use crate::size::SizeMode;
use crate::tokenize::TokenizeOptions;

/// Word-cloud settings, deserializable from a config file.
///
/// Every field is optional; missing fields take the [`Default`] values (a 500×500 cloud in
/// `Impact` with padding 5 and random 0/90 degree rotation).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CloudConfig {
    /// Layout width in pixels.
    pub width: f64,
    /// Layout height in pixels.
    pub height: f64,
    /// Free space around each word.
    pub padding: f64,
    /// CSS font family.
    pub font_family: String,
    /// Rotation policy.
    pub rotation: Rotation,
    /// Spiral used for the position search.
    pub spiral: Spiral,
    /// RNG seed for placement.
    pub seed: u64,
    /// Word sizing.
    pub size: SizeMode,
    /// Tokenizer options.
    pub tokenize: TokenizeOptions,
    /// CSS colors; empty means category10.
    pub palette: Vec<String>,
    /// Words placed between yields.
    pub chunk_size: usize,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            padding: 5.0,
            font_family: "Impact".to_owned(),
            rotation: Rotation::default(),
            spiral: Spiral::default(),
            seed: 0,
            size: SizeMode::default(),
            tokenize: TokenizeOptions::default(),
            palette: Vec::new(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl CloudConfig {
    /// The layout area.
    pub fn bounds(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Builds the configured layout.
    pub fn layout(&self) -> SpiralLayout {
        SpiralLayout::new()
            .with_padding(self.padding)
            .with_font_family(FontFamily::from_css(&self.font_family))
            .with_rotation(self.rotation)
            .with_spiral(self.spiral)
            .with_seed(self.seed)
    }

    /// Builds a runner around [`Self::layout`].
    pub fn runner(&self) -> LayoutRunner {
        LayoutRunner::new(self.layout()).with_chunk_size(self.chunk_size)
    }

    /// Builds the renderer, parsing the palette.
    pub fn renderer(&self, id_base: MarkId) -> CloudResult<CloudRenderer> {
        let renderer = CloudRenderer::new(id_base);
        if self.palette.is_empty() {
            return Ok(renderer);
        }
        Ok(renderer.with_palette(parse_palette(&self.palette)?))
    }
}
