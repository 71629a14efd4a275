// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal mark runtime for cloudviz.
//!
//! Chart builders describe their output as a flat list of [`Mark`]s:
//! - **rect** marks (backgrounds, frames),
//! - **text** marks (tick labels, captions, cloud words), and
//! - **path** marks (areas, rules, axis domains).
//!
//! A [`Scene`] holds the marks currently on screen. Every render fully replaces the previous
//! content; there is no incremental diffing.
//!
//! Text shaping is out of scope; text marks store unshaped strings plus an optional CSS font
//! family for the renderer.

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{
    Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, PathPayload, RectPayload, TextAnchor,
    TextBaseline, TextPayload,
};
pub use scene::Scene;
