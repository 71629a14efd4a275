// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word-cloud error type.

use thiserror::Error;

use crate::runner::RequestToken;

/// Errors raised by word-cloud layout and rendering.
#[derive(Debug, Error)]
pub enum CloudError {
    /// The layout area has no positive, finite width and height.
    #[error("layout bounds must have a positive width and height")]
    EmptyBounds,

    /// The layout area is wider or taller than the layout supports.
    #[error("layout bounds {width}x{height} exceed the {max}px limit")]
    BoundsTooLarge {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
        /// Largest accepted side length.
        max: f64,
    },

    /// A newer request was issued before this one completed or was applied.
    #[error("layout request {token} was superseded by request {latest}")]
    Superseded {
        /// The stale request.
        token: RequestToken,
        /// The newest request known when the stale one was dropped.
        latest: RequestToken,
    },

    /// The layout task panicked or was cancelled.
    #[error("layout task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// A palette entry is not a CSS color.
    #[error("invalid color `{0}`")]
    InvalidColor(String),
}

/// Result alias for word-cloud operations.
pub type CloudResult<T> = Result<T, CloudError>;
