// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Asynchronous layout requests.
//!
//! Every request gets a fresh [`RequestToken`]. Issuing a request supersedes all older ones:
//! their tasks stop at the next chunk boundary and report [`CloudError::Superseded`].

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use kurbo::Size;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::{CloudError, CloudResult};
use crate::layout::{CloudLayout, LayoutOutput, LayoutStep};
use crate::size::SizedWord;

/// Words placed per step before yielding to the runtime.
pub const DEFAULT_CHUNK_SIZE: usize = 16;

/// Identifies one layout request. Later requests have larger tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(pub u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shared view of the newest token a [`LayoutRunner`] has issued.
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
}

impl RequestTracker {
    /// The newest issued token (`RequestToken(0)` before the first request).
    pub fn latest(&self) -> RequestToken {
        RequestToken(self.latest.load(Ordering::Acquire))
    }

    fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }
}

/// A finished layout and the request it answers.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutCompletion {
    /// The request this placement belongs to.
    pub token: RequestToken,
    /// The placement.
    pub output: LayoutOutput,
}

/// Runs a [`CloudLayout`] on tokio tasks.
#[derive(Clone)]
pub struct LayoutRunner {
    layout: Arc<dyn CloudLayout>,
    chunk_size: usize,
    tracker: RequestTracker,
}

impl fmt::Debug for LayoutRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutRunner")
            .field("chunk_size", &self.chunk_size)
            .field("latest", &self.tracker.latest())
            .finish_non_exhaustive()
    }
}

impl LayoutRunner {
    /// Creates a runner placing [`DEFAULT_CHUNK_SIZE`] words per step.
    pub fn new(layout: impl CloudLayout + 'static) -> Self {
        Self {
            layout: Arc::new(layout),
            chunk_size: DEFAULT_CHUNK_SIZE,
            tracker: RequestTracker::default(),
        }
    }

    /// Sets how many words are placed between yields (at least one).
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Returns a handle observing the newest issued token.
    pub fn tracker(&self) -> RequestTracker {
        self.tracker.clone()
    }

    /// Starts laying out `words` in `bounds` on a new task, superseding earlier requests.
    ///
    /// Bounds are validated before a token is issued, so a rejected request supersedes nothing.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn request(&self, words: &[SizedWord], bounds: Size) -> CloudResult<LayoutTicket> {
        let mut job = self.layout.start(words, bounds)?;
        let token = self.tracker.issue();
        let tracker = self.tracker.clone();
        let chunk_size = self.chunk_size;
        debug!(%token, words = words.len(), width = bounds.width, height = bounds.height, "layout requested");

        let handle = tokio::spawn(async move {
            loop {
                let latest = tracker.latest();
                if latest != token {
                    debug!(%token, %latest, "layout superseded");
                    return Err(CloudError::Superseded { token, latest });
                }
                match job.step(chunk_size) {
                    LayoutStep::Done => break,
                    LayoutStep::Pending { .. } => tokio::task::yield_now().await,
                }
            }
            let output = job.finish();
            info!(
                %token,
                placed = output.placed.len(),
                skipped = output.skipped.len(),
                "layout finished"
            );
            Ok(LayoutCompletion { token, output })
        });

        Ok(LayoutTicket { token, handle })
    }
}

/// The pending result of one layout request.
#[derive(Debug)]
pub struct LayoutTicket {
    token: RequestToken,
    handle: JoinHandle<CloudResult<LayoutCompletion>>,
}

impl LayoutTicket {
    /// The request's token.
    pub fn token(&self) -> RequestToken {
        self.token
    }

    /// Waits for the layout to finish.
    ///
    /// Yields the completion once; a request superseded while still running yields
    /// [`CloudError::Superseded`].
    pub async fn wait(self) -> CloudResult<LayoutCompletion> {
        self.handle.await?
    }

    /// Stops the task without waiting for it.
    pub fn abort(&self) {
        self.handle.abort();
    }
}
