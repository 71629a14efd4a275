// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The on-screen cloud and stale-layout filtering.

use cloudviz_core::Scene;
use tracing::debug;

use crate::error::{CloudError, CloudResult};
use crate::render::CloudRenderer;
use crate::runner::{LayoutCompletion, RequestToken, RequestTracker};

/// The word cloud currently on screen.
///
/// Completions replace the whole scene. A completion is stale, and dropped, when its token is
/// not newer than the last applied one or is older than the newest token the tracker has seen
/// issued.
#[derive(Debug, Default)]
pub struct CloudView {
    scene: Scene,
    renderer: CloudRenderer,
    tracker: Option<RequestTracker>,
    applied: Option<RequestToken>,
}

impl CloudView {
    /// Creates an empty view drawing with `renderer`.
    pub fn new(renderer: CloudRenderer) -> Self {
        Self {
            renderer,
            ..Self::default()
        }
    }

    /// Also drops completions older than the newest request issued through `tracker`.
    #[must_use]
    pub fn with_tracker(mut self, tracker: RequestTracker) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// Shows `completion`, replacing everything on screen, and returns the scene revision.
    pub fn apply(&mut self, completion: LayoutCompletion) -> CloudResult<u64> {
        let token = completion.token;
        let issued = self.tracker.as_ref().map(RequestTracker::latest);
        let stale =
            self.applied.is_some_and(|a| token <= a) || issued.is_some_and(|l| token < l);
        if stale {
            let latest = self.applied.into_iter().chain(issued).max().unwrap_or(token);
            debug!(%token, %latest, "dropping stale layout");
            return Err(CloudError::Superseded { token, latest });
        }
        let revision = self.scene.replace(self.renderer.marks(&completion.output));
        self.applied = Some(token);
        debug!(%token, revision, marks = self.scene.len(), "cloud scene replaced");
        Ok(revision)
    }

    /// The token of the completion on screen.
    pub fn applied(&self) -> Option<RequestToken> {
        self.applied
    }

    /// The marks on screen.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}
