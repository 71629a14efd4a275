// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapsing container resize bursts.

use std::time::Duration;

use kurbo::Size;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::trace;

/// Quiet period used by [`ResizeDebouncer::default`].
pub const DEFAULT_QUIET: Duration = Duration::from_millis(150);

/// Turns a burst of resize events into one size, emitted after `quiet` without events.
///
/// The last size of a burst wins.
#[derive(Clone, Debug)]
pub struct ResizeDebouncer {
    quiet: Duration,
    pending: Option<(Size, Instant)>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET)
    }
}

impl ResizeDebouncer {
    /// Creates a debouncer with the given quiet period.
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Records a resize observed at `now`.
    pub fn push(&mut self, size: Size, now: Instant) {
        trace!(width = size.width, height = size.height, "resize observed");
        self.pending = Some((size, now));
    }

    /// When the pending size settles, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, at)| at + self.quiet)
    }

    /// Takes the pending size if it has been quiet long enough at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<Size> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.flush(),
            _ => None,
        }
    }

    /// Takes the pending size regardless of the quiet period.
    pub fn flush(&mut self) -> Option<Size> {
        self.pending.take().map(|(size, _)| size)
    }

    /// Forwards settled sizes from `events` to `settled` until `events` closes.
    ///
    /// A burst still pending when `events` closes is flushed.
    pub async fn forward(mut self, mut events: mpsc::Receiver<Size>, settled: mpsc::Sender<Size>) {
        loop {
            let event = match self.deadline() {
                Some(deadline) => tokio::select! {
                    event = events.recv() => event,
                    () = tokio::time::sleep_until(deadline) => {
                        if let Some(size) = self.poll(Instant::now()) {
                            if settled.send(size).await.is_err() {
                                return;
                            }
                        }
                        continue;
                    }
                },
                None => events.recv().await,
            };
            match event {
                Some(size) => self.push(size, Instant::now()),
                None => break,
            }
        }
        if let Some(size) = self.flush() {
            let _ = settled.send(size).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use cloudviz_charts::{ChartLayout, Margins, Size as ChartSize};

    use super::*;
    use crate::layout::SpiralLayout;
    use crate::runner::{LayoutRunner, RequestToken};
    use crate::size::size_words;
    use crate::tokenize::{TokenizeOptions, tokenize};
    use crate::view::CloudView;

    #[test]
    fn last_size_of_a_burst_wins_after_quiet() {
        let t0 = Instant::now();
        let mut d = ResizeDebouncer::new(Duration::from_millis(100));
        d.push(Size::new(100.0, 100.0), t0);
        d.push(Size::new(200.0, 150.0), t0 + Duration::from_millis(40));
        assert_eq!(d.poll(t0 + Duration::from_millis(120)), None);
        assert_eq!(
            d.poll(t0 + Duration::from_millis(140)),
            Some(Size::new(200.0, 150.0))
        );
        assert_eq!(d.poll(t0 + Duration::from_millis(500)), None);
    }

    #[tokio::test(start_paused = true)]
    async fn forward_emits_once_per_burst() {
        let (events_tx, events_rx) = mpsc::channel(16);
        let (settled_tx, mut settled_rx) = mpsc::channel(16);
        let task = tokio::spawn(
            ResizeDebouncer::new(Duration::from_millis(100)).forward(events_rx, settled_tx),
        );

        for w in [300.0, 320.0, 340.0] {
            events_tx.send(Size::new(w, 200.0)).await.unwrap();
            tokio::time::sleep(Duration::from_millis(30)).await;
        }
        assert_eq!(settled_rx.recv().await, Some(Size::new(340.0, 200.0)));

        events_tx.send(Size::new(500.0, 400.0)).await.unwrap();
        drop(events_tx);
        assert_eq!(settled_rx.recv().await, Some(Size::new(500.0, 400.0)));
        assert_eq!(settled_rx.recv().await, None);
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn settled_resize_drives_one_layout_into_the_view() {
        let (events_tx, events_rx) = mpsc::channel(16);
        let (settled_tx, mut settled_rx) = mpsc::channel(16);
        let debouncer = tokio::spawn(
            ResizeDebouncer::new(Duration::from_millis(100)).forward(events_rx, settled_tx),
        );

        let runner = LayoutRunner::new(SpiralLayout::new().with_seed(8));
        let tracker = runner.tracker();
        let mut view = CloudView::default().with_tracker(runner.tracker());
        let words = size_words(
            &tokenize(
                "resize the cloud once the burst settles",
                &TokenizeOptions::default(),
            ),
            (10.0, 30.0),
        );

        // The first event comes from a container that has not been measured yet.
        for w in [0.0, 280.0, 300.0, 320.0] {
            events_tx.send(Size::new(w, 240.0)).await.unwrap();
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
        drop(events_tx);

        let mut frames = Vec::new();
        while let Some(container) = settled_rx.recv().await {
            let frame = ChartLayout::fit(
                ChartSize::new(container.width, container.height),
                ChartSize::new(500.0, 500.0),
                Margins::default(),
            )
            .size();
            frames.push(frame);
            let ticket = runner
                .request(&words, Size::new(frame.width, frame.height))
                .unwrap();
            view.apply(ticket.wait().await.unwrap()).unwrap();
        }
        debouncer.await.unwrap();

        assert_eq!(frames, [ChartSize::new(320.0, 240.0)]);
        assert_eq!(tracker.latest(), RequestToken(1));
        assert_eq!(view.applied(), Some(RequestToken(1)));
        assert_eq!(view.scene().revision(), 1);
        assert!(!view.scene().is_empty());
    }
}
