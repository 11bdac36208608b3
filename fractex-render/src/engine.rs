use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::mpsc;
use std::sync::Arc;

use tracing::debug;

use fractex_core::{AlgorithmVariant, Viewport};

use crate::row::{render_row, PixelRow, RenderJob};

/// An event delivered by the render engine as a pass makes progress.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    /// One scanline finished. Rows arrive in arbitrary order.
    Row(PixelRow),

    /// Every row of this generation has been delivered. Fires at most once
    /// per generation, and never for a superseded one.
    Completed { generation: u64 },
}

/// Fans row computations out across the thread pool and reports results
/// through an event channel.
///
/// Each `request_render` call advances the generation counter, which
/// implicitly cancels any in-flight pass: older row tasks run to
/// completion but their output is dropped at delivery instead of being
/// preemptively stopped, keeping the hot loop free of cancellation checks.
#[derive(Debug)]
pub struct RenderEngine {
    generation: Arc<AtomicU64>,
    events: mpsc::Sender<RenderEvent>,
}

impl RenderEngine {
    /// Create an engine and the receiving end of its event channel.
    pub fn new() -> (Self, mpsc::Receiver<RenderEvent>) {
        let (events, rx) = mpsc::channel();
        let engine = Self {
            generation: Arc::new(AtomicU64::new(0)),
            events,
        };
        (engine, rx)
    }

    /// The id of the most recently requested pass.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Start a new render pass, superseding any pass still in flight.
    ///
    /// Captures an immutable [`RenderJob`] snapshot and spawns one task per
    /// scanline; rows are embarrassingly parallel and never block on each
    /// other. Returns the new generation id.
    pub fn request_render(
        &self,
        algorithm: AlgorithmVariant,
        viewport: Viewport,
        canvas_size: u32,
    ) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        // A zero-row canvas has nothing to compute; complete right away so
        // a caller waiting on this generation is not left hanging.
        if canvas_size == 0 {
            let _ = self.events.send(RenderEvent::Completed { generation });
            return generation;
        }

        let job = RenderJob {
            algorithm,
            viewport,
            canvas_size,
            generation,
        };
        let remaining = Arc::new(AtomicU32::new(canvas_size));

        debug!(generation, algorithm = %algorithm, canvas_size, "starting row-parallel render");

        for y in 0..canvas_size {
            let current = Arc::clone(&self.generation);
            let remaining = Arc::clone(&remaining);
            let events = self.events.clone();
            rayon::spawn(move || {
                let row = render_row(&job, y);

                // A newer pass superseded this one: drop the row silently
                // and skip the countdown, so no Completed ever fires for
                // this generation.
                if current.load(Ordering::SeqCst) != job.generation {
                    return;
                }

                if events.send(RenderEvent::Row(row)).is_err() {
                    return; // receiver gone, engine shutting down
                }

                // The task that delivers the last outstanding row signals
                // completion. `fetch_sub` returns 1 exactly once per pass.
                if remaining.fetch_sub(1, Ordering::SeqCst) == 1
                    && current.load(Ordering::SeqCst) == job.generation
                {
                    debug!(generation, "all rows delivered");
                    let _ = events.send(RenderEvent::Completed { generation });
                }
            });
        }

        generation
    }
}
