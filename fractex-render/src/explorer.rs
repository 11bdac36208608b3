use std::sync::mpsc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use fractex_core::{AlgorithmVariant, Viewport, Zoom};

use crate::canvas::Canvas;
use crate::engine::{RenderEngine, RenderEvent};
use crate::error::RenderError;

/// Which mouse button a click came from. Only the primary button is
/// distinguished; everything else zooms out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
}

impl MouseButton {
    /// The zoom direction this button triggers.
    pub fn zoom(self) -> Zoom {
        match self {
            Self::Primary => Zoom::In,
            Self::Secondary => Zoom::Out,
        }
    }
}

/// The facade a UI collaborator drives: algorithm selection, click-to-zoom,
/// and the canvas the engine paints into.
///
/// The explorer owns the only mutable canvas and applies row events to it
/// one at a time, discarding results from superseded generations. The UI
/// calls [`pump_events`](Self::pump_events) from its repaint loop and uses
/// [`is_rendering`](Self::is_rendering) to disable controls while a pass
/// is in flight.
pub struct FractalExplorer {
    algorithm: AlgorithmVariant,
    viewport: Viewport,
    canvas: Canvas,
    canvas_size: u32,
    engine: RenderEngine,
    events: mpsc::Receiver<RenderEvent>,
    current_generation: u64,
    rendering: bool,
}

impl FractalExplorer {
    /// Create an explorer showing the Mandelbrot set at its default view.
    ///
    /// No render is started; call [`request_render`](Self::request_render)
    /// for the initial frame once the display surface exists.
    pub fn new(canvas_size: u32) -> crate::Result<Self> {
        if canvas_size == 0 {
            return Err(RenderError::InvalidCanvasSize(canvas_size));
        }
        let (engine, events) = RenderEngine::new();
        let algorithm = AlgorithmVariant::Mandelbrot;
        Ok(Self {
            algorithm,
            viewport: algorithm.default_viewport(),
            canvas: Canvas::new(canvas_size),
            canvas_size,
            engine,
            events,
            current_generation: 0,
            rendering: false,
        })
    }

    /// Switch to a different algorithm at its default viewport and start a
    /// fresh render. Returns the new viewport.
    pub fn select_algorithm(&mut self, algorithm: AlgorithmVariant) -> Viewport {
        info!(algorithm = %algorithm, "algorithm selected");
        self.algorithm = algorithm;
        self.viewport = algorithm.default_viewport();
        self.request_render();
        self.viewport
    }

    /// Restore the current algorithm's default viewport and re-render.
    pub fn reset(&mut self) -> Viewport {
        info!(algorithm = %self.algorithm, "view reset");
        self.viewport = self.algorithm.default_viewport();
        self.request_render();
        self.viewport
    }

    /// Handle a click on the canvas: recenter on the clicked point, zoom
    /// in or out depending on the button, and start a fresh render.
    ///
    /// Returns the new viewport. The old viewport value is untouched, so a
    /// pass still rendering from it is unaffected.
    pub fn handle_click(&mut self, px: u32, py: u32, button: MouseButton) -> Viewport {
        let target = self.viewport.pixel_to_plane(self.canvas_size, px, py);
        let zoom = button.zoom();
        info!(point = %target, ?zoom, "click-to-zoom");
        self.viewport = self.viewport.recenter_and_zoom(target, zoom.scale());
        self.request_render();
        self.viewport
    }

    /// Re-render the current view, superseding any in-flight pass.
    /// Returns the generation id of the new pass.
    pub fn request_render(&mut self) -> u64 {
        self.current_generation =
            self.engine
                .request_render(self.algorithm, self.viewport, self.canvas_size);
        self.rendering = true;
        self.current_generation
    }

    /// Apply all pending engine events without blocking.
    ///
    /// Rows from the current generation are written to the canvas; rows
    /// and completions from superseded generations are dropped. Returns
    /// the number of rows written.
    pub fn pump_events(&mut self) -> usize {
        let mut written = 0;
        while let Ok(event) = self.events.try_recv() {
            if self.apply(event) {
                written += 1;
            }
        }
        written
    }

    /// Block until the current pass completes, driving event delivery.
    ///
    /// Intended for headless rendering and tests; a UI collaborator should
    /// prefer [`pump_events`](Self::pump_events) from its repaint loop.
    pub fn block_until_idle(&mut self, timeout: Duration) -> crate::Result<()> {
        let deadline = Instant::now() + timeout;
        while self.rendering {
            let remaining = deadline
                .checked_duration_since(Instant::now())
                .ok_or(RenderError::Timeout)?;
            match self.events.recv_timeout(remaining) {
                Ok(event) => {
                    self.apply(event);
                }
                Err(mpsc::RecvTimeoutError::Timeout) => return Err(RenderError::Timeout),
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    return Err(RenderError::Disconnected)
                }
            }
        }
        Ok(())
    }

    /// Returns `true` if a row was written to the canvas.
    fn apply(&mut self, event: RenderEvent) -> bool {
        match event {
            RenderEvent::Row(row) => {
                if row.generation != self.current_generation {
                    return false; // superseded result, dropped by design
                }
                self.canvas.write_row(row.y, &row.colors);
                true
            }
            RenderEvent::Completed { generation } => {
                if generation == self.current_generation {
                    debug!(generation, "render pass complete, controls re-enabled");
                    self.rendering = false;
                }
                false
            }
        }
    }

    /// `true` while a pass is in flight; the UI disables its controls.
    pub fn is_rendering(&self) -> bool {
        self.rendering
    }

    pub fn algorithm(&self) -> AlgorithmVariant {
        self.algorithm
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    /// The generation id of the most recent render request.
    pub fn generation(&self) -> u64 {
        self.current_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(30);

    #[test]
    fn rejects_zero_canvas() {
        assert!(matches!(
            FractalExplorer::new(0),
            Err(RenderError::InvalidCanvasSize(0))
        ));
    }

    #[test]
    fn starts_idle_on_mandelbrot_default() {
        let explorer = FractalExplorer::new(32).unwrap();
        assert!(!explorer.is_rendering());
        assert_eq!(explorer.algorithm(), AlgorithmVariant::Mandelbrot);
        assert_eq!(
            explorer.viewport(),
            AlgorithmVariant::Mandelbrot.default_viewport()
        );
    }

    #[test]
    fn select_algorithm_returns_default_viewport() {
        let mut explorer = FractalExplorer::new(16).unwrap();
        let vp = explorer.select_algorithm(AlgorithmVariant::BurningShip);
        assert_eq!(vp, AlgorithmVariant::BurningShip.default_viewport());
        assert!(explorer.is_rendering());
        explorer.block_until_idle(TIMEOUT).unwrap();
        assert!(!explorer.is_rendering());
    }

    #[test]
    fn primary_click_zooms_in_secondary_out() {
        let mut explorer = FractalExplorer::new(16).unwrap();
        let before = explorer.viewport();

        let zoomed = explorer.handle_click(8, 8, MouseButton::Primary);
        assert!((zoomed.width - before.width * 0.5).abs() < 1e-12);

        let back = explorer.handle_click(8, 8, MouseButton::Secondary);
        assert!((back.width - zoomed.width * 2.0).abs() < 1e-12);
        explorer.block_until_idle(TIMEOUT).unwrap();
    }

    #[test]
    fn click_recenters_on_clicked_point() {
        let mut explorer = FractalExplorer::new(100).unwrap();
        let before = explorer.viewport();
        let target = before.pixel_to_plane(100, 25, 75);
        let after = explorer.handle_click(25, 75, MouseButton::Primary);
        let center = after.center();
        assert!((center.re - target.re).abs() < 1e-12);
        assert!((center.im - target.im).abs() < 1e-12);
        explorer.block_until_idle(TIMEOUT).unwrap();
    }

    #[test]
    fn reset_restores_default_view() {
        let mut explorer = FractalExplorer::new(16).unwrap();
        explorer.handle_click(3, 3, MouseButton::Primary);
        explorer.handle_click(9, 12, MouseButton::Primary);
        let vp = explorer.reset();
        assert_eq!(vp, AlgorithmVariant::Mandelbrot.default_viewport());
        explorer.block_until_idle(TIMEOUT).unwrap();
    }

    #[test]
    fn render_paints_the_canvas() {
        let mut explorer = FractalExplorer::new(16).unwrap();
        explorer.request_render();
        explorer.block_until_idle(TIMEOUT).unwrap();

        let canvas = explorer.canvas();
        let any_colored = canvas.pixels().iter().any(|&px| px != crate::Rgb::BLACK);
        assert!(any_colored, "default view must contain escaped points");
    }

    #[test]
    fn superseding_render_completes_only_newest_generation() {
        let mut explorer = FractalExplorer::new(64).unwrap();
        let g1 = explorer.request_render();
        let g2 = explorer.request_render();
        assert!(g2 > g1);
        assert_eq!(explorer.generation(), g2);

        explorer.block_until_idle(TIMEOUT).unwrap();
        assert!(!explorer.is_rendering());

        // No stray completion for the superseded pass may flip state back.
        assert_eq!(explorer.pump_events(), 0);
        assert!(!explorer.is_rendering());
        assert_eq!(explorer.generation(), g2);
    }
}
