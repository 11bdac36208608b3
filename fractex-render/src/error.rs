use thiserror::Error;

/// Errors originating from the rendering pipeline.
///
/// A superseded render pass is not an error — its output is dropped
/// silently at delivery.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid canvas size: {0}×{0} (must be > 0)")]
    InvalidCanvasSize(u32),

    #[error("timed out waiting for the render pass to complete")]
    Timeout,

    #[error("render engine event channel disconnected")]
    Disconnected,

    #[error(transparent)]
    Core(#[from] fractex_core::CoreError),
}
