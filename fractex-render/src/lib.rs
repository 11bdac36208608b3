pub mod canvas;
pub mod color;
pub mod engine;
pub mod error;
pub mod explorer;
pub mod row;

pub use canvas::Canvas;
pub use color::{color_for, hsb_to_rgb, Rgb};
pub use engine::{RenderEngine, RenderEvent};
pub use error::RenderError;
pub use explorer::{FractalExplorer, MouseButton};
pub use row::{render_row, PixelRow, RenderJob};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
