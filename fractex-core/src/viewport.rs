use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::CoreError;

/// The visible rectangle of the complex plane.
///
/// `(x, y)` is the minimum corner; `width` and `height` are the plane
/// extents. The viewport is always square (`width == height`), matching the
/// square pixel canvas it is projected onto.
///
/// A `Viewport` is a value: zooming and recentering produce a *new*
/// viewport rather than mutating in place, so a render pass holding a
/// snapshot is never affected by a concurrent zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Square viewport from a minimum corner and a side length.
    ///
    /// Used for the built-in default ranges; `side` must be positive.
    pub const fn square(x: f64, y: f64, side: f64) -> Self {
        Self {
            x,
            y,
            width: side,
            height: side,
        }
    }

    /// Create a viewport with explicit parameters, validating the square
    /// invariant.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> crate::Result<Self> {
        if width != height {
            return Err(CoreError::InvalidViewport {
                reason: format!("viewport must be square, got {width}×{height}"),
            });
        }
        if width <= 0.0 || !width.is_finite() || !x.is_finite() || !y.is_finite() {
            return Err(CoreError::InvalidViewport {
                reason: format!("extent must be positive and finite, got {width} at ({x}, {y})"),
            });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Centre of the viewport on the complex plane.
    pub fn center(&self) -> Complex {
        Complex::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Map a pixel coordinate to its point on the complex plane.
    ///
    /// Linear interpolation per axis: pixel 0 maps to the minimum corner,
    /// and pixel `canvas_size - 1` lands strictly inside the far edge.
    /// Callers guarantee `px, py < canvas_size`; no clamping is done.
    #[inline]
    pub fn pixel_to_plane(&self, canvas_size: u32, px: u32, py: u32) -> Complex {
        let size = canvas_size as f64;
        Complex::new(
            self.x + px as f64 * (self.width / size),
            self.y + py as f64 * (self.height / size),
        )
    }

    /// A new viewport centred on `center` with extents scaled by `scale`.
    ///
    /// `scale < 1` zooms in, `scale > 1` zooms out. This never mutates
    /// `self`; the caller swaps the active viewport between renders.
    #[must_use]
    pub fn recenter_and_zoom(&self, center: Complex, scale: f64) -> Self {
        debug_assert!(scale > 0.0 && scale.is_finite());
        let width = self.width * scale;
        let height = self.height * scale;
        Self {
            x: center.re - width / 2.0,
            y: center.im - height / 2.0,
            width,
            height,
        }
    }
}

/// A named zoom direction, decoupled from whatever input backend produced
/// the click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zoom {
    /// Halve the visible extent (2× magnification).
    In,
    /// Double the visible extent.
    Out,
}

impl Zoom {
    /// The viewport scale factor this direction applies.
    pub fn scale(self) -> f64 {
        match self {
            Self::In => 0.5,
            Self::Out => 2.0,
        }
    }
}
