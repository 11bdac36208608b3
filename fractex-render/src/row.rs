use fractex_core::{AlgorithmVariant, Viewport};

use crate::color::{color_for, Rgb};

/// Immutable snapshot of everything one render pass needs.
///
/// Every row task of a pass reads the same `RenderJob`; a zoom or
/// algorithm switch mid-render builds a new job with a higher generation
/// and never touches this one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderJob {
    pub algorithm: AlgorithmVariant,
    pub viewport: Viewport,
    pub canvas_size: u32,
    pub generation: u64,
}

/// The colors of one computed scanline, tagged with the generation of the
/// pass that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelRow {
    pub generation: u64,
    pub y: u32,
    pub colors: Vec<Rgb>,
}

/// Compute one scanline: map each pixel to the plane, iterate, color.
///
/// Pure function over the job snapshot — rows share no mutable state and
/// may run in any order on any thread.
pub fn render_row(job: &RenderJob, y: u32) -> PixelRow {
    let mut colors = Vec::with_capacity(job.canvas_size as usize);
    for px in 0..job.canvas_size {
        let c = job.viewport.pixel_to_plane(job.canvas_size, px, y);
        colors.push(color_for(job.algorithm.iterate(c)));
    }
    PixelRow {
        generation: job.generation,
        y,
        colors,
    }
}
