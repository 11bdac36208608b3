use crate::color::Rgb;

/// A square RGB pixel surface, written one row at a time.
///
/// The canvas is owned by the explorer; only row-completion delivery
/// writes to it, and the display/export collaborator reads from it.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: u32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    /// Create a `size × size` canvas filled with black.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            pixels: vec![Rgb::BLACK; size as usize * size as usize],
        }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.size && y < self.size);
        (y * self.size + x) as usize
    }

    /// Write a single pixel.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Read a single pixel.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    /// Copy a full scanline into place. `colors` must hold exactly
    /// `size` entries.
    pub fn write_row(&mut self, y: u32, colors: &[Rgb]) {
        debug_assert_eq!(colors.len(), self.size as usize);
        let start = (y * self.size) as usize;
        self.pixels[start..start + self.size as usize].copy_from_slice(colors);
    }

    /// Row-major pixel data, for the display/export collaborator.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Iterate the canvas one scanline at a time, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks_exact(self.size as usize)
    }

    /// Flattened RGBA bytes (alpha 255), the layout most display surfaces
    /// want.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            out.extend_from_slice(&[px.r, px.g, px.b, 255]);
        }
        out
    }
}
