use fractex_core::IterationResult;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Convert an HSB color to RGB.
///
/// This reproduces the classic AWT `Color.HSBtoRGB` conversion, including
/// its `f32` arithmetic and `x * 255 + 0.5` rounding, so iteration colors
/// stay stable across releases for golden-image comparisons. Hue wraps
/// (only its fractional part matters); saturation and brightness are
/// expected in `[0, 1]`.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Rgb {
    if saturation == 0.0 {
        let v = (brightness * 255.0 + 0.5) as u8;
        return Rgb::new(v, v, v);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    Rgb::new(
        (r * 255.0 + 0.5) as u8,
        (g * 255.0 + 0.5) as u8,
        (b * 255.0 + 0.5) as u8,
    )
}

/// Map an iteration result to its display color.
///
/// Bounded points are black; escaped points sweep the hue wheel starting
/// at 0.7, one full revolution per 200 iterations, at full saturation and
/// brightness. Stateless and deterministic.
pub fn color_for(result: IterationResult) -> Rgb {
    match result {
        IterationResult::BoundedForever => Rgb::BLACK,
        IterationResult::Escaped(count) => {
            let hue = 0.7 + count as f32 / 200.0;
            hsb_to_rgb(hue, 1.0, 1.0)
        }
    }
}
