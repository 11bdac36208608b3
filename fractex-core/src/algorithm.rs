use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::viewport::Viewport;

/// Hard iteration cap shared by every algorithm variant.
pub const MAX_ITERATIONS: u32 = 2000;

/// Squared escape radius: the orbit has escaped once `|z|² >= 4` (|z| > 2).
const ESCAPE_NORM_SQ: f64 = 4.0;

/// The outcome of iterating a single point.
///
/// An explicit two-variant type instead of a sentinel iteration count, so
/// "never escaped" cannot be confused with a legitimate count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationResult {
    /// The orbit left the escape radius after this many steps
    /// (always in `1..MAX_ITERATIONS`).
    Escaped(u32),

    /// The orbit stayed bounded for all of [`MAX_ITERATIONS`] steps.
    BoundedForever,
}

/// The escape-time quadratic family: a closed set of algorithm variants.
///
/// Each variant supplies its default view of the complex plane and its
/// orbit update rule. The variant set is fixed and small, so this is a
/// plain enum with match dispatch rather than a trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlgorithmVariant {
    /// `z → z² + c`
    Mandelbrot,
    /// `z → z̄² + c`
    Tricorn,
    /// `z → (|Re z| + i·|Im z|)² + c`
    BurningShip,
}

impl AlgorithmVariant {
    /// All variants, in picker order.
    pub const ALL: [Self; 3] = [Self::Mandelbrot, Self::Tricorn, Self::BurningShip];

    /// Display name for the algorithm picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Tricorn => "Tricorn",
            Self::BurningShip => "Burning Ship",
        }
    }

    /// The region of the complex plane that frames this fractal well.
    pub fn default_viewport(self) -> Viewport {
        match self {
            Self::Mandelbrot => Viewport::square(-2.0, -1.5, 3.0),
            Self::Tricorn => Viewport::square(-2.0, -2.0, 4.0),
            Self::BurningShip => Viewport::square(-2.0, -2.5, 4.0),
        }
    }

    /// One orbit step, before adding `c`. The only per-variant difference.
    #[inline]
    fn step(self, z: Complex) -> Complex {
        match self {
            Self::Mandelbrot => z.sqr(),
            Self::Tricorn => z.conj().sqr(),
            Self::BurningShip => z.abs_parts().sqr(),
        }
    }

    /// Iterate the point `c`, starting from `z₀ = 0`.
    ///
    /// Loops while the orbit is inside the escape radius (strictly
    /// `|z|² < 4`) and the cap has not been reached. An orbit that first
    /// exceeds the radius exactly on the capped step still counts as
    /// [`IterationResult::BoundedForever`].
    pub fn iterate(self, c: Complex) -> IterationResult {
        let mut z = Complex::ZERO;
        let mut n = 0u32;

        while n < MAX_ITERATIONS && z.norm_sq() < ESCAPE_NORM_SQ {
            z = self.step(z) + c;
            n += 1;
        }

        if n == MAX_ITERATIONS {
            IterationResult::BoundedForever
        } else {
            IterationResult::Escaped(n)
        }
    }
}

impl std::fmt::Display for AlgorithmVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
