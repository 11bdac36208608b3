pub mod algorithm;
pub mod complex;
pub mod error;
pub mod viewport;

// Re-export primary types for convenience.
pub use algorithm::{AlgorithmVariant, IterationResult, MAX_ITERATIONS};
pub use complex::Complex;
pub use error::CoreError;
pub use viewport::{Viewport, Zoom};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
