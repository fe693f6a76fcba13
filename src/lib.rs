//! funcviz — evaluation, feature extraction, and plotting of elementary
//! mathematical functions (quadratic, trigonometric, exponential, logarithmic).
//!
//! The `func` module is the engine: it knows nothing about rendering or the
//! filesystem. The `plot` module consumes the engine's sample series and
//! feature points to produce PNG images.

pub mod func;
pub mod persistence;
pub mod plot;
