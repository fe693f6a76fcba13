//! Curve rendering and PNG export: the presentation layer over the engine.

pub mod compose;
pub mod render;
pub mod types;
