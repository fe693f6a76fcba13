//! The function engine: definitions, evaluation, and feature extraction.

pub mod collection;
pub mod def;
pub mod error;
pub mod eval;
pub mod features;
