//! Report module - summarizing a pipeline run

pub mod summary;

pub use summary::*;
