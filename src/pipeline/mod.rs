//! Pipeline module - load, clean, and analyze the cycle dataset

pub mod cleaner;
pub mod correlation;
pub mod loader;
pub mod stats;

pub use cleaner::*;
pub use correlation::*;
pub use loader::*;
pub use stats::*;
