//! Charts module - static PNG rendering via plotters

pub mod distribution;
pub mod heatmap;
pub mod palette;

pub use distribution::*;
pub use heatmap::*;
