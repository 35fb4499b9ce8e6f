//! Terminal output formatting

pub mod render;
