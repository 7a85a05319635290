//! Browser Commands
//!
//! Async wrappers around browser APIs the board needs.

mod image;

pub use image::*;
