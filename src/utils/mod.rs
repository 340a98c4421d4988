//! Utilities shared by the collectors.
//!
//! - [`files`] - lenient readers for `/proc`, `/sys` and settings files

pub mod files;

pub use files::{count_dirs, find_property, read_property, read_trimmed};
