//! Typed arguments and the format string renderer.
//!
//! - [`arg`] - [`FormatArg`], the tagged value handed to templates and caches
//! - [`template`] - [`render`], placeholder substitution with verbatim fallback

pub mod arg;
pub mod template;

pub use arg::FormatArg;
pub use template::{render, render_into};
