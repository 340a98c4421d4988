//! Core types shared across fastfetch
//!
//! - [`FetchError`] - failures that end a run (config, options)
//! - [`CollectError`] - a single module found no data; shown, never fatal
//! - [`ErrorContext`] and [`user_friendly_error`] - CLI error presentation

pub mod error;

pub use error::{CollectError, ErrorContext, FetchError, user_friendly_error};
