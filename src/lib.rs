//! fastfetch - system information with a template renderer and a result cache
//!
//! fastfetch prints one key/value line per information module (OS, kernel,
//! CPU, memory, batteries, ...) in the order given by a colon-separated
//! structure list. Values can be shown as collected or through user supplied
//! format strings, and slow-changing values are cached on disk between runs.
//!
//! # Architecture Overview
//!
//! - [`format`] - typed arguments and the `{}` / `{N}` template renderer
//! - [`cache`] - NUL-delimited record codec, per-module cache files and the
//!   version stamp that invalidates them
//! - [`modules`] - the closed set of module kinds and their collectors
//! - [`output`] - key/value line printing
//! - [`pipeline`] - cache lookup, collection, printing and persisting, per
//!   module, in structure order
//! - [`config`] and [`cli`] - settings from the TOML file and command line
//! - [`core`] - error types and user-facing error reporting
//!
//! # Data Flow
//!
//! ```text
//! cli + config ──▶ structure list ──▶ pipeline ──▶ printer ──▶ stdout
//!                                        │  ▲
//!                               collect  │  │ hit
//!                                        ▼  │
//!                          collectors   cache store ◀── version gate
//! ```
//!
//! Everything runs on one thread, one module at a time.
//!
//! # Cache Files
//!
//! ```text
//! ~/.cache/fastfetch/
//! ├── cacheversion.ffv   # version of the program that wrote the cache
//! ├── Kernel.ffcv        # rendered values, NUL after each instance
//! ├── Kernel.ffcs        # raw arguments, NUL after each field
//! └── ...
//! ```
//!
//! # Example
//!
//! ```rust
//! use fastfetch::format::{FormatArg, render};
//!
//! let args = [FormatArg::from("SONY"), FormatArg::UInt(80)];
//! assert_eq!(render("{1} [{2}%]", None, &args), "SONY [80%]");
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod format;
pub mod modules;
pub mod output;
pub mod pipeline;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
