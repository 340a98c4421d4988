//! Global constants used throughout the fastfetch codebase.
//!
//! File names, extensions and defaults that more than one module needs live
//! here so the on-disk layout is defined in one place.

/// Directory created under the user's cache and config roots.
pub const APP_DIR_NAME: &str = "fastfetch";

/// Extension of rendered-value cache files.
pub const VALUE_CACHE_EXTENSION: &str = "ffcv";

/// Extension of split-argument cache files.
pub const SPLIT_CACHE_EXTENSION: &str = "ffcs";

/// Version stamp file inside the cache directory.
pub const CACHE_VERSION_FILE: &str = "cacheversion.ffv";

/// Configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Version string stamped into the cache directory.
///
/// A different stamp invalidates every cached module.
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Modules printed when no structure is configured.
pub const DEFAULT_STRUCTURE: &str = "Title:Separator:OS:Host:Kernel:Uptime:Packages:Shell:Terminal:Theme:Font:CPU:Memory:Battery:Locale:Break:Colors";

/// Text between a key and its value.
pub const DEFAULT_SEPARATOR: &str = ": ";

/// Separator between entries of the structure list.
pub const STRUCTURE_DELIMITER: char = ':';

/// Highest `BATn` index checked under `/sys/class/power_supply` (exclusive).
pub const MAX_BATTERIES: u8 = 5;
