//! Configuration file handling.
//!
//! Settings live in a TOML file, by default
//! `$XDG_CONFIG_HOME/fastfetch/config.toml` (`~/.config/fastfetch/config.toml`
//! on most Linux systems). A missing default file simply means defaults; a
//! file named explicitly with `--config` or `FASTFETCH_CONFIG` must exist.
//!
//! # File Format
//!
//! ```toml
//! structure = "Title:Separator:OS:Kernel:Battery"
//! separator = ": "
//! color = "blue"
//! show_errors = false
//! recache = false
//! cache_save = true
//! cache_dir = "~/.cache/fastfetch"
//!
//! [formats]
//! memory = "{}MiB / {}MiB ({}%)"
//!
//! [keys]
//! battery = "Bat {}"
//!
//! [set]
//! editor = "helix"
//! ```
//!
//! Table keys in `[formats]`, `[keys]` and `[set]` are module names and are
//! matched without regard to case.
//!
//! Settings from the file never change caching behavior on their own: cached
//! records are stored unformatted where it matters and re-rendered on read.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_SEPARATOR, DEFAULT_STRUCTURE};
use crate::core::FetchError;

/// Commented default configuration, printed by `--print-default-config`.
pub const DEFAULT_CONFIG: &str = r#"# fastfetch configuration

# Modules to show, separated by ':'. Names in [set] may be used too.
structure = "Title:Separator:OS:Host:Kernel:Uptime:Packages:Shell:Terminal:Theme:Font:CPU:Memory:Battery:Locale:Break:Colors"

# Text between key and value
separator = ": "

# Key color: a name such as "blue" or an ANSI code such as "94"
# color = "blue"

# Print a line for modules that found no data
show_errors = false

# Ignore cached values for every run
recache = false

# Write freshly collected values to the cache
cache_save = true

# Cache location, defaults to $XDG_CACHE_HOME/fastfetch
# cache_dir = "~/.cache/fastfetch"

# Custom value formats. {} takes the next argument, {N} argument N.
# See `fastfetch --help-format` for the arguments of each module.
[formats]
# memory = "{}MiB / {}MiB ({}%)"

# Custom key formats. {} is the instance number.
[keys]
# battery = "Battery {}"

# Fixed values, usable as module names in the structure
[set]
# editor = "helix"
"#;

/// Settings read from the configuration file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Colon-separated module list
    pub structure: String,
    /// Text between key and value
    pub separator: String,
    /// Key color name or ANSI code
    pub color: Option<String>,
    /// Print error lines for modules without data
    pub show_errors: bool,
    /// Bypass cache reads
    pub recache: bool,
    /// Persist freshly collected values
    pub cache_save: bool,
    /// Cache directory override, `~` and `$VAR` are expanded
    pub cache_dir: Option<String>,
    /// Value format per module
    pub formats: BTreeMap<String, String>,
    /// Key format per module
    pub keys: BTreeMap<String, String>,
    /// Custom fixed values
    pub set: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            structure: DEFAULT_STRUCTURE.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            color: None,
            show_errors: false,
            recache: false,
            cache_save: true,
            cache_dir: None,
            formats: BTreeMap::new(),
            keys: BTreeMap::new(),
            set: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// With `explicit` set, that file must exist. Otherwise the default path
    /// is tried and a missing file yields [`Config::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicitly named file does not exist
    /// - The file cannot be read
    /// - The file is not valid TOML or has unknown or mistyped fields
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(FetchError::ConfigNotFound {
                        path: path.display().to_string(),
                    }
                    .into());
                }
                path.to_path_buf()
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        Self::load_from(&path)
    }

    /// Read and parse `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|err| FetchError::ConfigParseError {
            file: path.display().to_string(),
            reason: err.message().to_string(),
        })?;
        config.normalize();
        Ok(config)
    }

    /// Default config file location, if a config directory is known.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// The cache directory override with `~` and variables expanded.
    ///
    /// # Errors
    ///
    /// Returns an error when the path refers to an undefined variable.
    pub fn cache_dir_path(&self) -> Result<Option<PathBuf>> {
        let Some(raw) = &self.cache_dir else {
            return Ok(None);
        };
        let expanded = shellexpand::full(raw)
            .with_context(|| format!("Failed to expand cache_dir '{raw}'"))?;
        Ok(Some(PathBuf::from(expanded.as_ref())))
    }

    /// Lower-case every module-keyed table so lookups ignore case.
    pub fn normalize(&mut self) {
        for table in [&mut self.formats, &mut self.keys, &mut self.set] {
            *table = std::mem::take(table)
                .into_iter()
                .map(|(name, value)| (name.to_ascii_lowercase(), value))
                .collect();
        }
    }

    #[must_use]
    pub fn format_for(&self, module: &str) -> Option<&str> {
        self.formats.get(&module.to_ascii_lowercase()).map(String::as_str)
    }

    #[must_use]
    pub fn key_for(&self, module: &str) -> Option<&str> {
        self.keys.get(&module.to_ascii_lowercase()).map(String::as_str)
    }
}
