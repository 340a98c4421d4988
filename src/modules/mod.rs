//! Information modules and the collectors behind them.
//!
//! A module is one named line (or group of lines) of output such as `Kernel`
//! or `Battery`. The set of modules is closed: [`ModuleKind`] enumerates them
//! and maps each data module to a [`Collector`] once, when the structure list
//! is parsed. Layout modules (`Title`, `Separator`, `Break`, `Colors`) have no
//! collector and are drawn by the pipeline directly.
//!
//! Collectors read from a [`CollectContext`] instead of the real filesystem
//! and environment so that tests can point them at a fake root.
//!
//! # Collector contract
//!
//! A collector returns one [`Collected`] per instance (most modules have one,
//! `Battery` has one per battery). Each instance carries:
//! - `value`: the default rendering, shown when no custom format is set
//! - `args`: the positional [`FormatArg`]s for custom formats, exactly
//!   [`ModuleKind::arity`] of them
//!
//! - `error`: set when this one instance failed while its siblings did not
//!
//! A collector that finds nothing returns [`CollectError`]; the pipeline shows
//! it in place of the value and caches nothing. The same holds for a module
//! with any failed instance.

pub mod battery;
pub mod cpu;
pub mod gtk;
pub mod host;
pub mod kernel;
pub mod kind;
pub mod locale;
pub mod memory;
pub mod os;
pub mod packages;
pub mod shell;
pub mod structure;
pub mod terminal;
pub mod theme;
pub mod title;
pub mod uptime;

pub use kind::ModuleKind;
pub use structure::{StructureEntry, parse_structure};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::CollectError;
use crate::format::FormatArg;

/// One instance produced by a collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected {
    /// Default rendering used when the module has no custom format
    pub value: String,
    /// Positional arguments for custom formats
    pub args: Vec<FormatArg>,
    /// Why this instance has no data
    pub error: Option<CollectError>,
}

impl Collected {
    pub fn new(value: impl Into<String>, args: Vec<FormatArg>) -> Self {
        Self {
            value: value.into(),
            args,
            error: None,
        }
    }

    /// An instance that exists but could not be read.
    #[must_use]
    pub const fn failed(error: CollectError) -> Self {
        Self {
            value: String::new(),
            args: Vec::new(),
            error: Some(error),
        }
    }
}

/// Produces the data for one module kind.
pub trait Collector: Sync {
    /// Gather every instance of the module.
    fn collect(&self, ctx: &CollectContext) -> Result<Vec<Collected>, CollectError>;
}

/// Where collectors read from.
///
/// [`CollectContext::system`] reads the live system. [`CollectContext::with_root`]
/// resolves every absolute path under a different root and uses an isolated
/// environment, which is what the tests use.
#[derive(Debug, Clone)]
pub struct CollectContext {
    root: PathBuf,
    home: Option<PathBuf>,
    vars: Option<HashMap<String, String>>,
    parent_pid: Option<u32>,
}

impl CollectContext {
    /// The running system: `/`, the real home directory and process environment.
    #[must_use]
    pub fn system() -> Self {
        Self {
            root: PathBuf::from("/"),
            home: dirs::home_dir(),
            vars: None,
            parent_pid: None,
        }
    }

    /// A context rooted at `root` with an empty environment.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            home: None,
            vars: Some(HashMap::new()),
            parent_pid: None,
        }
    }

    #[must_use]
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Set an environment variable. Only meaningful for isolated contexts.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.get_or_insert_with(HashMap::new).insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_parent_pid(mut self, pid: u32) -> Self {
        self.parent_pid = Some(pid);
        self
    }

    /// Resolve an absolute system path such as `/proc/uptime`.
    #[must_use]
    pub fn path(&self, absolute: impl AsRef<Path>) -> PathBuf {
        let absolute = absolute.as_ref();
        let relative = absolute.strip_prefix("/").unwrap_or(absolute);
        self.root.join(relative)
    }

    /// Resolve a path relative to the user's home directory.
    #[must_use]
    pub fn home_path(&self, relative: impl AsRef<Path>) -> Option<PathBuf> {
        self.home.as_ref().map(|home| home.join(relative))
    }

    /// Look up an environment variable; empty values count as unset.
    #[must_use]
    pub fn env(&self, name: &str) -> Option<String> {
        let value = match &self.vars {
            Some(vars) => vars.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// PID of the process that started us.
    #[must_use]
    pub fn parent_pid(&self) -> u32 {
        self.parent_pid.unwrap_or_else(std::os::unix::process::parent_id)
    }
}

impl Default for CollectContext {
    fn default() -> Self {
        Self::system()
    }
}
