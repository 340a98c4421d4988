//! Test utilities for fastfetch
//!
//! Collectors read everything through a [`CollectContext`], so tests build a
//! throwaway directory tree that looks like the parts of `/proc`, `/sys` and
//! `/etc` a collector needs and point a context at it.
//!
//! # Example
//!
//! ```rust,ignore
//! use fastfetch::modules::Collector;
//! use fastfetch::modules::kernel::KernelCollector;
//! use fastfetch::test_utils::FakeRoot;
//!
//! let root = FakeRoot::new();
//! root.write("proc/sys/kernel/osrelease", "6.1.0\n");
//!
//! let out = KernelCollector.collect(&root.context()).unwrap();
//! assert_eq!(out[0].value, "6.1.0");
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::modules::CollectContext;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, tests stay silent.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// A temporary directory standing in for `/`.
///
/// The home directory of [`FakeRoot::context`] is `<root>/home`. The tree is
/// removed when the value is dropped.
#[derive(Debug)]
pub struct FakeRoot {
    dir: TempDir,
}

impl FakeRoot {
    /// Create an empty root. Also sets up test logging from `RUST_LOG`.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        init_test_logging(None);
        Self {
            dir: TempDir::new().expect("Failed to create fake root"),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `relative`, creating parent directories.
    ///
    /// # Panics
    ///
    /// Panics on any I/O error.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Create the directory `relative` and its parents.
    ///
    /// # Panics
    ///
    /// Panics on any I/O error.
    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(&path).expect("Failed to create fixture directory");
        path
    }

    /// A context rooted here, with an empty environment.
    #[must_use]
    pub fn context(&self) -> CollectContext {
        CollectContext::with_root(self.dir.path()).with_home(self.dir.path().join("home"))
    }
}

impl Default for FakeRoot {
    fn default() -> Self {
        Self::new()
    }
}
