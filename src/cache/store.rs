//! Per-module cache files on disk.
//!
//! Each module owns two sibling files under the cache directory:
//! `<Module>.ffcv` with rendered values and `<Module>.ffcs` with the raw
//! arguments. Both are truncated and rewritten whenever a module is collected
//! fresh with saving enabled. They are never patched in place.
//!
//! Every I/O failure in this module degrades to a cache miss or a skipped
//! write. A broken cache never stops a module from being shown.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::codec::{self, CachedInstance};
use super::version;
use crate::constants::{APP_DIR_NAME, SPLIT_CACHE_EXTENSION, VALUE_CACHE_EXTENSION};
use crate::format::FormatArg;

/// Handle to the cache directory, resolved once per run.
///
/// A store without a directory is disabled: reads always miss and writers
/// discard everything.
#[derive(Debug, Clone, Default)]
pub struct CacheStore {
    dir: Option<PathBuf>,
    recache: bool,
}

impl CacheStore {
    /// Use `dir` as the cache directory. The directory is not created.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            recache: false,
        }
    }

    /// A store that never reads or writes anything.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            dir: None,
            recache: false,
        }
    }

    /// Resolve the cache directory and make sure it exists.
    ///
    /// `override_dir` wins over the platform cache root
    /// (`$XDG_CACHE_HOME/fastfetch` or `~/.cache/fastfetch` on Linux). If no
    /// directory can be determined or created the store is disabled.
    #[must_use]
    pub fn resolve(override_dir: Option<&Path>) -> Self {
        let dir = match override_dir {
            Some(dir) => Some(dir.to_path_buf()),
            None => dirs::cache_dir().map(|root| root.join(APP_DIR_NAME)),
        };

        let Some(dir) = dir else {
            tracing::debug!("No cache directory available, caching disabled");
            return Self::disabled();
        };

        match fs::create_dir_all(&dir) {
            Ok(()) => {
                tracing::debug!("Using cache directory {}", dir.display());
                Self::new(dir)
            }
            Err(err) => {
                tracing::debug!(
                    "Failed to create cache directory {}: {}, caching disabled",
                    dir.display(),
                    err
                );
                Self::disabled()
            }
        }
    }

    /// The cache directory, if caching is possible at all.
    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Whether reads are bypassed for this run.
    #[must_use]
    pub const fn recache(&self) -> bool {
        self.recache
    }

    pub fn set_recache(&mut self, recache: bool) {
        self.recache = recache;
    }

    /// Check the version stamp and force a recache if it is stale.
    ///
    /// Returns `true` when the stamp did not match.
    pub fn validate_version(&mut self, current_version: &str) -> bool {
        let stale = version::validate(self, current_version);
        if stale {
            self.recache = true;
        }
        stale
    }

    /// Path of the rendered-value file for `module`.
    #[must_use]
    pub fn value_path(&self, module: &str) -> Option<PathBuf> {
        self.module_path(module, VALUE_CACHE_EXTENSION)
    }

    /// Path of the split-argument file for `module`.
    #[must_use]
    pub fn split_path(&self, module: &str) -> Option<PathBuf> {
        self.module_path(module, SPLIT_CACHE_EXTENSION)
    }

    fn module_path(&self, module: &str, extension: &str) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(format!("{module}.{extension}")))
    }

    /// Open both cache files of `module` for writing, truncating them.
    ///
    /// Either file may fail to open; writes to that side are then skipped.
    #[must_use]
    pub fn open_write(&self, module: &str) -> CacheWriter {
        CacheWriter {
            module: module.to_string(),
            value: self.value_path(module).and_then(|p| create(&p)),
            split: self.split_path(module).and_then(|p| create(&p)),
            value_buf: Vec::new(),
            split_buf: Vec::new(),
        }
    }

    /// Read all rendered-value instances of `module`.
    ///
    /// `None` means a miss: recache is set, the file is missing or unreadable,
    /// or it holds no instances.
    #[must_use]
    pub fn read_values(&self, module: &str) -> Option<Vec<CachedInstance<String>>> {
        let content = self.read(self.value_path(module)?)?;
        let instances = codec::decode_values(&content);
        (!instances.is_empty()).then_some(instances)
    }

    /// Read all split-argument instances of `module`, `arity` fields each.
    #[must_use]
    pub fn read_split(
        &self,
        module: &str,
        arity: usize,
    ) -> Option<Vec<CachedInstance<Vec<String>>>> {
        let content = self.read(self.split_path(module)?)?;
        let instances = codec::decode_split(&content, arity);
        (!instances.is_empty()).then_some(instances)
    }

    fn read(&self, path: PathBuf) -> Option<Vec<u8>> {
        if self.recache {
            return None;
        }

        match fs::read(&path) {
            Ok(content) => Some(content),
            Err(err) => {
                tracing::debug!("Cache miss for {}: {}", path.display(), err);
                None
            }
        }
    }
}

fn create(path: &Path) -> Option<File> {
    match File::create(path) {
        Ok(file) => Some(file),
        Err(err) => {
            tracing::debug!("Failed to open cache file {}: {}", path.display(), err);
            None
        }
    }
}

/// Write handle for one module's cache file pair.
///
/// Instances are buffered in memory and each file is written in one go when
/// the writer is closed or dropped. A file whose write fails is truncated to
/// empty, so a module never reads back a partial instance list.
#[derive(Debug)]
pub struct CacheWriter {
    module: String,
    value: Option<File>,
    split: Option<File>,
    value_buf: Vec<u8>,
    split_buf: Vec<u8>,
}

impl CacheWriter {
    /// Append one instance: `value` to the value file, `args` to the split
    /// file.
    pub fn append(&mut self, value: &str, args: &[FormatArg]) {
        if self.value.is_some() {
            codec::encode_value(&mut self.value_buf, value);
        }
        if self.split.is_some() {
            codec::encode_split(&mut self.split_buf, args);
        }
    }

    /// Whether at least one of the two files is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.value.is_some() || self.split.is_some()
    }

    /// Write out and release both files.
    pub fn close(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        write_side(self.value.take(), &self.value_buf, &self.module, VALUE_CACHE_EXTENSION);
        write_side(self.split.take(), &self.split_buf, &self.module, SPLIT_CACHE_EXTENSION);
        self.value_buf.clear();
        self.split_buf.clear();
    }
}

impl Drop for CacheWriter {
    fn drop(&mut self) {
        self.finish();
    }
}

fn write_side(side: Option<File>, bytes: &[u8], module: &str, extension: &str) {
    let Some(mut file) = side else {
        return;
    };

    if let Err(err) = file.write_all(bytes).and_then(|()| file.flush()) {
        tracing::debug!("Failed to write {module}.{extension}: {err}");
        if let Err(err) = file.set_len(0) {
            tracing::debug!("Failed to truncate {module}.{extension}: {err}");
        }
    }
}
