//! Cache version stamp.
//!
//! The cache directory carries `cacheversion.ffv` holding the version of the
//! program that last wrote it. A missing or different stamp means cached
//! records may have been produced by other code, so every module is
//! recollected for this run and the stamp is rewritten.

use std::fs;

use super::CacheStore;
use crate::constants::CACHE_VERSION_FILE;

/// Compare the stamp in `store`'s directory with `current_version`.
///
/// Returns `true` when a recache is required. The stamp is rewritten in that
/// case; failing to write it only means the check fires again next run.
pub fn validate(store: &CacheStore, current_version: &str) -> bool {
    let Some(dir) = store.dir() else {
        return false;
    };

    let path = dir.join(CACHE_VERSION_FILE);
    let stamp = fs::read_to_string(&path).unwrap_or_default();

    if stamp.trim_end_matches(['\n', ' ']) == current_version {
        return false;
    }

    tracing::debug!(
        "Cache version stamp {:?} does not match {}, forcing recache",
        stamp,
        current_version
    );

    if let Err(err) = fs::write(&path, current_version) {
        tracing::debug!("Failed to write {}: {}", path.display(), err);
    }

    true
}
