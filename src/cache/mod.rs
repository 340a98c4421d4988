//! On-disk cache of module results.
//!
//! A second run of the program can skip collection entirely: every cacheable
//! module writes what it printed, and what it was printed from, into a pair of
//! files under `~/.cache/fastfetch/`. A later run either serves the module
//! fully from those files or recollects it; there is no partial hit.
//!
//! # Modules
//!
//! - [`codec`] - NUL-delimited record layout and instance numbering
//! - [`store`] - [`CacheStore`] and [`CacheWriter`], the file pair per module
//! - [`version`] - version stamp that invalidates the whole cache
//!
//! # Layout
//!
//! ```text
//! ~/.cache/fastfetch/
//! ├── cacheversion.ffv   # program version that wrote the cache
//! ├── Battery.ffcv       # rendered lines, one per instance
//! └── Battery.ffcs       # raw arguments, `arity` fields per instance
//! ```
//!
//! The split file is what makes it possible to change a module's format
//! string and still answer from cache: the stored arguments are rendered again
//! with the new template.

pub mod codec;
pub mod store;
pub mod version;

pub use codec::CachedInstance;
pub use store::{CacheStore, CacheWriter};
