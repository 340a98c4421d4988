//! Integration test suite for fastfetch
//!
//! These tests run the compiled binary against a temporary cache directory
//! and config file, so they never touch the user's real cache. Module values
//! come from the machine running the tests; assertions only rely on values
//! the tests planted in the cache or on modules that can't fail on Linux.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cache_behavior**: cache hits, writes, version stamp invalidation
//! - **cli_options**: option precedence, custom values, reference output
//! - **config**: config file loading and errors

mod cache_behavior;
mod cli_options;
mod config;

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Version written to the cache stamp by the binary under test.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// An isolated cache directory and config file for one test.
pub struct TestEnv {
    temp: TempDir,
}

impl TestEnv {
    /// Env with an empty config file.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp.path().join("cache")).expect("Failed to create cache dir");
        let env = Self { temp };
        env.write_config("");
        env
    }

    /// Env with a config file containing `config`.
    pub fn with_config(config: &str) -> Self {
        let env = Self::new();
        env.write_config(config);
        env
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.temp.path().join("cache")
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp.path().join("config.toml")
    }

    pub fn write_config(&self, config: &str) {
        fs::write(self.config_path(), config).expect("Failed to write config");
    }

    /// Write a cache file, bytes as given.
    pub fn plant(&self, file: &str, content: &[u8]) {
        fs::write(self.cache_dir().join(file), content).expect("Failed to plant cache file");
    }

    /// Write a version stamp matching the binary.
    pub fn stamp_current(&self) {
        self.plant("cacheversion.ffv", VERSION.as_bytes());
    }

    pub fn read_cache(&self, file: &str) -> Option<Vec<u8>> {
        fs::read(self.cache_dir().join(file)).ok()
    }

    pub fn cache_exists(&self, file: &str) -> bool {
        self.cache_dir().join(file).exists()
    }

    /// The binary with cache and config pointed into this env.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("fastfetch").expect("Failed to find fastfetch binary");
        cmd.env("FASTFETCH_CACHE_DIR", self.cache_dir())
            .env("FASTFETCH_CONFIG", self.config_path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run with `args` and return stdout, asserting success.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self.command().args(args).assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("stdout is not UTF-8")
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }
}
