//! Cache files written and served by the binary.

use crate::{TestEnv, VERSION};

const KERNEL_ONLY: &str = "structure = \"Kernel\"\n";

/// A fresh run writes the value file and the version stamp
#[test]
fn test_first_run_populates_cache() {
    let env = TestEnv::with_config(KERNEL_ONLY);

    let stdout = env.run(&[]);
    let value = stdout
        .strip_prefix("Kernel: ")
        .and_then(|rest| rest.strip_suffix('\n'))
        .expect("unexpected kernel line");

    let mut expected = value.as_bytes().to_vec();
    expected.push(0);
    assert_eq!(env.read_cache("Kernel.ffcv"), Some(expected));
    assert!(env.cache_exists("Kernel.ffcs"));
    assert_eq!(env.read_cache("cacheversion.ffv"), Some(VERSION.as_bytes().to_vec()));
}

/// A second run prints what the first one cached, byte for byte
#[test]
fn test_second_run_is_identical() {
    let env = TestEnv::with_config(KERNEL_ONLY);

    let first = env.run(&[]);
    let second = env.run(&[]);
    assert_eq!(first, second);
}

/// A valid stamp makes planted records authoritative
#[test]
fn test_cached_value_is_served() {
    let env = TestEnv::with_config(KERNEL_ONLY);
    env.stamp_current();
    env.plant("Kernel.ffcv", b"planted-kernel\0");

    assert_eq!(env.run(&[]), "Kernel: planted-kernel\n");
}

/// A stamp with surrounding whitespace still matches
#[test]
fn test_stamp_trailing_newline() {
    let env = TestEnv::with_config(KERNEL_ONLY);
    env.plant("cacheversion.ffv", format!("{VERSION}\n").as_bytes());
    env.plant("Kernel.ffcv", b"planted-kernel\0");

    assert_eq!(env.run(&[]), "Kernel: planted-kernel\n");
}

/// A foreign stamp hides every record and is replaced
#[test]
fn test_version_mismatch_invalidates() {
    let env = TestEnv::with_config(KERNEL_ONLY);
    env.plant("cacheversion.ffv", b"0.0.0-old");
    env.plant("Kernel.ffcv", b"planted-kernel\0");

    let stdout = env.run(&[]);
    assert!(stdout.starts_with("Kernel: "));
    assert!(!stdout.contains("planted-kernel"));
    assert_eq!(env.read_cache("cacheversion.ffv"), Some(VERSION.as_bytes().to_vec()));
    assert_ne!(env.read_cache("Kernel.ffcv"), Some(b"planted-kernel\0".to_vec()));
}

/// A missing stamp counts as a mismatch
#[test]
fn test_missing_stamp_invalidates() {
    let env = TestEnv::with_config(KERNEL_ONLY);
    env.plant("Kernel.ffcv", b"planted-kernel\0");

    assert!(!env.run(&[]).contains("planted-kernel"));
    assert!(env.cache_exists("cacheversion.ffv"));
}

/// Split records are re-rendered with the configured format
#[test]
fn test_split_records_rerendered() {
    let env = TestEnv::with_config("structure = \"Kernel\"\n[formats]\nkernel = \"{2} on {1}\"\n");
    env.stamp_current();
    env.plant("Kernel.ffcs", b"Linux\x006.6.6-planted\x00#1 SMP\x00");

    assert_eq!(env.run(&[]), "Kernel: 6.6.6-planted on Linux\n");
}

/// Several instances keep their order and get numbered keys
#[test]
fn test_multiple_instances_from_cache() {
    let env = TestEnv::with_config(
        "structure = \"Battery\"\n[formats]\nbattery = \"{1} {2} {4}% {5}\"\n",
    );
    env.stamp_current();
    env.plant(
        "Battery.ffcs",
        b"SONY\0MODEL\0Li-ion\080\0Charging\0ACME\0X1\0Li-poly\055\0Discharging\0",
    );

    assert_eq!(
        env.run(&[]),
        "Battery 1: SONY MODEL 80% Charging\nBattery 2: ACME X1 55% Discharging\n"
    );
}

/// `--recache` ignores planted records and saves the fresh ones
#[test]
fn test_recache_flag_refreshes() {
    let env = TestEnv::with_config(KERNEL_ONLY);
    env.stamp_current();
    env.plant("Kernel.ffcv", b"planted-kernel\0");

    let stdout = env.run(&["--recache"]);
    assert!(!stdout.contains("planted-kernel"));
    assert_ne!(env.read_cache("Kernel.ffcv"), Some(b"planted-kernel\0".to_vec()));
}

/// Display options on the command line bypass the cache and save nothing
#[test]
fn test_display_options_bypass_cache() {
    let env = TestEnv::new();
    env.stamp_current();
    env.plant("Kernel.ffcv", b"planted-kernel\0");

    let stdout = env.run(&["--structure", "Kernel"]);
    assert!(!stdout.contains("planted-kernel"));
    assert_eq!(env.read_cache("Kernel.ffcv"), Some(b"planted-kernel\0".to_vec()));
}

/// `--recache false` restores caching despite display options
#[test]
fn test_recache_false_keeps_cache() {
    let env = TestEnv::new();
    env.stamp_current();
    env.plant("Kernel.ffcv", b"planted-kernel\0");

    let stdout = env.run(&["--structure", "Kernel", "--recache", "false"]);
    assert_eq!(stdout, "Kernel: planted-kernel\n");
}

/// Uncacheable modules never get cache files
#[test]
fn test_uptime_not_cached() {
    let env = TestEnv::with_config("structure = \"Uptime:Memory\"\n");
    env.run(&[]);
    assert!(!env.cache_exists("Uptime.ffcv"));
    assert!(!env.cache_exists("Memory.ffcv"));
}

/// An unwritable cache directory does not break the run
#[test]
fn test_cache_dir_is_a_file() {
    let env = TestEnv::with_config(KERNEL_ONLY);
    let blocker = env.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    env.command()
        .env("FASTFETCH_CACHE_DIR", &blocker)
        .assert()
        .success()
        .stdout(predicates::str::starts_with("Kernel: "));
}
