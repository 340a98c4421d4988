//! Config file handling through the binary.

use predicates::prelude::*;

use crate::TestEnv;

#[test]
fn test_print_default_config() {
    let env = TestEnv::new();
    env.command()
        .arg("--print-default-config")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# fastfetch configuration"))
        .stdout(predicate::str::contains("cache_save = true"));
}

#[test]
fn test_printed_default_config_loads() {
    let env = TestEnv::new();
    let output = env.command().arg("--print-default-config").output().unwrap();
    let mut config = String::from_utf8(output.stdout).unwrap();
    config = config.replace(
        "structure = \"Title:Separator:OS:Host:Kernel:Uptime:Packages:Shell:Terminal:Theme:Font:CPU:Memory:Battery:Locale:Break:Colors\"",
        "structure = \"Editor\"",
    );
    config.push_str("editor = \"helix\"\n");
    env.write_config(&config);

    env.command().assert().success().stdout("Editor: helix\n");
}

#[test]
fn test_missing_explicit_config() {
    let env = TestEnv::new();
    env.command()
        .env("FASTFETCH_CONFIG", env.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_invalid_config() {
    let env = TestEnv::with_config("structure = [1, 2]\n");
    env.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration file syntax"));
}

#[test]
fn test_cli_overrides_config() {
    let env = TestEnv::with_config(
        "structure = \"Editor\"\nseparator = \" = \"\n[set]\neditor = \"helix\"\n",
    );
    env.command().assert().success().stdout("Editor = helix\n");
    env.command()
        .args(["--separator", ": "])
        .assert()
        .success()
        .stdout("Editor: helix\n");
}

#[test]
fn test_config_cache_dir() {
    let env = TestEnv::new();
    let dir = env.path().join("from-config");
    env.write_config(&format!("structure = \"Kernel\"\ncache_dir = \"{}\"\n", dir.display()));

    env.command().env_remove("FASTFETCH_CACHE_DIR").assert().success();
    assert!(dir.join("Kernel.ffcv").exists());
}
