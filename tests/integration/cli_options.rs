//! Command-line options and reference output.

use predicates::prelude::*;

use crate::TestEnv;

#[test]
fn test_custom_value() {
    let env = TestEnv::new();
    env.command()
        .args(["--structure", "Editor", "--set", "editor=helix"])
        .assert()
        .success()
        .stdout("Editor: helix\n");
}

#[test]
fn test_custom_value_shadows_module() {
    let env = TestEnv::new();
    env.command()
        .args(["--structure", "kernel", "--set", "Kernel=hand-written"])
        .assert()
        .success()
        .stdout("kernel: hand-written\n");
}

#[test]
fn test_separator_and_key_format() {
    let env = TestEnv::new();
    env.command()
        .args([
            "--structure",
            "Editor",
            "--set",
            "editor=helix",
            "--separator",
            " -> ",
            "--key",
            "editor=[ed]",
        ])
        .assert()
        .success()
        .stdout("[ed] -> helix\n");
}

#[test]
fn test_format_option() {
    let env = TestEnv::new();
    env.command()
        .args(["--structure", "Kernel", "--format", "kernel={{{2}}}"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^Kernel: \{.+\}\n$").unwrap());
}

#[test]
fn test_unknown_module_with_errors() {
    let env = TestEnv::new();
    env.command()
        .args(["--structure", "Bogus", "--show-errors"])
        .assert()
        .success()
        .stdout("Bogus: <no implementation provided>\n");
}

#[test]
fn test_unknown_module_hidden_by_default() {
    let env = TestEnv::new();
    env.command().args(["--structure", "Bogus"]).assert().success().stdout("");
}

#[test]
fn test_invalid_set() {
    let env = TestEnv::new();
    env.command()
        .args(["--set", "novalue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value 'novalue' for --set"));
}

#[test]
fn test_invalid_color() {
    let env = TestEnv::new();
    env.command()
        .args(["--color", "chartreuse-ish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chartreuse-ish"));
}

#[test]
fn test_list_modules() {
    let env = TestEnv::new();
    env.command()
        .arg("--list-modules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kernel\n"))
        .stdout(predicate::str::contains("Battery\n"));
}

#[test]
fn test_help_format() {
    let env = TestEnv::new();
    env.command()
        .arg("--help-format")
        .assert()
        .success()
        .stdout(predicate::str::contains("Memory:\n  {1}: Used memory (MiB)\n"));
}

#[test]
fn test_version_flag() {
    let env = TestEnv::new();
    env.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(crate::VERSION));
}
