//! End-to-end tests for the `backstrap` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `backstrap` command running inside `dir` with a clean environment:
/// no user config file, no inherited overrides.
fn backstrap(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("backstrap").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("BACKSTRAP_INSTALL__PROGRAM")
        .env_remove("BACKSTRAP_INSTALL__ARGS")
        .env_remove("BACKSTRAP_INSTALL__SKIP")
        .env_remove("BACKSTRAP_TEMPLATE__PATH")
        .env("NO_COLOR", "1");
    cmd
}

fn manifest_name(project: &Path) -> String {
    let raw = fs::read_to_string(project.join("package.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    json["name"].as_str().unwrap().to_string()
}

#[test]
fn help_flag_succeeds() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--skip-install"));
}

#[test]
fn version_flag_succeeds() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[cfg(unix)]
#[test]
fn generates_project_and_runs_installer() {
    let temp = TempDir::new().unwrap();

    backstrap(temp.path())
        .env("BACKSTRAP_INSTALL__PROGRAM", "true")
        .arg("MyApi")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating backend project"))
        .stdout(predicate::str::contains("Installing dependencies"))
        .stdout(predicate::str::contains("Backend ready to go!"))
        .stdout(predicate::str::contains("cd MyApi"))
        .stdout(predicate::str::contains("true run dev"));

    let project = temp.path().join("MyApi");
    assert!(project.join("src/index.js").is_file());
    assert!(project.join("src/routes").is_dir());
    assert_eq!(manifest_name(&project), "myapi");
}

#[test]
fn manifest_is_two_space_indented() {
    let temp = TempDir::new().unwrap();

    backstrap(temp.path())
        .args(["shop-api", "--skip-install"])
        .assert()
        .success();

    let raw = fs::read_to_string(temp.path().join("shop-api/package.json")).unwrap();
    assert!(raw.starts_with("{\n  \"name\": \"shop-api\""));
    assert!(raw.ends_with("}\n"));
}

#[test]
fn skip_install_prints_install_hint() {
    let temp = TempDir::new().unwrap();

    backstrap(temp.path())
        .args(["demo", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing").not())
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("run dev"));

    assert!(temp.path().join("demo/package.json").is_file());
    assert!(!temp.path().join("demo/node_modules").exists());
}

#[test]
fn skip_install_from_environment() {
    let temp = TempDir::new().unwrap();

    backstrap(temp.path())
        .env("BACKSTRAP_INSTALL__SKIP", "true")
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing").not());
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    backstrap(temp.path())
        .args(["Preview", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("preview"));

    assert!(!temp.path().join("Preview").exists());
}

#[test]
fn custom_template_directory() {
    let temp = TempDir::new().unwrap();
    let tpl = temp.path().join("tpl");
    fs::create_dir_all(tpl.join("lib")).unwrap();
    fs::write(
        tpl.join("package.json"),
        "{\"name\":\"x\",\"version\":\"1.0.0\"}",
    )
    .unwrap();
    fs::write(tpl.join("lib/main.js"), "console.log('hi');\n").unwrap();

    backstrap(temp.path())
        .args(["Custom", "--skip-install", "--template"])
        .arg(&tpl)
        .assert()
        .success();

    let project = temp.path().join("Custom");
    assert_eq!(
        fs::read_to_string(project.join("lib/main.js")).unwrap(),
        "console.log('hi');\n"
    );
    assert_eq!(
        fs::read_to_string(project.join("package.json")).unwrap(),
        "{\n  \"name\": \"custom\",\n  \"version\": \"1.0.0\"\n}\n"
    );
}

#[test]
fn quiet_mode_prints_nothing_on_success() {
    let temp = TempDir::new().unwrap();

    backstrap(temp.path())
        .args(["-q", "silent", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("silent/package.json").is_file());
}

#[test]
fn numeric_no_color_value_is_accepted() {
    let temp = TempDir::new().unwrap();

    backstrap(temp.path())
        .env("NO_COLOR", "1")
        .args(["--dry-run", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("\u{1b}[").not());

    assert!(!temp.path().join("x").exists());
}

#[test]
fn dot_prefixed_name_is_accepted() {
    let temp = TempDir::new().unwrap();

    backstrap(temp.path())
        .args([".Api", "--skip-install"])
        .assert()
        .success();

    assert_eq!(manifest_name(&temp.path().join(".Api")), ".api");
}
