//! End-to-end tests for the `libpack` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn project(package_json: &str) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("package.json"), package_json).expect("write package.json");
    dir
}

fn scaffold_sources(root: &Path, template: &str) {
    let src = root.join("src");
    fs::create_dir_all(&src).expect("create src");
    fs::write(src.join("plugin.js"), "export default {};").expect("write entry");
    fs::write(src.join(template), "<html></html>").expect("write template");
}

fn libpack() -> Command {
    let mut cmd = Command::cargo_bin("libpack").expect("binary built");
    cmd.env_remove("NODE_ENV")
        .env_remove("LIBPACK_NAME")
        .env_remove("LIBPACK_HTML_PREPROCESSOR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn config_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("run libpack");
    assert!(output.status.success(), "libpack failed: {output:?}");
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn production_from_node_env() {
    let dir = project(r#"{ "name": "widget-kit" }"#);

    let value = config_json(
        libpack()
            .env("NODE_ENV", "production")
            .arg("config")
            .arg("--root")
            .arg(dir.path()),
    );

    assert_eq!(value["output"]["filename"], "[name].min.js");
    assert_eq!(value["plugins"][0]["options"]["disable"], false);
    assert_eq!(value["plugins"][0]["options"]["filename"], "[name].min.css");
    assert!(value["entry"]["widget-kit"].is_string());
}

#[test]
fn development_without_signal() {
    let dir = project(r#"{ "name": "widget-kit" }"#);

    let value = config_json(libpack().arg("config").arg("--root").arg(dir.path()));

    assert_eq!(value["output"]["filename"], "[name].js");
    assert_eq!(value["plugins"][0]["options"]["disable"], true);
    let chain = value["module"]["rules"][2]["use"]
        .as_array()
        .expect("style chain");
    assert_eq!(chain.len(), 4);
    assert_eq!(chain[0]["loader"], "style-loader");
}

#[test]
fn env_flag_is_case_sensitive() {
    let dir = project(r#"{ "name": "widget-kit" }"#);

    let value = config_json(
        libpack()
            .args(["config", "--env", "Production", "--root"])
            .arg(dir.path()),
    );
    assert_eq!(value["output"]["filename"], "[name].js");
}

#[test]
fn pug_preprocessor_from_package_json() {
    let dir = project(r#"{ "name": "widget-kit", "htmlPreprocessor": "pug" }"#);

    let value = config_json(libpack().arg("config").arg("--root").arg(dir.path()));
    let template = value["plugins"][2]["options"]["template"]
        .as_str()
        .expect("template path");
    assert!(template.ends_with("index.pug"), "template was {template}");
}

#[test]
fn pug_preprocessor_from_environment() {
    let dir = project(r#"{ "name": "widget-kit" }"#);

    let value = config_json(
        libpack()
            .env("LIBPACK_HTML_PREPROCESSOR", "pug")
            .arg("config")
            .arg("--root")
            .arg(dir.path()),
    );
    let template = value["plugins"][2]["options"]["template"]
        .as_str()
        .expect("template path");
    assert!(template.ends_with("index.pug"), "template was {template}");
}

#[test]
fn numeric_name_from_environment() {
    let dir = TempDir::new().unwrap();

    let value = config_json(
        libpack()
            .env("LIBPACK_NAME", "2048")
            .arg("config")
            .arg("--root")
            .arg(dir.path()),
    );
    assert_eq!(value["output"]["library"], "2048");
    assert!(value["entry"]["2048"].is_string());
}

#[test]
fn writes_config_file() {
    let dir = project(r#"{ "name": "widget-kit" }"#);
    let out = dir.path().join("build").join("config.json");

    libpack()
        .arg("config")
        .arg("--compact")
        .arg("--root")
        .arg(dir.path())
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote development configuration"));

    let written: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written["devServer"]["port"], 8080);
}

#[test]
fn missing_name_fails() {
    let dir = project(r#"{ "version": "1.0.0" }"#);

    libpack()
        .arg("config")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No library name found"));
}

#[test]
fn name_flag_supplies_missing_name() {
    let dir = TempDir::new().unwrap();

    let value = config_json(
        libpack()
            .args(["config", "--name", "cli-kit", "--root"])
            .arg(dir.path()),
    );
    assert_eq!(value["output"]["library"], "cli-kit");
}

#[test]
fn check_passes_for_complete_project() {
    let dir = project(r#"{ "name": "widget-kit" }"#);
    scaffold_sources(dir.path(), "index.html");

    libpack()
        .arg("check")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration is valid"));
}

#[test]
fn check_reports_missing_template() {
    let dir = project(r#"{ "name": "widget-kit", "htmlPreprocessor": "pug" }"#);
    scaffold_sources(dir.path(), "index.html");

    libpack()
        .arg("check")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("index.pug"))
        .stderr(predicate::str::contains("1 check(s) failed"));
}

#[test]
fn check_schema_only_ignores_missing_files() {
    let dir = project(r#"{ "name": "widget-kit" }"#);

    libpack()
        .args(["check", "--schema-only", "--root"])
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn missing_root_fails() {
    libpack()
        .args(["config", "--root", "/definitely/not/here/libpack"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
