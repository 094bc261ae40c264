//! Tests for filesystem validation against a real project tree.

use libpack_config::{
    BuildConfig, BuildProfile, ConfigError, ConfigValidator, FsValidator, LibraryDescriptor,
    ProjectLayout,
};
use std::fs;
use tempfile::TempDir;

fn scaffold(template: Option<&str>) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    let src = dir.path().join("src");
    fs::create_dir_all(&src).expect("create src");
    fs::write(src.join("plugin.js"), "export default {};").expect("write entry");
    if let Some(name) = template {
        fs::write(src.join(name), "<html></html>").expect("write template");
    }
    dir
}

fn assemble(dir: &TempDir, descriptor: &LibraryDescriptor) -> BuildConfig {
    BuildConfig::assemble(
        BuildProfile::Production,
        descriptor,
        &ProjectLayout::new(dir.path()),
    )
}

#[test]
fn complete_project_passes() {
    let dir = scaffold(Some("index.html"));
    let config = assemble(&dir, &LibraryDescriptor::new("widget-kit"));
    FsValidator.validate(&config).expect("valid project");
}

#[test]
fn pug_template_is_checked_by_extension() {
    let dir = scaffold(Some("index.pug"));
    let config = assemble(
        &dir,
        &LibraryDescriptor::new("widget-kit").with_html_preprocessor("pug"),
    );
    FsValidator.validate(&config).expect("pug template found");
}

#[test]
fn unsupported_preprocessor_surfaces_as_missing_template() {
    let dir = scaffold(Some("index.html"));
    let config = assemble(
        &dir,
        &LibraryDescriptor::new("widget-kit").with_html_preprocessor("haml"),
    );

    let err = FsValidator.validate(&config).unwrap_err();
    match err {
        ConfigError::TemplateNotFound(path) => {
            assert_eq!(path, dir.path().join("src").join("index.haml"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_entry_is_reported_first() {
    let dir = TempDir::new().unwrap();
    let config = assemble(&dir, &LibraryDescriptor::new("widget-kit"));
    let err = FsValidator.validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::EntryNotFound(_)));
}
