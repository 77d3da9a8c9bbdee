//! End-to-end runs of the `folio` binary against the fixture content.
//!
//! Each test copies `fixtures/content/` into its own temp directory so the
//! binary can be pointed at mutated content without touching the fixtures.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// A temp dir holding `content/` (the fixtures) and room for `dist/`.
fn workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let content = tmp.path().join("content");
    fs::create_dir_all(&content).unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, &content).unwrap();
    tmp
}

fn folio(tmp: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--source")
        .arg(tmp.path().join("content"))
        .arg("--output")
        .arg(tmp.path().join("dist"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn check_accepts_fixture_content() {
    let tmp = workspace();
    let out = folio(&tmp, &["check"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let text = stdout(&out);
    assert!(text.contains("content.json"));
    assert!(text.contains("site-content.json"));
    assert!(text.contains("Content is valid"));
}

#[test]
fn build_writes_every_page() {
    let tmp = workspace();
    let out = folio(&tmp, &["build"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let dist = tmp.path().join("dist");
    for page in [
        "index.html",
        "home/index.html",
        "projects/index.html",
        "resume/index.html",
        "lab/index.html",
        "404.html",
        "favicon.svg",
    ] {
        assert!(dist.join(page).is_file(), "missing {page}");
    }

    let index = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(index.starts_with("<!DOCTYPE html>"));
    assert!(index.contains("id=\"selected-work\""));
    assert!(index.contains("--section-gap: 5rem"));
}

#[test]
fn pages_lists_slugs_in_document_order() {
    let tmp = workspace();
    let out = folio(&tmp, &["pages"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let text = stdout(&out);
    let positions: Vec<usize> = ["home", "projects", "resume", "lab"]
        .iter()
        .map(|slug| {
            text.find(&format!("{slug} - "))
                .unwrap_or_else(|| panic!("{slug} not listed in:\n{text}"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn show_prints_known_page() {
    let tmp = workspace();
    let out = folio(&tmp, &["show", "resume"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).contains("countries-slideshow"));
}

#[test]
fn show_unknown_page_fails() {
    let tmp = workspace();
    let out = folio(&tmp, &["show", "missing"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("missing: not found"));
}

#[test]
fn invalid_content_fails_with_field_path() {
    let tmp = workspace();
    let path = tmp.path().join("content/content.json");
    let mut doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    doc["sections"][1]
        .as_object_mut()
        .unwrap()
        .remove("title");
    fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();

    let out = folio(&tmp, &["build"]);
    assert!(!out.status.success());
    let err = stderr(&out);
    assert!(err.contains("sections[1]"), "stderr: {err}");
    assert!(err.contains("title"), "stderr: {err}");
    assert!(!tmp.path().join("dist/index.html").exists());
}

#[test]
fn gen_config_prints_stock_config() {
    let tmp = workspace();
    let out = folio(&tmp, &["gen-config"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("[layout]"));
    assert!(text.contains("[colors.light]"));
}
