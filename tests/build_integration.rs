//! Integration tests for the `deckdown` CLI.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn deckdown_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_deckdown"))
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn temp_out(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("deckdown-build-test").join(name);
    // Clean up from previous runs
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn build_mirrors_the_input_tree() {
    let out = temp_out("tree");
    let status = Command::new(deckdown_bin())
        .args([
            "build",
            fixture("decks").to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
            "--quiet",
        ])
        .status()
        .expect("failed to run deckdown build");

    assert!(status.success(), "deckdown build should succeed");
    assert!(out.join("intro.html").exists(), "intro.html should exist");
    assert!(
        out.join("extras/closing.html").exists(),
        "nested decks should build to nested output paths"
    );

    let _ = fs::remove_dir_all(&out);
}

#[test]
fn build_output_contains_wrapped_slides() {
    let out = temp_out("wrapped");
    let status = Command::new(deckdown_bin())
        .args([
            "build",
            fixture("decks").to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
            "--quiet",
        ])
        .status()
        .expect("failed to run deckdown build");
    assert!(status.success());

    let html = fs::read_to_string(out.join("intro.html")).unwrap();
    assert!(
        html.starts_with("Speaker notes live up here, untouched.\n"),
        "preamble should pass through verbatim"
    );
    assert!(html.contains("<slidem-slide><h1>Welcome</h1>"), "got: {html}");
    assert!(
        html.contains(r#"<section effect="fade"><h1>Agenda</h1>"#),
        "got: {html}"
    );
    assert!(html.contains("<em>emphasis</em>"), "markdown should be rendered");

    let index = html.find("Welcome").unwrap();
    let agenda = html.find("Agenda").unwrap();
    assert!(index < agenda, "slides must keep input order");

    let _ = fs::remove_dir_all(&out);
}

#[test]
fn render_writes_a_single_file() {
    let out = temp_out("render");
    fs::create_dir_all(&out).unwrap();
    let out_file = out.join("intro.html");

    let status = Command::new(deckdown_bin())
        .args([
            "render",
            fixture("decks/intro.md").to_str().unwrap(),
            "--output",
            out_file.to_str().unwrap(),
        ])
        .status()
        .expect("failed to run deckdown render");

    assert!(status.success());
    let html = fs::read_to_string(&out_file).unwrap();
    assert!(html.contains("</slidem-slide>"), "got: {html}");

    let _ = fs::remove_dir_all(&out);
}

#[test]
fn split_emits_json_fragments() {
    let output = Command::new(deckdown_bin())
        .args(["split", fixture("decks/intro.md").to_str().unwrap()])
        .output()
        .expect("failed to run deckdown split");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("split should emit valid JSON");

    assert_eq!(json["slides"].as_array().unwrap().len(), 2);
    assert_eq!(json["slides"][0]["tag_name"], "slidem-slide");
    assert_eq!(json["slides"][1]["tag_name"], "section");
    assert!(
        json["preamble"]
            .as_str()
            .unwrap()
            .starts_with("Speaker notes"),
    );
}

#[test]
fn custom_default_tag_flag() {
    let output = Command::new(deckdown_bin())
        .args([
            "render",
            fixture("decks/extras/closing.md").to_str().unwrap(),
            "--tag",
            "article",
        ])
        .output()
        .expect("failed to run deckdown render");

    assert!(output.status.success());
    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.contains("<article><h1>Thanks</h1>"), "got: {html}");
}
