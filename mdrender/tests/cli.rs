#![allow(clippy::unwrap_used, reason = "Fine in tests")]
use std::{
  fs,
  io::Write,
  process::{Command, Output, Stdio},
};

use tempfile::TempDir;

fn mdrender(args: &[&str], stdin: &str) -> Output {
  let mut child = Command::new(env!("CARGO_BIN_EXE_mdrender"))
    .args(args)
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .unwrap();
  child
    .stdin
    .take()
    .unwrap()
    .write_all(stdin.as_bytes())
    .unwrap();
  child.wait_with_output().unwrap()
}

#[test]
fn test_renders_stdin_to_stdout() {
  let output = mdrender(&[], "# Hello\n\nWorld\n");
  assert!(output.status.success());
  let page = String::from_utf8(output.stdout).unwrap();
  assert!(page.starts_with("<!DOCTYPE html>"));
  assert!(page.contains("<title>Hello</title>"));
  assert!(page.contains("<p>World</p>"));
}

#[test]
fn test_config_override_and_files() {
  let dir = TempDir::new().unwrap();
  let config = dir.path().join("user.json");
  let input = dir.path().join("doc.md");
  let output = dir.path().join("out/page.html");
  fs::write(&config, r##"{"theme": {"background": "#123456"}, "features": {"mermaid": false}}"##).unwrap();
  fs::write(&input, "# Doc\n").unwrap();

  let result = mdrender(
    &[
      config.to_str().unwrap(),
      "--input",
      input.to_str().unwrap(),
      "--output",
      output.to_str().unwrap(),
    ],
    "",
  );
  assert!(result.status.success());
  assert!(result.stdout.is_empty());

  let page = fs::read_to_string(&output).unwrap();
  assert!(page.contains("--background: #123456;"));
  assert!(!page.contains("mermaid.min.js"));
}

#[test]
fn test_broken_override_is_not_fatal() {
  let dir = TempDir::new().unwrap();
  let config = dir.path().join("broken.json");
  fs::write(&config, "{{{").unwrap();

  let output = mdrender(&[config.to_str().unwrap()], "# Doc\n");
  assert!(output.status.success());
  let page = String::from_utf8(output.stdout).unwrap();
  assert!(page.contains("mermaid.min.js"));
}

#[test]
fn test_unreadable_template_is_fatal() {
  let dir = TempDir::new().unwrap();
  let missing = dir.path().join("missing.html");
  let output = mdrender(&["--template", missing.to_str().unwrap()], "# Doc\n");
  assert!(!output.status.success());
  assert!(output.stdout.is_empty());
}

#[test]
fn test_unreadable_defaults_are_fatal() {
  let dir = TempDir::new().unwrap();
  let missing = dir.path().join("defaults.json");
  let output = mdrender(&["--defaults", missing.to_str().unwrap()], "# Doc\n");
  assert!(!output.status.success());
}

#[test]
fn test_export_subcommand() {
  let dir = TempDir::new().unwrap();
  let out = dir.path().join("tpl");
  let output = mdrender(&["export", "-o", out.to_str().unwrap()], "");
  assert!(output.status.success());
  assert!(out.join("page.html").is_file());
  assert!(out.join("config.json").is_file());
}
