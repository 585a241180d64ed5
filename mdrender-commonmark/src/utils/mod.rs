use std::collections::HashSet;

use comrak::nodes::{AstNode, NodeValue};
use regex::Regex;

/// Title used when a document has no top-level heading line.
pub const FALLBACK_TITLE: &str = "Markdown Preview";

/// Slugify heading text for use as an anchor ID.
///
/// Lower-cases the trimmed text, collapses every whitespace run into a single
/// hyphen, then drops anything that is not an ASCII letter, digit, underscore
/// or hyphen.
#[must_use]
pub fn slugify(text: &str) -> String {
  let lowered = text.trim().to_lowercase();
  let mut slug = String::with_capacity(lowered.len());
  let mut in_whitespace = false;

  for c in lowered.chars() {
    if c.is_whitespace() {
      if !in_whitespace {
        slug.push('-');
      }
      in_whitespace = true;
      continue;
    }
    in_whitespace = false;
    if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
      slug.push(c);
    }
  }

  slug
}

/// Make `slug` unique against the slugs already handed out in this document.
///
/// The first occurrence keeps the bare slug; later ones get `-1`, `-2`, ...
/// skipping any suffix that is itself already taken.
pub fn unique_slug(slug: String, seen: &mut HashSet<String>) -> String {
  let mut candidate = slug.clone();
  let mut index = 1;
  while seen.contains(&candidate) {
    candidate = format!("{slug}-{index}");
    index += 1;
  }
  seen.insert(candidate.clone());
  candidate
}

/// Find the text of the first `# Title` line in the source.
///
/// Only a single `#` followed by whitespace counts, so `## Section` and
/// `#hashtag` lines are skipped.
#[must_use]
pub fn find_title(content: &str) -> Option<&str> {
  content.lines().find_map(|line| {
    let rest = line.strip_prefix('#')?;
    if !rest.starts_with([' ', '\t']) {
      return None;
    }
    let text = rest.trim();
    (!text.is_empty()).then_some(text)
  })
}

/// Page title for the source document, or [`FALLBACK_TITLE`].
#[must_use]
pub fn extract_title(content: &str) -> String {
  find_title(content).unwrap_or(FALLBACK_TITLE).to_string()
}

/// Extract all inline text from a node, descending into inline containers.
pub fn extract_inline_text<'a>(node: &'a AstNode<'a>) -> String {
  let mut text = String::new();
  for child in node.children() {
    match &child.data.borrow().value {
      NodeValue::Text(t) => text.push_str(t),
      NodeValue::Code(t) => text.push_str(&t.literal),
      NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
      NodeValue::Link(..)
      | NodeValue::Emph
      | NodeValue::Strong
      | NodeValue::Strikethrough => text.push_str(&extract_inline_text(child)),
      _ => {},
    }
  }
  text
}

/// Create a regex that never matches anything.
///
/// Used as a fallback when a static pattern fails to compile, so callers can
/// degrade to a no-op instead of panicking.
#[must_use]
pub fn never_matching_regex() -> Regex {
  #[allow(
    clippy::expect_used,
    reason = "This pattern is guaranteed to be valid"
  )]
  Regex::new(r"[^\s\S]").expect("regex pattern [^\\s\\S] should always compile")
}
