//! Mermaid diagram blocks.
//!
//! The fenced-code hook wraps diagram sources in a generic code block holding
//! a `<div class="mermaid">` container. Once the whole document has been
//! rendered, [`rewrite_diagram_blocks`] unwraps every such block into the bare
//! `<pre class="mermaid">` element that Mermaid scans for on page load.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::utils::never_matching_regex;

/// Fence language that marks a diagram block.
pub const DIAGRAM_LANGUAGE: &str = "mermaid";

/// Class Mermaid looks for when `startOnLoad` is set.
pub const DIAGRAM_CLASS: &str = "mermaid";

static DIAGRAM_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r#"(?s)<pre><code[^>]*><div class="mermaid">(.*?)</div>\s*</code></pre>"#,
  )
  .unwrap_or_else(|e| {
    log::error!("Failed to compile DIAGRAM_BLOCK_RE regex: {e}");
    never_matching_regex()
  })
});

/// Whether a fence language tag asks for a diagram.
#[must_use]
pub fn is_diagram_language(language: &str) -> bool {
  language == DIAGRAM_LANGUAGE
}

/// Wrap raw diagram source in the intermediate code-block container.
///
/// The source is inserted untouched; Mermaid parses the text itself and
/// would choke on entity-escaped arrows.
#[must_use]
pub fn wrap_diagram_source(language: &str, source: &str) -> String {
  format!(
    "<pre><code class=\"language-{language}\"><div \
     class=\"{DIAGRAM_CLASS}\">{source}</div></code></pre>\n"
  )
}

/// Rewrite every wrapped diagram block into `<pre class="mermaid">`.
///
/// Inner text is copied byte-for-byte. Content outside diagram blocks is left
/// as is.
#[must_use]
pub fn rewrite_diagram_blocks(html: &str) -> String {
  DIAGRAM_BLOCK_RE
    .replace_all(html, |caps: &Captures| {
      format!("<pre class=\"{DIAGRAM_CLASS}\">{}</pre>", &caps[1])
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rewrite_single_block() {
    let source = "graph TD\n  A-->B\n";
    let html = wrap_diagram_source("mermaid", source);
    assert_eq!(
      rewrite_diagram_blocks(&html),
      "<pre class=\"mermaid\">graph TD\n  A-->B\n</pre>\n"
    );
  }

  #[test]
  fn test_rewrite_keeps_surrounding_content() {
    let html = format!(
      "<p>before</p>\n{}<pre><code class=\"language-rust\">fn main() \
       {{}}\n</code></pre>\n{}<p>after</p>\n",
      wrap_diagram_source("mermaid", "graph LR\n  X-->Y\n"),
      wrap_diagram_source("mermaid", "sequenceDiagram\n  A->>B: hi\n"),
    );

    let out = rewrite_diagram_blocks(&html);
    assert!(out.starts_with("<p>before</p>\n<pre class=\"mermaid\">graph LR"));
    assert!(out.contains(
      "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>"
    ));
    assert!(
      out.contains("<pre class=\"mermaid\">sequenceDiagram\n  A->>B: hi\n</pre>")
    );
    assert!(out.ends_with("<p>after</p>\n"));
    assert_eq!(out.matches("class=\"mermaid\"").count(), 2);
    assert!(!out.contains("<div class=\"mermaid\">"));
  }

  #[test]
  fn test_rewrite_without_diagrams_is_identity() {
    let html = "<h1>Title</h1>\n<pre><code>plain &amp; simple</code></pre>\n";
    assert_eq!(rewrite_diagram_blocks(html), html);
  }

  #[test]
  fn test_replacement_syntax_in_source_is_literal() {
    let html = wrap_diagram_source("mermaid", "graph TD\n  A[$1 cost]-->B\n");
    assert!(rewrite_diagram_blocks(&html).contains("A[$1 cost]-->B"));
  }

  #[test]
  fn test_is_diagram_language() {
    assert!(is_diagram_language("mermaid"));
    assert!(!is_diagram_language("rust"));
    assert!(!is_diagram_language(""));
  }
}
