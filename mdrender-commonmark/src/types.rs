//! Types for mdrender-commonmark public API and internal use.

/// Represents a heading in a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
  /// Heading text (inline content, no markdown formatting).
  pub text:  String,
  /// Heading level (1-6).
  pub level: u8,
  /// Anchor ID assigned to the heading, unique within the document.
  pub id:    String,
}

/// Result of Markdown processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownResult {
  /// Rendered HTML content.
  pub html: String,

  /// Table of contents markup, empty when the table of contents is disabled
  /// or the document has no headings.
  pub toc: String,

  /// Page title: the first top-level heading line, or a fixed fallback.
  pub title: String,

  /// Headings that received an anchor, in document order.
  pub headers: Vec<Header>,
}
