//! Type definitions for the Markdown processor.
//!
//! Contains the core types used by the processor, including:
//! - Configuration options (`MarkdownOptions`)
//! - The main processor struct (`MarkdownProcessor`)
//! - The AST transformer trait, its [`Stage`] and the per-render context
//!
//! # Examples
//!
//! ```
//! use mdrender_commonmark::{MarkdownOptions, MarkdownProcessor};
//!
//! let options = MarkdownOptions {
//!   diagrams: false,
//!   highlight_code: true,
//!   ..Default::default()
//! };
//!
//! let processor = MarkdownProcessor::new(options);
//! ```

use std::sync::Arc;

use comrak::{nodes::AstNode, options::Options};

use super::extensions::ExtensionPipeline;
use crate::types::Header;

/// Options for configuring the Markdown processor.
///
/// Each flag gates one optional stage of the rendering pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(
  clippy::struct_excessive_bools,
  reason = "Config struct with related boolean flags"
)]
pub struct MarkdownOptions {
  /// Turn `mermaid` fenced blocks into client-side diagram blocks.
  pub diagrams: bool,

  /// Enable syntax highlighting for fenced code blocks.
  pub highlight_code: bool,

  /// Give every heading an id and a permalink marker.
  pub heading_anchors: bool,

  /// Build a table of contents from the document headings.
  pub toc: bool,

  /// Optional: syntax highlighting theme name.
  pub highlight_theme: Option<String>,
}

impl MarkdownOptions {
  /// Options with every optional stage switched off.
  #[must_use]
  pub const fn plain() -> Self {
    Self {
      diagrams:        false,
      highlight_code:  false,
      heading_anchors: false,
      toc:             false,
      highlight_theme: None,
    }
  }
}

impl Default for MarkdownOptions {
  fn default() -> Self {
    Self {
      diagrams:        true,
      highlight_code:  true,
      heading_anchors: true,
      toc:             true,
      highlight_theme: None,
    }
  }
}

/// Main Markdown processor.
///
/// Clones share the extension pipeline.
#[derive(Clone)]
pub struct MarkdownProcessor {
  pub(crate) options:  MarkdownOptions,
  pub(crate) pipeline: Arc<ExtensionPipeline>,
}

/// Position of an [`AstTransformer`] in the extension pipeline.
///
/// Transformers run in ascending stage order regardless of the order they
/// were registered in. Within a stage, registration order is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
  /// Block-level rewrites that do not depend on headings (fenced code).
  Blocks,
  /// Heading ids and permalink markers.
  Anchors,
  /// Consumers of the anchored heading list (table of contents).
  Outline,
}

/// Mutable state shared by the transformers of a single render.
///
/// A fresh context is created for every call to
/// [`MarkdownProcessor::render`], so nothing leaks between documents.
pub struct RenderContext<'o> {
  /// The comrak options the document was parsed with.
  pub options: &'o Options<'static>,

  /// Headings collected by the [`Stage::Anchors`] transformer.
  pub headers: Vec<Header>,

  /// Table of contents captured by the [`Stage::Outline`] transformer.
  pub toc: String,
}

impl<'o> RenderContext<'o> {
  #[must_use]
  pub const fn new(options: &'o Options<'static>) -> Self {
    Self {
      options,
      headers: Vec::new(),
      toc: String::new(),
    }
  }
}

/// Trait for AST transformations registered on the extension pipeline.
pub trait AstTransformer: Send + Sync {
  /// Short name, used in logs.
  fn name(&self) -> &'static str;

  /// Pipeline stage this transformer belongs to.
  fn stage(&self) -> Stage;

  fn transform<'a>(&self, root: &'a AstNode<'a>, ctx: &mut RenderContext<'_>);
}

/// Builder for constructing `MarkdownOptions` with method chaining.
#[derive(Debug, Clone)]
pub struct MarkdownOptionsBuilder {
  options: MarkdownOptions,
}

impl MarkdownOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self {
      options: MarkdownOptions::default(),
    }
  }

  /// Enable or disable Mermaid diagram blocks.
  #[must_use]
  pub const fn diagrams(mut self, enabled: bool) -> Self {
    self.options.diagrams = enabled;
    self
  }

  /// Enable or disable syntax highlighting.
  #[must_use]
  pub const fn highlight_code(mut self, enabled: bool) -> Self {
    self.options.highlight_code = enabled;
    self
  }

  /// Enable or disable heading anchors.
  #[must_use]
  pub const fn heading_anchors(mut self, enabled: bool) -> Self {
    self.options.heading_anchors = enabled;
    self
  }

  /// Enable or disable the table of contents.
  #[must_use]
  pub const fn toc(mut self, enabled: bool) -> Self {
    self.options.toc = enabled;
    self
  }

  /// Set the syntax highlighting theme.
  #[must_use]
  pub fn highlight_theme<S: Into<String>>(mut self, theme: Option<S>) -> Self {
    self.options.highlight_theme = theme.map(Into::into);
    self
  }

  /// Build the final `MarkdownOptions`.
  #[must_use]
  pub fn build(self) -> MarkdownOptions {
    self.options
  }
}

impl Default for MarkdownOptionsBuilder {
  fn default() -> Self {
    Self::new()
  }
}
