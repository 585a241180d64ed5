//! # mdrender-commonmark
//!
//! Turns a Markdown document into an HTML fragment, a table of contents and a
//! page title. Parsing is done by `comrak`; everything this crate adds is an
//! AST transformer registered on an ordered extension pipeline.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdrender_commonmark::{MarkdownOptions, MarkdownProcessor};
//!
//! let processor = MarkdownProcessor::new(MarkdownOptions::default());
//! let result = processor.render("# Hello World\n\n## Usage\n\nSome text.");
//!
//! assert_eq!(result.title, "Hello World");
//! assert!(result.html.contains(r#"<h2 id="usage""#));
//! assert!(result.toc.contains(r##"href="#usage""##));
//! ```
//!
//! ## Features
//!
//! - **Heading anchors** with unique slugs and a decorative permalink marker
//! - **Table of contents** captured out-of-band from the anchored headings
//! - **Syntax highlighting** through a pluggable [`syntax::SyntaxHighlighter`]
//! - **Mermaid diagrams** rewritten into `<pre class="mermaid">` blocks

pub mod processor;
pub mod syntax;
mod types;
pub mod utils;

pub use crate::{
  processor::{
    AstTransformer,
    ExtensionPipeline,
    MarkdownOptions,
    MarkdownOptionsBuilder,
    MarkdownProcessor,
    RenderContext,
    Stage,
  },
  syntax::create_default_manager,
  types::{Header, MarkdownResult},
};
