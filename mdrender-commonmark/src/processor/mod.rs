//! Markdown processing pipeline.
//!
//! # Architecture
//!
//! - [`core`]: processor construction and the render pipeline
//! - [`extensions`]: the AST transformers and the stage-ordered pipeline
//! - [`diagram`]: Mermaid block wrapping and post-render rewriting
//! - [`types`]: options, processor struct, transformer trait
pub mod core;
pub mod diagram;
pub mod extensions;
pub mod types;

pub use self::core::comrak_options;

pub use diagram::{DIAGRAM_CLASS, DIAGRAM_LANGUAGE, rewrite_diagram_blocks};
pub use extensions::{
  CodeFenceOutcome,
  CodeFenceTransformer,
  ExtensionPipeline,
  HeadingAnchorTransformer,
  TOC_PLACEHOLDER,
  TocTransformer,
};
pub use types::{
  AstTransformer,
  MarkdownOptions,
  MarkdownOptionsBuilder,
  MarkdownProcessor,
  RenderContext,
  Stage,
};
