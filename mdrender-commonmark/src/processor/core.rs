//! Core implementation of the Markdown processor.
//!
//! Builds the extension pipeline from [`MarkdownOptions`] once, then runs
//! parse, transform, format and diagram rewriting for every render.
use std::{borrow::Cow, sync::Arc};

use comrak::{Arena, options::Options, parse_document};
use log::{debug, error};

use super::{
  diagram::rewrite_diagram_blocks,
  extensions::{
    CodeFenceTransformer,
    ExtensionPipeline,
    HeadingAnchorTransformer,
    TOC_PLACEHOLDER,
    TocTransformer,
  },
  types::{MarkdownOptions, MarkdownProcessor, RenderContext},
};
use crate::{syntax::create_default_manager, types::MarkdownResult, utils};

impl MarkdownProcessor {
  /// Create a new `MarkdownProcessor` with the given options.
  #[must_use]
  pub fn new(options: MarkdownOptions) -> Self {
    let pipeline = Self::build_pipeline(&options);
    Self {
      options,
      pipeline: Arc::new(pipeline),
    }
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &MarkdownOptions {
    &self.options
  }

  /// The extension pipeline this processor runs.
  #[must_use]
  pub fn pipeline(&self) -> &ExtensionPipeline {
    &self.pipeline
  }

  fn build_pipeline(options: &MarkdownOptions) -> ExtensionPipeline {
    let mut pipeline = ExtensionPipeline::new();

    if options.toc {
      pipeline.register(TocTransformer);
    }
    // The table of contents links to heading ids, so ids are assigned even
    // when the permalink markers are off.
    if options.heading_anchors || options.toc {
      pipeline.register(HeadingAnchorTransformer::new(options.heading_anchors));
    }
    if options.diagrams || options.highlight_code {
      let highlighter = options.highlight_code.then(|| {
        Arc::new(create_default_manager(options.highlight_theme.clone()))
      });
      pipeline
        .register(CodeFenceTransformer::new(options.diagrams, highlighter));
    }

    debug!("Extension pipeline: {:?}", pipeline.plan());
    pipeline
  }

  /// Render Markdown to HTML, capturing the table of contents and the title.
  ///
  /// Rendering is a pure function of the input and the options.
  #[must_use]
  pub fn render(&self, markdown: &str) -> MarkdownResult {
    let title = utils::extract_title(markdown);

    let source: Cow<'_, str> = if self.options.toc {
      Cow::Owned(format!("{TOC_PLACEHOLDER}\n\n{markdown}"))
    } else {
      Cow::Borrowed(markdown)
    };

    let arena = Arena::new();
    let options = comrak_options();
    let root = parse_document(&arena, &source, &options);

    let mut ctx = RenderContext::new(&options);
    self.pipeline.run(root, &mut ctx);

    let mut html = String::new();
    if let Err(e) = comrak::format_html(root, &options, &mut html) {
      error!("Failed to format document as HTML: {e}");
    }

    if self.options.diagrams {
      html = rewrite_diagram_blocks(&html);
    }

    MarkdownResult {
      html,
      toc: ctx.toc,
      title,
      headers: ctx.headers,
    }
  }
}

/// Base comrak configuration: raw HTML passes through, bare URLs become
/// links, punctuation is left literal.
#[must_use]
pub fn comrak_options() -> Options<'static> {
  let mut options = Options::default();
  options.extension.autolink = true;
  options.extension.table = true;
  options.extension.strikethrough = true;
  options.parse.smart = false;
  options.render.r#unsafe = true;
  options
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::processor::Stage;

  #[test]
  fn test_pipeline_for_default_options() {
    let processor = MarkdownProcessor::new(MarkdownOptions::default());
    assert_eq!(processor.pipeline().plan(), vec![
      (Stage::Blocks, "code-fence"),
      (Stage::Anchors, "heading-anchors"),
      (Stage::Outline, "toc"),
    ]);
  }

  #[test]
  fn test_pipeline_for_plain_options_is_empty() {
    let processor = MarkdownProcessor::new(MarkdownOptions::plain());
    assert!(processor.pipeline().is_empty());
  }

  #[test]
  fn test_toc_alone_still_assigns_ids() {
    let options = MarkdownOptions {
      toc: true,
      ..MarkdownOptions::plain()
    };
    let processor = MarkdownProcessor::new(options);
    assert_eq!(processor.pipeline().plan(), vec![
      (Stage::Anchors, "heading-anchors"),
      (Stage::Outline, "toc"),
    ]);

    let result = processor.render("# Title\n\n## Sec\n");
    assert!(result.html.contains("<h2 id=\"sec\" tabindex=\"-1\">Sec</h2>"));
    assert!(!result.html.contains("heading-anchor"));
    assert!(result.toc.contains("href=\"#sec\""));
  }

  #[test]
  fn test_comrak_options() {
    let options = comrak_options();
    assert!(options.render.r#unsafe);
    assert!(options.extension.autolink);
    assert!(!options.parse.smart);
  }
}
