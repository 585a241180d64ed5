//! The full document-to-page pipeline.
use log::debug;
use mdrender_commonmark::{MarkdownProcessor, MarkdownResult};
use mdrender_config::{Feature, RenderConfig, build_css_vars};
use mdrender_templates::MERMAID_BOOTSTRAP;

use crate::page::{PageFragments, compose};

/// Renders documents into complete pages for one effective configuration.
pub struct PageRenderer<'c> {
  config:    &'c RenderConfig,
  processor: MarkdownProcessor,
  css_vars:  String,
}

impl<'c> PageRenderer<'c> {
  /// `highlight_theme` overrides the default code highlighting theme.
  #[must_use]
  pub fn new(
    config: &'c RenderConfig,
    highlight_theme: Option<String>,
  ) -> Self {
    let options = config.markdown_options(highlight_theme);
    debug!("Markdown options: {options:?}");
    Self {
      config,
      processor: MarkdownProcessor::new(options),
      css_vars: build_css_vars(&config.theme),
    }
  }

  /// Render the document body alone.
  #[must_use]
  pub fn render_markdown(&self, markdown: &str) -> MarkdownResult {
    self.processor.render(markdown)
  }

  /// Render `markdown` and compose it into `template`.
  #[must_use]
  pub fn render_page(&self, markdown: &str, template: &str) -> String {
    let result = self.render_markdown(markdown);
    let mermaid = if self.config.is_enabled(Feature::Mermaid) {
      MERMAID_BOOTSTRAP
    } else {
      ""
    };

    compose(template, &PageFragments {
      title: &result.title,
      css_vars: &self.css_vars,
      toc: &result.toc,
      content: &result.html,
      mermaid,
    })
  }
}

/// Render `markdown` into `template` with `config`, using the default
/// highlighting theme.
#[must_use]
pub fn render_page(
  markdown: &str,
  config: &RenderConfig,
  template: &str,
) -> String {
  PageRenderer::new(config, None).render_page(markdown, template)
}
