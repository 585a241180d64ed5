//! Extensions applied to the parsed document, and the pipeline that orders
//! them.
//!
//! - [`CodeFenceTransformer`] ([`Stage::Blocks`]) decides how each fenced
//!   block renders: diagram container, highlighted markup, or untouched.
//! - [`HeadingAnchorTransformer`] ([`Stage::Anchors`]) assigns unique ids and
//!   inserts permalink markers.
//! - [`TocTransformer`] ([`Stage::Outline`]) turns the anchored headings into
//!   a nested list captured outside of the content.
use std::{collections::HashSet, sync::Arc};

use comrak::nodes::{AstNode, NodeHeading, NodeHtmlBlock, NodeValue};
use html_escape::{encode_double_quoted_attribute, encode_text};
use log::{debug, trace};

use super::{
  diagram::{is_diagram_language, wrap_diagram_source},
  types::{AstTransformer, RenderContext, Stage},
};
use crate::{
  syntax::SyntaxManager,
  types::Header,
  utils::{extract_inline_text, slugify, unique_slug},
};

/// Token prepended to the source when the table of contents is enabled.
pub const TOC_PLACEHOLDER: &str = "${toc}";

/// Class of the permalink marker inserted into anchored headings.
pub const ANCHOR_CLASS: &str = "heading-anchor";

/// Visible symbol of the permalink marker.
pub const ANCHOR_SYMBOL: &str = "#";

/// Class of the `<nav>` wrapping the table of contents.
pub const TOC_CLASS: &str = "toc";

/// Ordered set of [`AstTransformer`]s.
///
/// Registration keeps the list sorted by [`Stage`], so anchors always run
/// before the table of contents no matter which was registered first.
#[derive(Default)]
pub struct ExtensionPipeline {
  transformers: Vec<Box<dyn AstTransformer>>,
}

impl ExtensionPipeline {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Register a transformer at the end of its stage.
  pub fn register<T: AstTransformer + 'static>(
    &mut self,
    transformer: T,
  ) -> &mut Self {
    let stage = transformer.stage();
    let position = self
      .transformers
      .partition_point(|registered| registered.stage() <= stage);
    self.transformers.insert(position, Box::new(transformer));
    self
  }

  /// Names and stages of the registered transformers, in execution order.
  #[must_use]
  pub fn plan(&self) -> Vec<(Stage, &'static str)> {
    self
      .transformers
      .iter()
      .map(|t| (t.stage(), t.name()))
      .collect()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.transformers.is_empty()
  }

  /// Run every transformer over the document, in stage order.
  pub fn run<'a>(&self, root: &'a AstNode<'a>, ctx: &mut RenderContext<'_>) {
    for transformer in &self.transformers {
      trace!("Running {} ({:?})", transformer.name(), transformer.stage());
      transformer.transform(root, ctx);
    }
  }
}

/// What the fenced-code hook decided for one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFenceOutcome {
  /// Diagram source wrapped for the post-processor.
  Diagram(String),
  /// Complete highlighted `<pre>` block.
  Highlighted(String),
  /// Leave the block to comrak's default escaping.
  PassThrough,
}

/// Fenced-code hook.
pub struct CodeFenceTransformer {
  diagrams:    bool,
  highlighter: Option<Arc<SyntaxManager>>,
}

impl CodeFenceTransformer {
  /// `highlighter` is `None` when syntax highlighting is disabled.
  #[must_use]
  pub const fn new(
    diagrams: bool,
    highlighter: Option<Arc<SyntaxManager>>,
  ) -> Self {
    Self {
      diagrams,
      highlighter,
    }
  }

  /// Classify a fenced block by its language tag and raw text.
  #[must_use]
  pub fn classify(&self, language: &str, code: &str) -> CodeFenceOutcome {
    if self.diagrams && is_diagram_language(language) {
      return CodeFenceOutcome::Diagram(wrap_diagram_source(language, code));
    }

    let Some(manager) = self.highlighter.as_deref() else {
      return CodeFenceOutcome::PassThrough;
    };
    if language.is_empty() || !manager.recognizes(language) {
      return CodeFenceOutcome::PassThrough;
    }

    match manager.highlight_code(code, language, None) {
      Ok(spans) => {
        CodeFenceOutcome::Highlighted(format!(
          "<pre class=\"highlight\"><code \
           class=\"language-{}\">{spans}</code></pre>\n",
          encode_double_quoted_attribute(language)
        ))
      },
      Err(e) => {
        debug!("Leaving '{language}' block unhighlighted: {e}");
        CodeFenceOutcome::PassThrough
      },
    }
  }
}

impl AstTransformer for CodeFenceTransformer {
  fn name(&self) -> &'static str {
    "code-fence"
  }

  fn stage(&self) -> Stage {
    Stage::Blocks
  }

  fn transform<'a>(&self, root: &'a AstNode<'a>, _ctx: &mut RenderContext<'_>) {
    if !self.diagrams && self.highlighter.is_none() {
      return;
    }

    let mut replacements = Vec::new();
    for node in root.descendants() {
      if let NodeValue::CodeBlock(ref block) = node.data.borrow().value {
        if !block.fenced {
          continue;
        }
        let language = block.info.split_whitespace().next().unwrap_or("");
        if let CodeFenceOutcome::Diagram(html)
        | CodeFenceOutcome::Highlighted(html) =
          self.classify(language, &block.literal)
        {
          replacements.push((node, html));
        }
      }
    }

    for (node, html) in replacements {
      replace_with_html(node, html);
    }
  }
}

/// Heading ids and permalink markers.
///
/// With `permalink` off only the ids are assigned, which is what the table of
/// contents needs to link to.
pub struct HeadingAnchorTransformer {
  permalink: bool,
}

impl HeadingAnchorTransformer {
  #[must_use]
  pub const fn new(permalink: bool) -> Self {
    Self { permalink }
  }

  fn anchored_heading(
    &self,
    rendered: &str,
    level: u8,
    id: &str,
  ) -> Option<String> {
    let inner = rendered
      .trim_end()
      .strip_prefix(&format!("<h{level}>"))?
      .strip_suffix(&format!("</h{level}>"))?;

    let marker = if self.permalink {
      format!(
        " <a class=\"{ANCHOR_CLASS}\" href=\"#{id}\" \
         aria-hidden=\"true\">{ANCHOR_SYMBOL}</a>"
      )
    } else {
      String::new()
    };

    Some(format!(
      "<h{level} id=\"{id}\" tabindex=\"-1\">{inner}{marker}</h{level}>\n"
    ))
  }
}

impl AstTransformer for HeadingAnchorTransformer {
  fn name(&self) -> &'static str {
    "heading-anchors"
  }

  fn stage(&self) -> Stage {
    Stage::Anchors
  }

  fn transform<'a>(&self, root: &'a AstNode<'a>, ctx: &mut RenderContext<'_>) {
    let headings: Vec<_> = root
      .descendants()
      .filter_map(|node| {
        match node.data.borrow().value {
          NodeValue::Heading(NodeHeading { level, .. }) => Some((node, level)),
          _ => None,
        }
      })
      .collect();

    let mut seen = HashSet::new();
    for (node, level) in headings {
      let text = extract_inline_text(node);
      let id = unique_slug(slugify(&text), &mut seen);

      let mut rendered = String::new();
      if let Err(e) = comrak::format_html(node, ctx.options, &mut rendered) {
        debug!("Could not render heading '{text}': {e}");
        continue;
      }

      match self.anchored_heading(&rendered, level, &id) {
        Some(html) => replace_with_html(node, html),
        None => {
          debug!(
            "Unexpected heading markup, leaving it unanchored: {rendered}"
          );
          continue;
        },
      }

      ctx.headers.push(Header { text, level, id });
    }
  }
}

/// Table of contents capture.
///
/// Removes the [`TOC_PLACEHOLDER`] paragraph and stores the generated list in
/// [`RenderContext::toc`] instead of rendering it in place.
pub struct TocTransformer;

struct TocEntry<'h> {
  header:   &'h Header,
  children: Vec<TocEntry<'h>>,
}

impl TocTransformer {
  fn remove_placeholder<'a>(root: &'a AstNode<'a>) {
    let Some(first) = root.first_child() else {
      return;
    };
    let is_placeholder =
      matches!(first.data.borrow().value, NodeValue::Paragraph)
        && extract_inline_text(first) == TOC_PLACEHOLDER;
    if is_placeholder {
      first.detach();
    }
  }

  fn nest<'h>(
    headers: &'h [Header],
    position: &mut usize,
    parent_level: u8,
  ) -> Vec<TocEntry<'h>> {
    let mut entries = Vec::new();
    while let Some(header) = headers.get(*position) {
      if header.level <= parent_level {
        break;
      }
      *position += 1;
      let children = Self::nest(headers, position, header.level);
      entries.push(TocEntry { header, children });
    }
    entries
  }

  fn write_list(entries: &[TocEntry<'_>], out: &mut String) {
    out.push_str("<ul>");
    for entry in entries {
      out.push_str(&format!(
        "<li><a href=\"#{}\">{}</a>",
        entry.header.id,
        encode_text(&entry.header.text)
      ));
      if !entry.children.is_empty() {
        Self::write_list(&entry.children, out);
      }
      out.push_str("</li>");
    }
    out.push_str("</ul>");
  }

  /// Render the nested list for `headers`, or an empty string if there are
  /// none.
  #[must_use]
  pub fn render(headers: &[Header]) -> String {
    let entries = Self::nest(headers, &mut 0, 0);
    if entries.is_empty() {
      return String::new();
    }

    let mut html = format!("<nav class=\"{TOC_CLASS}\">");
    Self::write_list(&entries, &mut html);
    html.push_str("</nav>");
    html
  }
}

impl AstTransformer for TocTransformer {
  fn name(&self) -> &'static str {
    "toc"
  }

  fn stage(&self) -> Stage {
    Stage::Outline
  }

  fn transform<'a>(&self, root: &'a AstNode<'a>, ctx: &mut RenderContext<'_>) {
    Self::remove_placeholder(root);
    ctx.toc = Self::render(&ctx.headers);
  }
}

/// Turn `node` into a raw HTML block holding `literal`.
///
/// Children are detached, otherwise the formatter would render the old inline
/// content a second time after the literal.
fn replace_with_html<'a>(node: &'a AstNode<'a>, literal: String) {
  let children: Vec<_> = node.children().collect();
  for child in children {
    child.detach();
  }
  node.data.borrow_mut().value = NodeValue::HtmlBlock(NodeHtmlBlock {
    block_type: 6,
    literal,
  });
}
