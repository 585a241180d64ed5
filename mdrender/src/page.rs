//! Template composition.
//!
//! Page templates carry `{{name}}` tokens. [`compose`] substitutes the known
//! tokens in a single pass over the template, so text inside a substituted
//! fragment that happens to look like a token is never touched.
use std::{borrow::Cow, sync::LazyLock};

use html_escape::encode_text;
use regex::{Captures, Regex};

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\{\{([a-z-]+)\}\}").unwrap_or_else(|e| {
    log::error!("Failed to compile PLACEHOLDER_RE regex: {e}");
    mdrender_commonmark::utils::never_matching_regex()
  })
});

/// Tokens a page template may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
  Title,
  CssVars,
  Toc,
  Content,
  Mermaid,
}

impl Placeholder {
  pub const ALL: [Self; 5] = [
    Self::Title,
    Self::CssVars,
    Self::Toc,
    Self::Content,
    Self::Mermaid,
  ];

  /// Name between the braces.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Title => "title",
      Self::CssVars => "css-vars",
      Self::Toc => "toc",
      Self::Content => "content",
      Self::Mermaid => "mermaid",
    }
  }

  #[must_use]
  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|p| p.name() == name)
  }
}

/// Everything that goes into a page besides the template itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageFragments<'a> {
  /// Plain text, escaped on insertion.
  pub title:    &'a str,
  pub css_vars: &'a str,
  pub toc:      &'a str,
  pub content:  &'a str,
  /// Diagram bootstrap markup, empty when diagrams are off.
  pub mermaid:  &'a str,
}

impl PageFragments<'_> {
  fn fragment(&self, placeholder: Placeholder) -> Cow<'_, str> {
    match placeholder {
      Placeholder::Title => encode_text(self.title),
      Placeholder::CssVars => Cow::Borrowed(self.css_vars),
      Placeholder::Toc => Cow::Borrowed(self.toc),
      Placeholder::Content => Cow::Borrowed(self.content),
      Placeholder::Mermaid => Cow::Borrowed(self.mermaid),
    }
  }
}

/// Fill every known token in `template` with its fragment.
///
/// Unknown tokens are left as they are. Templates without tokens come back
/// unchanged.
#[must_use]
pub fn compose(template: &str, fragments: &PageFragments<'_>) -> String {
  PLACEHOLDER_RE
    .replace_all(template, |caps: &Captures| {
      Placeholder::from_name(&caps[1]).map_or_else(
        || caps[0].to_string(),
        |placeholder| fragments.fragment(placeholder).into_owned(),
      )
    })
    .into_owned()
}
