//! Backend trait and the alias-aware manager in front of it.

use std::collections::HashMap;

use super::error::{SyntaxError, SyntaxResult};

/// A syntax highlighting backend.
///
/// Output of [`highlight`](Self::highlight) is the inner markup of a code
/// element: styled spans, without any surrounding `<pre>`.
pub trait SyntaxHighlighter: Send + Sync {
  fn name(&self) -> &'static str;

  /// Language names and extensions the backend understands, lower-cased.
  fn supported_languages(&self) -> Vec<String>;

  fn available_themes(&self) -> Vec<String>;

  fn supports_language(&self, language: &str) -> bool {
    self
      .supported_languages()
      .iter()
      .any(|lang| lang.eq_ignore_ascii_case(language))
  }

  fn has_theme(&self, theme: &str) -> bool {
    self
      .available_themes()
      .iter()
      .any(|t| t.eq_ignore_ascii_case(theme))
  }

  /// Highlight `code` as `language`, using `theme` or the backend default.
  ///
  /// # Errors
  ///
  /// Returns [`SyntaxError::HighlightingFailed`] when the backend fails on
  /// the input.
  fn highlight(
    &self,
    code: &str,
    language: &str,
    theme: Option<&str>,
  ) -> SyntaxResult<String>;
}

/// Short fence tags people actually write, mapped to backend language names.
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
  ("js", "javascript"),
  ("ts", "typescript"),
  ("py", "python"),
  ("rb", "ruby"),
  ("sh", "bash"),
  ("shell", "bash"),
  ("zsh", "bash"),
  ("yml", "yaml"),
  ("md", "markdown"),
  ("rs", "rust"),
];

#[derive(Debug, Clone)]
pub struct SyntaxConfig {
  /// Theme used when a call does not name one.
  pub default_theme:    Option<String>,
  pub language_aliases: HashMap<String, String>,
}

impl Default for SyntaxConfig {
  fn default() -> Self {
    Self {
      default_theme:    None,
      language_aliases: LANGUAGE_ALIASES
        .iter()
        .map(|(alias, language)| {
          ((*alias).to_string(), (*language).to_string())
        })
        .collect(),
    }
  }
}

/// A backend plus alias resolution.
///
/// Languages the backend does not know are rejected rather than rendered as
/// plain text, so callers can leave those blocks to the default escaping.
pub struct SyntaxManager {
  highlighter: Box<dyn SyntaxHighlighter>,
  config:      SyntaxConfig,
}

impl SyntaxManager {
  #[must_use]
  pub fn new(
    highlighter: Box<dyn SyntaxHighlighter>,
    config: SyntaxConfig,
  ) -> Self {
    Self {
      highlighter,
      config,
    }
  }

  #[must_use]
  pub fn highlighter(&self) -> &dyn SyntaxHighlighter {
    self.highlighter.as_ref()
  }

  #[must_use]
  pub const fn config(&self) -> &SyntaxConfig {
    &self.config
  }

  /// Backend language name for a fence tag.
  #[must_use]
  pub fn resolve_language(&self, language: &str) -> String {
    self
      .config
      .language_aliases
      .get(language)
      .cloned()
      .unwrap_or_else(|| language.to_string())
  }

  /// Whether `language` (or its alias target) can be highlighted.
  #[must_use]
  pub fn recognizes(&self, language: &str) -> bool {
    self
      .highlighter
      .supports_language(&self.resolve_language(language))
  }

  /// Highlight `code` after alias resolution.
  ///
  /// # Errors
  ///
  /// Returns [`SyntaxError::UnsupportedLanguage`] if the backend does not
  /// know the language, or whatever the backend reports.
  pub fn highlight_code(
    &self,
    code: &str,
    language: &str,
    theme: Option<&str>,
  ) -> SyntaxResult<String> {
    let language = self.resolve_language(language);
    if !self.highlighter.supports_language(&language) {
      return Err(SyntaxError::UnsupportedLanguage(language));
    }

    let theme = theme.or(self.config.default_theme.as_deref());
    self.highlighter.highlight(code, &language, theme)
  }
}
