//! Provides a trait-based architecture for syntax highlighting that allows
//! backends to be plugged in. The bundled backend is **Syntect**, with
//! two-face adding extended syntax definitions and themes.

pub mod error;
pub mod types;

mod syntect;

pub use error::{SyntaxError, SyntaxResult};
pub use self::syntect::{
  DEFAULT_THEME,
  SyntectHighlighter,
  create_syntect_manager,
};
pub use types::{SyntaxConfig, SyntaxHighlighter, SyntaxManager};

/// Create the default syntax manager, using `theme` as the default theme.
///
/// Unknown theme names are accepted and resolved to [`DEFAULT_THEME`] at
/// highlight time.
#[must_use]
pub fn create_default_manager(theme: Option<String>) -> SyntaxManager {
  create_syntect_manager(theme)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::{types::*, *};

  #[test]
  fn test_syntax_config_default() {
    let config = SyntaxConfig::default();
    assert!(config.default_theme.is_none());
    assert!(config.language_aliases.contains_key("js"));
    assert_eq!(config.language_aliases["js"], "javascript");
  }

  #[test]
  fn test_syntect_highlighter() {
    let highlighter = SyntectHighlighter::default();
    assert_eq!(highlighter.name(), "Syntect");
    assert!(!highlighter.supported_languages().is_empty());
    assert!(highlighter.has_theme(DEFAULT_THEME));
  }

  #[test]
  fn test_syntect_highlight_simple() {
    let highlighter = SyntectHighlighter::default();
    let html = highlighter
      .highlight("fn main() {}", "rust", None)
      .expect("Failed to highlight code");
    assert!(html.contains("main"));
    assert!(html.contains("<span"));
    assert!(!html.contains("<pre"));
  }

  #[test]
  fn test_highlight_escapes_markup() {
    let highlighter = SyntectHighlighter::default();
    let html = highlighter
      .highlight("let s = \"<b>\";", "rust", None)
      .expect("Failed to highlight code");
    assert!(html.contains("&lt;b&gt;"));
  }

  #[test]
  fn test_language_resolution() {
    let manager = create_default_manager(None);

    assert_eq!(manager.resolve_language("js"), "javascript");
    assert_eq!(manager.resolve_language("py"), "python");
    assert_eq!(manager.resolve_language("rust"), "rust");
    assert!(manager.recognizes("js"));
    assert!(manager.recognizes("Rust"));
    assert!(!manager.recognizes("definitely-not-a-language"));
    assert!(!manager.recognizes(""));
  }

  #[test]
  fn test_unsupported_language_is_an_error() {
    let manager = create_default_manager(None);
    let result = manager.highlight_code("x", "definitely-not-a-language", None);
    assert!(matches!(result, Err(SyntaxError::UnsupportedLanguage(_))));
  }

  #[test]
  fn test_unknown_theme_falls_back() {
    let manager = create_default_manager(Some("NoSuchTheme".to_string()));
    let result = manager.highlight_code("fn main() {}", "rust", None);
    assert!(result.is_ok(), "{:?}", result.err());
  }

  #[test]
  fn test_embedded_theme_is_available() {
    let highlighter = SyntectHighlighter::default();
    let themes = highlighter.available_themes();
    assert!(themes.contains(&"Nord".to_string()));
    assert!(themes.contains(&"Dracula".to_string()));

    let manager = create_default_manager(Some("Nord".to_string()));
    assert!(manager.highlight_code("x = 1", "python", None).is_ok());
  }
}
