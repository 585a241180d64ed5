//! Syntect-based syntax highlighting backend enhanced with two-face.
//!
//! Syntaxes come from two-face's extended set (Sublime Text / TextMate
//! grammars); themes from syntect's defaults plus the two-face embedded
//! themes. Output is inline-styled spans so the page needs no extra CSS.

use std::sync::OnceLock;

use syntect::{
  easy::HighlightLines,
  highlighting::{Theme, ThemeSet},
  html::{IncludeBackground, styled_line_to_highlighted_html},
  parsing::SyntaxSet,
  util::LinesWithEndings,
};
use two_face::theme::{EmbeddedLazyThemeSet, EmbeddedThemeName};

use super::{
  error::{SyntaxError, SyntaxResult},
  types::{SyntaxConfig, SyntaxHighlighter, SyntaxManager},
};

/// Theme used when none is requested or the requested one is unknown.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// two-face themes selectable by name, in addition to syntect's defaults.
const EMBEDDED_THEMES: &[(&str, EmbeddedThemeName)] = &[
  ("Ansi", EmbeddedThemeName::Ansi),
  ("Base16", EmbeddedThemeName::Base16),
  ("Base16EightiesDark", EmbeddedThemeName::Base16EightiesDark),
  ("Base16MochaDark", EmbeddedThemeName::Base16MochaDark),
  ("Base16OceanDark", EmbeddedThemeName::Base16OceanDark),
  ("Base16OceanLight", EmbeddedThemeName::Base16OceanLight),
  ("ColdarkCold", EmbeddedThemeName::ColdarkCold),
  ("ColdarkDark", EmbeddedThemeName::ColdarkDark),
  ("DarkNeon", EmbeddedThemeName::DarkNeon),
  ("Dracula", EmbeddedThemeName::Dracula),
  ("Github", EmbeddedThemeName::Github),
  ("GruvboxDark", EmbeddedThemeName::GruvboxDark),
  ("GruvboxLight", EmbeddedThemeName::GruvboxLight),
  ("MonokaiExtended", EmbeddedThemeName::MonokaiExtended),
  ("Nord", EmbeddedThemeName::Nord),
  ("OneHalfDark", EmbeddedThemeName::OneHalfDark),
  ("OneHalfLight", EmbeddedThemeName::OneHalfLight),
  ("SolarizedDark", EmbeddedThemeName::SolarizedDark),
  ("SolarizedLight", EmbeddedThemeName::SolarizedLight),
  ("TwoDark", EmbeddedThemeName::TwoDark),
  ("VisualStudioDarkPlus", EmbeddedThemeName::VisualStudioDarkPlus),
  ("Zenburn", EmbeddedThemeName::Zenburn),
];

fn embedded_theme(name: &str) -> Option<EmbeddedThemeName> {
  EMBEDDED_THEMES
    .iter()
    .find(|(theme, _)| *theme == name)
    .map(|(_, theme)| *theme)
}

/// Syntect-based syntax highlighter
pub struct SyntectHighlighter {
  theme_name: String,
}

impl SyntectHighlighter {
  /// Create a new Syntect highlighter with the specified theme.
  #[must_use]
  pub fn new(theme_name: Option<String>) -> Self {
    Self {
      theme_name: theme_name.unwrap_or_else(|| DEFAULT_THEME.to_string()),
    }
  }

  fn syntax_set() -> &'static SyntaxSet {
    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAX_SET.get_or_init(two_face::syntax::extra_newlines)
  }

  fn embedded_theme_set() -> &'static EmbeddedLazyThemeSet {
    static THEME_SET: OnceLock<EmbeddedLazyThemeSet> = OnceLock::new();
    THEME_SET.get_or_init(two_face::theme::extra)
  }

  fn default_theme_set() -> &'static ThemeSet {
    static DEFAULT_THEME_SET: OnceLock<ThemeSet> = OnceLock::new();
    DEFAULT_THEME_SET.get_or_init(ThemeSet::load_defaults)
  }

  /// Look a theme up by name, falling back to [`DEFAULT_THEME`].
  fn get_theme(&self, theme_name: Option<&str>) -> &'static Theme {
    let default_theme_set = Self::default_theme_set();
    let name = theme_name.unwrap_or(&self.theme_name);

    if let Some(theme) = default_theme_set.themes.get(name) {
      return theme;
    }

    if let Some(embedded_name) = embedded_theme(name) {
      return Self::embedded_theme_set().get(embedded_name);
    }

    log::debug!("Unknown highlight theme '{name}', using {DEFAULT_THEME}");
    default_theme_set
      .themes
      .get(DEFAULT_THEME)
      .unwrap_or_else(|| {
        Self::embedded_theme_set().get(EmbeddedThemeName::Base16OceanDark)
      })
  }
}

impl Default for SyntectHighlighter {
  fn default() -> Self {
    Self::new(None)
  }
}

impl SyntaxHighlighter for SyntectHighlighter {
  fn name(&self) -> &'static str {
    "Syntect"
  }

  fn supported_languages(&self) -> Vec<String> {
    Self::syntax_set()
      .syntaxes()
      .iter()
      .flat_map(|syntax| {
        std::iter::once(syntax.name.to_lowercase())
          .chain(syntax.file_extensions.iter().map(|ext| ext.to_lowercase()))
      })
      .collect()
  }

  fn available_themes(&self) -> Vec<String> {
    let mut themes: Vec<String> =
      Self::default_theme_set().themes.keys().cloned().collect();
    themes.extend(EMBEDDED_THEMES.iter().map(|(name, _)| (*name).to_string()));
    themes.sort();
    themes.dedup();
    themes
  }

  fn supports_language(&self, language: &str) -> bool {
    !language.is_empty()
      && Self::syntax_set().find_syntax_by_token(language).is_some()
  }

  fn highlight(
    &self,
    code: &str,
    language: &str,
    theme: Option<&str>,
  ) -> SyntaxResult<String> {
    let syntax_set = Self::syntax_set();
    let syntax = syntax_set
      .find_syntax_by_token(language)
      .unwrap_or_else(|| syntax_set.find_syntax_plain_text());

    let mut highlighter = HighlightLines::new(syntax, self.get_theme(theme));
    let mut html = String::with_capacity(code.len() * 2);

    for line in LinesWithEndings::from(code) {
      let regions = highlighter
        .highlight_line(line, syntax_set)
        .map_err(|e| SyntaxError::HighlightingFailed(e.to_string()))?;
      let fragment =
        styled_line_to_highlighted_html(&regions[..], IncludeBackground::No)
          .map_err(|e| SyntaxError::HighlightingFailed(e.to_string()))?;
      html.push_str(&fragment);
    }

    Ok(html)
  }
}

/// Create a Syntect-based syntax manager using `theme` as its default.
#[must_use]
pub fn create_syntect_manager(theme: Option<String>) -> SyntaxManager {
  let theme = theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
  let highlighter = Box::new(SyntectHighlighter::new(Some(theme.clone())));
  let config = SyntaxConfig {
    default_theme: Some(theme),
    ..SyntaxConfig::default()
  };
  SyntaxManager::new(highlighter, config)
}
