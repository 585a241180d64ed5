use std::{fmt, fs, path::Path};

use indexmap::IndexMap;
use mdrender_commonmark::{MarkdownOptions, MarkdownOptionsBuilder};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// A single `theme` entry.
///
/// Values are opaque to mdrender and end up verbatim in a CSS declaration, so
/// any scalar is accepted and rendered through its textual form. `null`
/// renders as the literal text `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
  String(String),
  Integer(i64),
  Float(f64),
  Bool(bool),
  Null,
}

impl fmt::Display for ThemeValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::String(s) => f.write_str(s),
      Self::Integer(i) => write!(f, "{i}"),
      Self::Float(x) => write!(f, "{x}"),
      Self::Bool(b) => write!(f, "{b}"),
      Self::Null => f.write_str("null"),
    }
  }
}

impl From<&str> for ThemeValue {
  fn from(value: &str) -> Self {
    Self::String(value.to_string())
  }
}

/// A single `features` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureSwitch {
  Bool(bool),
  Integer(i64),
  Text(String),
  Null,
}

impl FeatureSwitch {
  /// Whether the switch is on.
  ///
  /// Integers are on when non-zero. Strings are on for `true`, `on`, `yes`
  /// and `1`, ignoring case. `null` is off.
  #[must_use]
  pub fn is_on(&self) -> bool {
    match self {
      Self::Bool(b) => *b,
      Self::Integer(i) => *i != 0,
      Self::Null => false,
      Self::Text(s) => {
        ["true", "on", "yes", "1"]
          .iter()
          .any(|on| s.trim().eq_ignore_ascii_case(on))
      },
    }
  }
}

impl From<bool> for FeatureSwitch {
  fn from(value: bool) -> Self {
    Self::Bool(value)
  }
}

/// Features mdrender knows how to toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
  Mermaid,
  SyntaxHighlight,
  HeadingAnchors,
  Toc,
}

impl Feature {
  /// Key of this feature in the `features` section.
  #[must_use]
  pub const fn key(self) -> &'static str {
    match self {
      Self::Mermaid => "mermaid",
      Self::SyntaxHighlight => "syntaxHighlight",
      Self::HeadingAnchors => "headingAnchors",
      Self::Toc => "toc",
    }
  }
}

/// Configuration document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
  Json,
  Toml,
}

impl ConfigFormat {
  /// Pick the format from a file extension. Anything but `.toml` is JSON.
  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    match path.extension().and_then(|ext| ext.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
      _ => Self::Json,
    }
  }
}

/// A configuration document, either the defaults, a user override, or the
/// effective result of merging the two.
///
/// Both sections keep the order their keys were written in. Keys mdrender
/// does not know about are kept as-is. A section set to `null` reads as
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
  /// Style property name to value, e.g. `background` or `fontSize`.
  #[serde(deserialize_with = "null_as_empty")]
  pub theme: IndexMap<String, ThemeValue>,

  /// Feature name to on/off switch.
  #[serde(deserialize_with = "null_as_empty")]
  pub features: IndexMap<String, FeatureSwitch>,
}

fn null_as_empty<'de, D, V>(
  deserializer: D,
) -> Result<IndexMap<String, V>, D::Error>
where
  D: Deserializer<'de>,
  V: Deserialize<'de>,
{
  let section = Option::<IndexMap<String, V>>::deserialize(deserializer)?;
  Ok(section.unwrap_or_default())
}

impl RenderConfig {
  /// Parse a configuration document from a string.
  ///
  /// # Errors
  ///
  /// Returns an error if the content is not a valid document in `format`.
  pub fn from_str(
    content: &str,
    format: ConfigFormat,
  ) -> Result<Self, ConfigError> {
    let config = match format {
      ConfigFormat::Json => serde_json::from_str(content)?,
      ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(config)
  }

  /// Load a configuration document, picking the format by file extension.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    Self::from_str(&content, ConfigFormat::from_path(path))
  }

  /// Merge `other` on top of `self`, key by key within each section.
  ///
  /// Existing keys keep their position and take the new value; keys only
  /// present in `other` are appended. Nothing is ever removed.
  pub fn merge(&mut self, other: Self) {
    self.theme.extend(other.theme);
    self.features.extend(other.features);
  }

  /// Whether `feature` is switched on. Missing features are off.
  #[must_use]
  pub fn is_enabled(&self, feature: Feature) -> bool {
    self.is_key_enabled(feature.key())
  }

  /// Like [`Self::is_enabled`], for an arbitrary feature key.
  #[must_use]
  pub fn is_key_enabled(&self, key: &str) -> bool {
    self.features.get(key).is_some_and(FeatureSwitch::is_on)
  }

  /// Processor options for the features switched on in this configuration.
  #[must_use]
  pub fn markdown_options(
    &self,
    highlight_theme: Option<String>,
  ) -> MarkdownOptions {
    MarkdownOptionsBuilder::new()
      .diagrams(self.is_enabled(Feature::Mermaid))
      .highlight_code(self.is_enabled(Feature::SyntaxHighlight))
      .heading_anchors(self.is_enabled(Feature::HeadingAnchors))
      .toc(self.is_enabled(Feature::Toc))
      .highlight_theme(highlight_theme)
      .build()
  }
}
