//! CSS custom property declarations for a theme.
use indexmap::IndexMap;

use crate::config::ThemeValue;

/// Separator between declarations, matching the indentation of the
/// `:root` block in the page template.
pub const DECLARATION_SEPARATOR: &str = "\n    ";

/// Convert a camel-case theme key into a hyphenated CSS identifier.
///
/// Every ASCII upper-case letter becomes a hyphen followed by its lower-case
/// form, except at the very start of the key.
#[must_use]
pub fn kebab_case(key: &str) -> String {
  let mut out = String::with_capacity(key.len() + 4);
  for (i, c) in key.chars().enumerate() {
    if c.is_ascii_uppercase() {
      if i > 0 {
        out.push('-');
      }
      out.push(c.to_ascii_lowercase());
    } else {
      out.push(c);
    }
  }
  out
}

/// One `--<key>: <value>;` declaration per theme entry, in map order.
///
/// Values are not validated.
#[must_use]
pub fn build_css_vars(theme: &IndexMap<String, ThemeValue>) -> String {
  theme
    .iter()
    .map(|(key, value)| format!("--{}: {value};", kebab_case(key)))
    .collect::<Vec<_>>()
    .join(DECLARATION_SEPARATOR)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_kebab_case() {
    assert_eq!(kebab_case("fontSize"), "font-size");
    assert_eq!(kebab_case("codeBackgroundColor"), "code-background-color");
    assert_eq!(kebab_case("background"), "background");
    assert_eq!(kebab_case("Background"), "background");
    assert_eq!(kebab_case("maxWidth2"), "max-width2");
    assert_eq!(kebab_case(""), "");
  }

  #[test]
  fn test_build_css_vars_order_and_format() {
    let theme: IndexMap<String, ThemeValue> = [
      ("background", ThemeValue::from("#111")),
      ("fontSize", ThemeValue::from("16px")),
      ("lineHeight", ThemeValue::Float(1.6)),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    assert_eq!(
      build_css_vars(&theme),
      "--background: #111;\n    --font-size: 16px;\n    --line-height: 1.6;"
    );
  }

  #[test]
  fn test_values_pass_through_verbatim() {
    let theme: IndexMap<String, ThemeValue> =
      [("fontFamily".to_string(), ThemeValue::from("\"Inter\", sans-serif"))]
        .into_iter()
        .collect();
    assert_eq!(build_css_vars(&theme), "--font-family: \"Inter\", sans-serif;");
  }

  #[test]
  fn test_empty_theme() {
    assert_eq!(build_css_vars(&IndexMap::new()), "");
  }
}
