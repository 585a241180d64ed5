use std::collections::HashMap;

pub const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");
pub const DEFAULT_CONFIG: &str = include_str!("../templates/config.json");

/// Bootstrap fragment injected into `{{mermaid}}` when diagrams are enabled.
pub const MERMAID_BOOTSTRAP: &str = concat!(
  "<script src=\"https://cdn.jsdelivr.net/npm/",
  "mermaid@11/dist/mermaid.min.js\">",
  "</script>\n",
  "  <script>",
  "mermaid.initialize({ startOnLoad: true, theme: \"dark\" });",
  "</script>",
);

#[must_use]
pub fn all_templates() -> HashMap<&'static str, &'static str> {
  let mut templates = HashMap::new();
  templates.insert("page.html", PAGE_TEMPLATE);
  templates.insert("config.json", DEFAULT_CONFIG);
  templates
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn page_template_has_every_placeholder() {
    for token in ["{{title}}", "{{css-vars}}", "{{toc}}", "{{content}}", "{{mermaid}}"] {
      assert!(PAGE_TEMPLATE.contains(token), "missing {token}");
    }
  }

  #[test]
  fn bootstrap_loads_mermaid_from_cdn() {
    assert!(MERMAID_BOOTSTRAP.contains("mermaid@11/dist/mermaid.min.js"));
    assert!(MERMAID_BOOTSTRAP.contains("startOnLoad: true"));
  }
}
