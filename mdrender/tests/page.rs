#![allow(clippy::unwrap_used, reason = "Fine in tests")]
use mdrender::{PageRenderer, render_page};
use mdrender_config::{ConfigFormat, ConfigResolver, RenderConfig};
use mdrender_templates::{MERMAID_BOOTSTRAP, PAGE_TEMPLATE};

fn effective(override_json: &str) -> RenderConfig {
  let mut config = ConfigResolver::embedded().unwrap().defaults().clone();
  config.merge(RenderConfig::from_str(override_json, ConfigFormat::Json).unwrap());
  config
}

#[test]
fn test_themed_page_with_toc_and_anchors() {
  let config = effective(
    r##"{
      "theme": {"background": "#111"},
      "features": {"toc": true, "headingAnchors": true, "syntaxHighlight": false, "mermaid": false}
    }"##,
  );
  let page = render_page("# Title\n\n## Sec\n\nText", &config, PAGE_TEMPLATE);

  assert!(page.contains("--background: #111;"));
  assert!(page.contains(
    "<nav class=\"toc\"><ul><li><a href=\"#title\">Title</a><ul><li><a \
     href=\"#sec\">Sec</a></li></ul></li></ul></nav>"
  ));
  assert!(page.contains(
    "<h2 id=\"sec\" tabindex=\"-1\">Sec <a class=\"heading-anchor\" \
     href=\"#sec\" aria-hidden=\"true\">#</a></h2>"
  ));
  assert!(page.contains("<title>Title</title>"));
  assert!(!page.contains("mermaid.min.js"));
  assert!(!page.contains("{{"));
}

#[test]
fn test_default_theme_becomes_css_vars() {
  let config = ConfigResolver::embedded().unwrap().defaults().clone();
  let page = render_page("text", &config, "{{css-vars}}");
  for key in config.theme.keys() {
    let name = mdrender_config::kebab_case(key);
    assert!(page.contains(&format!("--{name}: ")), "missing --{name}");
  }
  assert!(page.contains("--font-size: "));
  assert_eq!(page.lines().count(), config.theme.len());
}

#[test]
fn test_mermaid_bootstrap_follows_feature() {
  let source = "```mermaid\ngraph TD\n  A-->B\n```\n";

  let on = render_page(source, &effective(r#"{"features": {"mermaid": true}}"#), PAGE_TEMPLATE);
  assert!(on.contains(MERMAID_BOOTSTRAP));
  assert!(on.contains("<pre class=\"mermaid\">graph TD\n  A-->B\n</pre>"));

  let off = render_page(source, &effective(r#"{"features": {"mermaid": false}}"#), PAGE_TEMPLATE);
  assert!(!off.contains("mermaid.initialize"));
  assert!(!off.contains("<pre class=\"mermaid\">"));
  assert!(off.contains("A--&gt;B"));
}

#[test]
fn test_toc_disabled_leaves_slot_empty() {
  let config = effective(r#"{"features": {"toc": false}}"#);
  let page = render_page("# Title\n\n## Sec\n", &config, "[{{toc}}]{{content}}");
  assert!(page.starts_with("[]<h1 id=\"title\""));
}

#[test]
fn test_token_lookalikes_in_document_survive() {
  let config = effective(r#"{"features": {"mermaid": false}}"#);
  let page = render_page(
    "# Doc\n\nUse `{{title}}` and {{mermaid}} in templates.\n",
    &config,
    PAGE_TEMPLATE,
  );
  assert!(page.contains("<code>{{title}}</code>"));
  assert!(page.contains("{{mermaid}} in templates."));
  assert!(page.contains("<title>Doc</title>"));
}

#[test]
fn test_title_falls_back_and_is_escaped() {
  let config = effective("{}");
  let page = render_page("no heading here\n", &config, "<title>{{title}}</title>");
  assert_eq!(page, "<title>Markdown Preview</title>");

  let page = render_page("# A <b> & C\n", &config, "<title>{{title}}</title>");
  assert_eq!(page, "<title>A &lt;b&gt; &amp; C</title>");
}

#[test]
fn test_highlight_theme_is_applied() {
  let config = effective(r#"{"features": {"syntaxHighlight": true}}"#);
  let source = "```rust\nfn main() {}\n```\n";
  let dark = PageRenderer::new(&config, None).render_page(source, "{{content}}");
  let light = PageRenderer::new(&config, Some("InspiredGitHub".to_string()))
    .render_page(source, "{{content}}");
  assert!(dark.starts_with("<pre class=\"highlight\">"));
  assert!(light.starts_with("<pre class=\"highlight\">"));
  assert_ne!(dark, light);
}

#[test]
fn test_pages_are_deterministic() {
  let config = ConfigResolver::embedded().unwrap().defaults().clone();
  let source = "# Doc\n\n## Part\n\n```python\nprint('x')\n```\n\n## Part\n\n```mermaid\npie\n```\n";
  let renderer = PageRenderer::new(&config, None);
  let first = renderer.render_page(source, PAGE_TEMPLATE);
  assert_eq!(first, renderer.render_page(source, PAGE_TEMPLATE));
  assert_eq!(first, render_page(source, &config, PAGE_TEMPLATE));
}
