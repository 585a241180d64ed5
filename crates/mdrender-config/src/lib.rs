//! Effective configuration for mdrender.
//!
//! A configuration document has two flat sections, `theme` and `features`.
//! [`ConfigResolver`] layers an optional user override on top of the
//! defaults, and [`build_css_vars`] turns the resolved theme into CSS custom
//! property declarations.
pub mod config;
pub mod css;
pub mod error;
pub mod export;
pub mod resolver;

pub use config::{
  ConfigFormat,
  Feature,
  FeatureSwitch,
  RenderConfig,
  ThemeValue,
};
pub use css::{build_css_vars, kebab_case};
pub use error::ConfigError;
pub use export::export_templates;
pub use resolver::{ConfigResolver, ConfigSource, ResolvedConfig};
