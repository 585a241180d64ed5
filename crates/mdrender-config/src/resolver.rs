//! Layering of a user override on top of the default configuration.
use std::path::{Path, PathBuf};

use log::debug;
use mdrender_templates::DEFAULT_CONFIG;

use crate::{
  config::{ConfigFormat, RenderConfig},
  error::ConfigError,
};

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
  /// No override was given.
  Defaults,
  /// The override at this path was merged on top of the defaults.
  Override(PathBuf),
  /// The override could not be loaded; the defaults were used unchanged.
  Fallback { path: PathBuf, reason: String },
}

/// Outcome of [`ConfigResolver::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
  pub config: RenderConfig,
  pub source: ConfigSource,
}

impl ResolvedConfig {
  /// True when the effective configuration is exactly the defaults.
  #[must_use]
  pub const fn used_defaults(&self) -> bool {
    matches!(
      self.source,
      ConfigSource::Defaults | ConfigSource::Fallback { .. }
    )
  }
}

/// Produces the effective configuration for a render.
///
/// Resolution never fails: an override that cannot be read or parsed is
/// ignored and the defaults are used as they are.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
  defaults: RenderConfig,
}

impl ConfigResolver {
  #[must_use]
  pub const fn new(defaults: RenderConfig) -> Self {
    Self { defaults }
  }

  /// Resolver over the default document bundled with mdrender.
  ///
  /// # Errors
  ///
  /// Returns an error if the bundled document does not parse.
  pub fn embedded() -> Result<Self, ConfigError> {
    let defaults = RenderConfig::from_str(DEFAULT_CONFIG, ConfigFormat::Json)?;
    Ok(Self::new(defaults))
  }

  /// Resolver over a default document read from disk.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed.
  pub fn from_defaults_file<P: AsRef<Path>>(
    path: P,
  ) -> Result<Self, ConfigError> {
    Ok(Self::new(RenderConfig::from_file(path)?))
  }

  #[must_use]
  pub const fn defaults(&self) -> &RenderConfig {
    &self.defaults
  }

  /// Merge the override at `path`, if any, on top of the defaults.
  #[must_use]
  pub fn resolve(&self, path: Option<&Path>) -> ResolvedConfig {
    let Some(path) = path else {
      return ResolvedConfig {
        config: self.defaults.clone(),
        source: ConfigSource::Defaults,
      };
    };

    match RenderConfig::from_file(path) {
      Ok(user) => {
        let mut config = self.defaults.clone();
        config.merge(user);
        debug!("Merged configuration override from {}", path.display());
        ResolvedConfig {
          config,
          source: ConfigSource::Override(path.to_path_buf()),
        }
      },
      Err(e) => {
        debug!(
          "Ignoring configuration override {}: {e}",
          path.display()
        );
        ResolvedConfig {
          config: self.defaults.clone(),
          source: ConfigSource::Fallback {
            path:   path.to_path_buf(),
            reason: e.to_string(),
          },
        }
      },
    }
  }
}
