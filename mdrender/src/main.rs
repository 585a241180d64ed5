use std::{
  borrow::Cow,
  fs,
  io::{self, Read, Write},
  path::Path,
};

use color_eyre::eyre::{Context, Result};
use log::{LevelFilter, debug, info};
use mdrender::{
  cli::{Cli, Commands},
  render::PageRenderer,
};
use mdrender_config::{ConfigResolver, ConfigSource, export_templates};
use mdrender_templates::PAGE_TEMPLATE;

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  // Logs go to stderr; stdout may carry the rendered page.
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .target(env_logger::Target::Stderr)
    .init();

  if let Some(Commands::Export { output_dir, force }) = &cli.command {
    let written = export_templates(output_dir, *force).wrap_err_with(|| {
      format!("Failed to export templates to {}", output_dir.display())
    })?;
    info!(
      "Exported {} template(s) to {}",
      written.len(),
      output_dir.display()
    );
    return Ok(());
  }

  render(&cli)
}

/// Resolve the configuration, render the source and write the page.
fn render(cli: &Cli) -> Result<()> {
  let resolver = match &cli.defaults {
    Some(path) => {
      ConfigResolver::from_defaults_file(path).wrap_err_with(|| {
        format!("Failed to load default configuration: {}", path.display())
      })?
    },
    None => {
      ConfigResolver::embedded()
        .wrap_err("Bundled default configuration is invalid")?
    },
  };

  let resolved = resolver.resolve(cli.config.as_deref());
  match &resolved.source {
    ConfigSource::Defaults => debug!("Using default configuration"),
    ConfigSource::Override(path) => {
      debug!("Using configuration override {}", path.display());
    },
    ConfigSource::Fallback { path, reason } => {
      debug!(
        "Configuration override {} ignored ({reason}), using defaults",
        path.display()
      );
    },
  }

  let markdown = read_source(cli.input.as_deref())?;

  let template: Cow<'_, str> = match &cli.template {
    Some(path) => {
      Cow::Owned(fs::read_to_string(path).wrap_err_with(|| {
        format!("Failed to read template: {}", path.display())
      })?)
    },
    None => Cow::Borrowed(PAGE_TEMPLATE),
  };

  let renderer =
    PageRenderer::new(&resolved.config, cli.highlight_theme.clone());
  let page = renderer.render_page(&markdown, &template);

  write_page(cli.output.as_deref(), &page)
}

fn read_source(input: Option<&Path>) -> Result<String> {
  match input {
    Some(path) => {
      fs::read_to_string(path).wrap_err_with(|| {
        format!("Failed to read input: {}", path.display())
      })
    },
    None => {
      let mut source = String::new();
      io::stdin()
        .read_to_string(&mut source)
        .wrap_err("Failed to read input from stdin")?;
      Ok(source)
    },
  }
}

fn write_page(output: Option<&Path>, page: &str) -> Result<()> {
  match output {
    Some(path) => {
      if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
          fs::create_dir_all(parent).wrap_err_with(|| {
            format!("Failed to create directory: {}", parent.display())
          })?;
        }
      }
      fs::write(path, page).wrap_err_with(|| {
        format!("Failed to write output: {}", path.display())
      })?;
      info!("Wrote {}", path.display());
    },
    None => {
      let mut stdout = io::stdout().lock();
      stdout
        .write_all(page.as_bytes())
        .and_then(|()| stdout.flush())
        .wrap_err("Failed to write page to stdout")?;
    },
  }
  Ok(())
}
