use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for mdrender
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Render a Markdown document into a themed HTML page"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Configuration override (JSON or TOML). Merged on top of the defaults;
  /// ignored if it cannot be read or parsed.
  #[arg(value_name = "CONFIG")]
  pub config: Option<PathBuf>,

  /// Markdown source to render. Read from standard input if omitted.
  #[arg(short, long)]
  pub input: Option<PathBuf>,

  /// Where to write the page. Written to standard output if omitted.
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Default configuration document to use instead of the bundled one.
  #[arg(long)]
  pub defaults: Option<PathBuf>,

  /// Page template to use instead of the bundled one.
  #[arg(long)]
  pub template: Option<PathBuf>,

  /// Syntax highlighting theme for code blocks.
  #[arg(long = "highlight-theme", value_name = "NAME")]
  pub highlight_theme: Option<String>,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,
}

/// All supported subcommands for the mdrender CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Export the default configuration and page template for customization.
  Export {
    /// Output directory for template files.
    #[arg(short, long, default_value = "templates")]
    output_dir: PathBuf,

    /// Whether to overwrite existing files.
    #[arg(long)]
    force: bool,
  },
}

impl Cli {
  /// Parse command line arguments
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
