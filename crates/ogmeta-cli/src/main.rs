use std::path::PathBuf;

use clap::{builder::ArgAction, Parser, Subcommand};
use console::{style, Emoji};
use errors::OgMetaCliErrors;
use ogmeta::{FormatConfig, Formatter};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod errors;

static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
static PAGE: Emoji<'_, '_> = Emoji("📄 ", "");
static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "");

#[derive(Parser)]
#[command(author, version, about = "Length-bounded titles and descriptions for page metadata")]
struct Cli {
  /// Verbose mode (-v, -vv, -vvv)
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to a JSON config file overriding the default limits
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Bound a page title
  Title {
    /// The title to format
    title:  String,
    /// Characters to reserve for text appended to the title later
    #[arg(long, short)]
    add_on: Option<usize>,
  },
  /// Bound a page description, optionally followed by tags
  Desc {
    /// The description to format
    desc: String,
    /// Tag to append after the description (repeatable)
    #[arg(long = "tag", short)]
    tags: Vec<String>,
  },
  /// Bound both a title and a description
  Meta {
    /// The title to format
    title:  String,
    /// The description to format
    desc:   String,
    /// Characters to reserve for text appended to the title later
    #[arg(long, short)]
    add_on: Option<usize>,
    /// Tag to append after the description (repeatable)
    #[arg(long = "tag", short)]
    tags:   Vec<String>,
    /// Print the result as JSON
    #[arg(long)]
    json:   bool,
  },
  /// Show the limits in effect
  Config {
    /// Write the default limits to the config path
    #[arg(long)]
    init: bool,
  },
}

/// Setup logging with the specified verbosity level
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_target(true)
    .init();
}

/// Tags given on the command line, with none at all meaning absent.
fn tags_arg(tags: &[String]) -> Option<&[String]> { (!tags.is_empty()).then_some(tags) }

fn main() -> Result<(), OgMetaCliErrors> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let config_path = cli.config.unwrap_or_else(FormatConfig::default_path);
  trace!("Using config at: {}", config_path.display());

  match cli.command {
    Commands::Title { title, add_on } => {
      let formatter = Formatter::new(FormatConfig::load_or_default(&config_path)?);
      let formatted = formatter.title(&title, add_on);
      debug!("Formatted title: {:?}", formatted);
      println!("{formatted}");
      Ok(())
    },

    Commands::Desc { desc, tags } => {
      let formatter = Formatter::new(FormatConfig::load_or_default(&config_path)?);
      match formatter.description(&desc, tags_arg(&tags)) {
        Some(formatted) => {
          debug!("Formatted description: {:?}", formatted);
          println!("{formatted}");
        },
        None => {
          eprintln!("{} Empty description, nothing to emit", style(WARNING).yellow());
        },
      }
      Ok(())
    },

    Commands::Meta { title, desc, add_on, tags, json } => {
      let formatter = Formatter::new(FormatConfig::load_or_default(&config_path)?);
      let meta = formatter.page_meta(&title, add_on, &desc, tags_arg(&tags));
      debug!("Page meta: {:?}", meta);

      if json {
        println!("{}", serde_json::to_string_pretty(&meta)?);
        return Ok(());
      }

      println!("{} Page metadata:", style(PAGE).green());
      println!("   {} {}", style("Title:").green().bold(), style(&meta.title).white());
      match &meta.description {
        Some(description) => {
          println!("   {} {}", style("Description:").green().bold(), style(description).white());
        },
        None => {
          println!("   {} {}", style("Description:").green().bold(), style("omitted").red().italic());
        },
      }
      Ok(())
    },

    Commands::Config { init } => {
      if init {
        if config_path.exists() {
          println!(
            "{} Config already exists at: {}",
            style(WARNING).yellow(),
            style(config_path.display()).yellow()
          );
        } else {
          FormatConfig::default().save(&config_path)?;
          println!(
            "{} Wrote default config to: {}",
            style(SAVE).green(),
            style(config_path.display()).yellow()
          );
        }
      }

      let config = FormatConfig::load_or_default(&config_path)?;
      println!("{} Config path: {}", style(GEAR).cyan(), style(config_path.display()).yellow());
      println!("   {} {}", style("Title limit:").green().bold(), style(config.title_max_length).white());
      println!(
        "   {} {}",
        style("Description limit:").green().bold(),
        style(config.desc_max_length).white()
      );
      Ok(())
    },
  }
}
