use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cool_text::chat::Framework;
use cool_text::commands::general::font_table;
use cool_text::config::{config_path, Settings};
use cool_text::{FontFamily, Style, VERSION};

/// Turn plain letters and digits into styled Unicode you can paste anywhere.
#[derive(Parser)]
#[command(name = "cool-text", version = VERSION, about, long_about = None)]
struct Cli {
    /// Settings file (default: $COOL_TEXT_CONFIG, then ./cool-text.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct FontArgs {
    /// serif, script, fraktur, double-struck, sans-serif or monospace
    #[arg(short, long, value_parser = FontFamily::from_name)]
    font: Option<FontFamily>,

    /// normal, bold, italic or bold-italic
    #[arg(short, long, value_parser = Style::from_name)]
    style: Option<Style>,
}

#[derive(Subcommand)]
enum Commands {
    /// Style the given text, or every line of stdin
    Style {
        #[command(flatten)]
        font: FontArgs,

        text: Vec<String>,
    },
    /// List font families and their styles
    Fonts,
    /// Show the stored defaults, or store new ones
    Defaults {
        #[command(flatten)]
        font: FontArgs,
    },
    /// Answer `!cooltext` style commands read from stdin
    Chat,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let path = config_path(cli.config);
    let stored = Settings::load(&path)?;
    let settings = stored.with_env_overrides(|k| env::var(k).ok())?;
    debug!("Using settings {settings:?} from {}", path.display());

    match cli.command {
        Commands::Style { font, text } => {
            let selection = settings.resolve(font.font, font.style)?;
            info!(
                "Styling as {} {}",
                selection.font_family(),
                selection.style()
            );
            let mut out = io::stdout().lock();
            if text.is_empty() {
                for line in io::stdin().lock().lines() {
                    writeln!(out, "{}", selection.apply(&line?)?)?;
                }
            } else {
                writeln!(out, "{}", selection.apply(&text.join(" "))?)?;
            }
        }
        Commands::Fonts => println!("{}", font_table()),
        Commands::Defaults { font } => {
            if font.font.is_none() && font.style.is_none() {
                let selection = stored.selection();
                println!(
                    "{} {} ({})",
                    selection.font_family(),
                    selection.style(),
                    path.display()
                );
            } else {
                let selection = stored.resolve(font.font, font.style)?;
                Settings::from(selection)
                    .save(&path)
                    .with_context(|| format!("Failed to save defaults to {}", path.display()))?;
                println!(
                    "Saved {} {} to {}",
                    selection.font_family(),
                    selection.style(),
                    path.display()
                );
            }
        }
        Commands::Chat => {
            info!("Listening for commands on stdin");
            Framework::default().run(io::stdin().lock(), io::stdout().lock())?;
        }
    }
    Ok(())
}
