mod render;
mod viewer;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use planmark_config::Config;
use planmark_engine::{HtmlRenderer, parse_document_with};
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
    process,
};

use crate::render::{TerminalRenderer, plain_text};

#[derive(Parser, Debug)]
#[command(name = "planmark", version, about = "View and convert planmark documents")]
struct Args {
    /// Document to read, or `-` for stdin
    file: PathBuf,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::View)]
    format: Format,
    /// Config file (defaults to ~/.config/planmark/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Scrollable terminal viewer
    View,
    /// Terminal rendering without styles
    Text,
    Html,
    /// Block list as JSON
    Json,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let source = read_source(&args.file)?;

    let doc = parse_document_with(&source, &config.parse_options())
        .with_context(|| format!("Failed to parse {}", args.file.display()))?;
    let truncated_at = doc.truncated_at;
    let blocks = doc.into_blocks();

    match args.format {
        Format::View => {
            let lines = planmark_engine::render(&blocks, TerminalRenderer::new(&config.render));
            let title = viewer_title(&args.file, truncated_at);
            viewer::run(&mut viewer::App::new(title, lines))?;
        }
        Format::Text => {
            let lines = planmark_engine::render(&blocks, TerminalRenderer::new(&config.render));
            print!("{}", plain_text(&lines));
        }
        Format::Html => print!("{}", planmark_engine::render(&blocks, HtmlRenderer::new())),
        Format::Json => println!("{}", serde_json::to_string_pretty(&blocks)?),
    }
    Ok(())
}

fn viewer_title(file: &Path, truncated_at: Option<usize>) -> String {
    match truncated_at {
        Some(at) => format!("{} (truncated at {at} bytes)", file.display()),
        None => file.display().to_string(),
    }
}

/// An explicit path is expanded and used as-is; otherwise the default
/// location is tried. A missing file means defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config_path = match explicit {
        Some(path) => Config::expand_path(path).unwrap_or_else(|| path.to_path_buf()),
        None => Config::config_path(),
    };
    log::info!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        return Ok(source);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
