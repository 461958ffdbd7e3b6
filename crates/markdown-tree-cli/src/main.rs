use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use markdown_tree_config::{Config, OutputFormat};
use markdown_tree_engine::{Document, Projector, parse_with_options, validate};
use serde::Serialize;
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "markdown-tree", version, about = "Parse markdown into a document tree")]
struct Cli {
    /// Config file to use instead of ~/.config/markdown-tree/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log parser decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a markdown file (or `-` for stdin) and print the tree
    Parse {
        input: PathBuf,

        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Check that a JSON document tree (or `-` for stdin) is well formed
    Validate { input: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Outline,
    Elements,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Outline => OutputFormat::Outline,
            Format::Elements => OutputFormat::Elements,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Returns `Ok(false)` when the command ran but its check failed.
fn run(cli: Cli) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Parse {
            input,
            format,
            compact,
        } => {
            let text = read_input(&input)?;
            let doc = parse_with_options(&text, &config.parse_options());
            let format = format.map(OutputFormat::from).unwrap_or(config.output.format);
            let pretty = config.output.pretty && !compact;
            println!("{}", render(&doc, format, pretty)?);
            Ok(true)
        }
        Command::Validate { input } => {
            let json = read_input(&input)?;
            let doc: Document = serde_json::from_str(&json)
                .with_context(|| format!("{} is not a document tree", input.display()))?;
            match validate(&doc) {
                Ok(()) => {
                    println!("ok");
                    Ok(true)
                }
                Err(e) => {
                    eprintln!("{e}");
                    Ok(false)
                }
            }
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let loaded = match explicit {
        Some(path) => {
            let path = Config::expand_path(path);
            let config = Config::load_from_path(&path)?;
            if config.is_none() {
                anyhow::bail!("config file {} does not exist", path.display());
            }
            config
        }
        None => Config::load()?,
    };
    if loaded.is_none() {
        log::debug!("no config file found, using defaults");
    }
    Ok(loaded.unwrap_or_default())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}

fn render(doc: &Document, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(doc, pretty),
        OutputFormat::Outline => Ok(doc.outline()),
        OutputFormat::Elements => to_json(&Projector::new().project(doc), pretty),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
