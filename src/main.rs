//! conftoml CLI.
//!
//! Reads a configuration document and writes the converted TOML.

use anyhow::{bail, Context, Result};
use clap::Parser;
use conftoml::{convert_with_options, KeyStyle, Options};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "conftoml")]
#[command(author, version, about = "Convert configuration documents to TOML", long_about = None)]
struct Cli {
    /// Input document
    #[arg(short, long)]
    input: PathBuf,

    /// Output TOML file
    #[arg(short, long)]
    output: PathBuf,

    /// Reject duplicate keys, redefined constants and unrecognized lines
    #[arg(long)]
    strict: bool,

    /// Write bare keys inside sections instead of full dotted paths
    #[arg(long)]
    relative_keys: bool,

    /// Omit the blank line before each section header
    #[arg(long)]
    compact: bool,

    /// Log each processed line
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Options {
        let options = if self.strict {
            Options::strict()
        } else {
            Options::new()
        };
        let key_style = if self.relative_keys {
            KeyStyle::Relative
        } else {
            KeyStyle::Dotted
        };
        options
            .with_key_style(key_style)
            .with_section_spacing(!self.compact)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.input.is_file() {
        bail!("input file not found: {}", cli.input.display());
    }

    let input = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    log::info!("read {} bytes from {}", input.len(), cli.input.display());

    let toml = convert_with_options(&input, &cli.options())
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(&cli.output, toml)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!(
        "converted {} -> {}",
        cli.input.display(),
        cli.output.display()
    );
    Ok(())
}
