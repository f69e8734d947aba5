//! pwstretch CLI
//!
//! Stretches memorable base passwords to a fixed length and hashes them with
//! bcrypt.
//!
//! # Commands
//!
//! - `hash` - Stretch and hash base passwords
//! - `stretch` - Print the stretched form without hashing
//! - `verify` - Check a password against a bcrypt record

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

use pwstretch::config::{default_config_path, Config, OutputFormat};
use pwstretch::pipeline::Pipeline;
use pwstretch::report::{render_json, render_text, Row};
use pwstretch::{stretch, verify, Error};

#[derive(Parser)]
#[command(name = "pwstretch")]
#[command(version)]
#[command(about = "Stretch memorable base passwords to a fixed length and hash them with bcrypt")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Stretch and hash base passwords
    Hash {
        /// Base passwords to hash
        bases: Vec<String>,

        /// Read base passwords from a file, one per line ("-" for stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Stretch length in characters (default: 64)
        #[arg(short, long)]
        length: Option<usize>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Shorthand for --format json
        #[arg(long, conflicts_with = "format")]
        json: bool,

        /// Report failing base passwords and continue with the rest
        #[arg(short, long)]
        keep_going: bool,
    },

    /// Print the stretched form of base passwords without hashing
    Stretch {
        /// Base passwords to stretch
        bases: Vec<String>,

        /// Read base passwords from a file, one per line ("-" for stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Stretch length in characters (default: 64)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Check a password against a bcrypt record
    Verify {
        /// The bcrypt record, e.g. $2b$12$...
        #[arg(long)]
        hash: String,

        /// The password to check
        password: String,

        /// Verify the password as given instead of stretching it first
        #[arg(long)]
        raw: bool,

        /// Stretch length in characters (default: 64)
        #[arg(short, long, conflicts_with = "raw")]
        length: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Hash {
            bases,
            file,
            length,
            format,
            json,
            keep_going,
        } => {
            let mut config = config;
            if let Some(length) = length {
                config.length = length;
            }
            if json {
                config.format = OutputFormat::Json;
            } else if let Some(format) = format {
                config.format = format;
            }
            config.keep_going |= keep_going;
            cmd_hash(&config, collect_bases(bases, file.as_deref())?)
        }
        Commands::Stretch {
            bases,
            file,
            length,
        } => cmd_stretch(
            length.unwrap_or(config.length),
            &collect_bases(bases, file.as_deref())?,
        ),
        Commands::Verify {
            hash,
            password,
            raw,
            length,
        } => {
            let length = (!raw).then(|| length.unwrap_or(config.length));
            cmd_verify(&hash, &password, length)
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(&default_config_path())?,
    };
    Ok(config)
}

/// Gather base passwords from arguments and an optional file, in that order
fn collect_bases(mut bases: Vec<String>, file: Option<&Path>) -> anyhow::Result<Vec<String>> {
    if let Some(path) = file {
        let content = if path == Path::new("-") {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read base passwords from stdin")?;
            buf
        } else {
            std::fs::read(path)
                .with_context(|| format!("Failed to read base passwords from {}", path.display()))?
        };

        for (i, line) in content.split(|&b| b == b'\n').enumerate() {
            let line = std::str::from_utf8(line)
                .map_err(Error::from)
                .with_context(|| format!("{}: line {}", path.display(), i + 1))?;
            let line = line.strip_suffix('\r').unwrap_or(line);
            if !line.is_empty() {
                bases.push(line.to_string());
            }
        }
    }

    if bases.is_empty() {
        anyhow::bail!("No base passwords given. Pass them as arguments or with --file");
    }

    Ok(bases)
}

fn cmd_hash(config: &Config, bases: Vec<String>) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(config.length);

    info!(
        count = bases.len(),
        length = config.length,
        "Hashing base passwords"
    );

    let (rows, failed): (Vec<Row>, usize) = if config.keep_going {
        let outcomes = pipeline.run_each(&bases);
        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        (outcomes.iter().map(Row::from).collect(), failed)
    } else {
        let entries = pipeline.run(&bases)?;
        (entries.iter().map(Row::from).collect(), 0)
    };

    match config.format {
        OutputFormat::Text => print!("{}", render_text(&rows)),
        OutputFormat::Json => println!("{}", render_json(&rows)?),
    }

    if failed > 0 {
        anyhow::bail!("{} of {} base passwords failed", failed, bases.len());
    }

    Ok(())
}

fn cmd_stretch(length: usize, bases: &[String]) -> anyhow::Result<()> {
    for base in bases {
        println!("{}", stretch(base, length)?);
    }
    Ok(())
}

fn cmd_verify(record: &str, password: &str, length: Option<usize>) -> anyhow::Result<()> {
    let candidate = match length {
        Some(length) => stretch(password, length)?,
        None => password.to_string(),
    };

    if verify(&candidate, record)? {
        println!("match");
        Ok(())
    } else {
        println!("mismatch");
        std::process::exit(1);
    }
}
