//! spicy: random adjectives, nouns and colors from binary corpora.

mod compile;
mod compose;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Cli, Commands, Config};
use spicy_core::random::RandomSource;
use spicy_core::{Corpus, DirectoryLocator, ADJECTIVES, COLORS, NOUNS};
use std::process;
use tracing_subscriber::EnvFilter;

type AppCorpus = Corpus<DirectoryLocator, Box<dyn RandomSource>>;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Log to stderr so stdout carries only words. `RUST_LOG` wins over
/// `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli)?;
    tracing::debug!(?config, "resolved configuration");

    Corpus::using(config.locator(), config.random_source(), |corpus| {
        execute(corpus, &config, cli.command)
    })
}

/// Run one command. Lists are opened only by the commands that draw.
fn execute(corpus: &mut AppCorpus, config: &Config, command: Commands) -> Result<()> {
    match command {
        Commands::Build {
            input,
            output,
            width,
        } => {
            let header = compile::compile_file(&input, &output, width)?;
            println!(
                "{}: {} words, lengths {}..={}, width {}",
                output.display(),
                header.total_words(),
                header.min_length(),
                header.max_length(),
                header.record_width()
            );
        }
        Commands::Word {
            category,
            min,
            max,
            count,
        } => {
            for _ in 0..count {
                let word = corpus
                    .category(&category, min, max)
                    .with_context(|| format!("Failed to draw from {category}"))?;
                println!("{word}");
            }
        }
        Commands::Pair {
            separator,
            max,
            count,
        } => {
            let separator = separator.as_deref().unwrap_or(&config.separator);
            for _ in 0..count {
                let adjective = corpus.adjective(None, max)?;
                let noun = corpus.noun(None, max)?;
                println!("{adjective}{separator}{noun}");
            }
        }
        Commands::Format { template, count } => {
            let pieces = compose::parse_template(&template)?;
            for _ in 0..count {
                let line = compose::render(&pieces, |category| corpus.category(category, None, None))?;
                println!("{line}");
            }
        }
        Commands::Info { categories } => {
            let categories = if categories.is_empty() {
                vec![ADJECTIVES.to_string(), NOUNS.to_string(), COLORS.to_string()]
            } else {
                categories
            };
            for category in &categories {
                print_info(corpus, category)?;
            }
        }
    }
    Ok(())
}

fn print_info(corpus: &mut AppCorpus, category: &str) -> Result<()> {
    let list = corpus.list(category)?;
    let header = list.header();

    println!("=== {category} ===");
    println!("Words:        {}", list.total_words());
    println!("Record width: {} bytes", header.record_width());
    println!("Lengths:      {}..={}", header.min_length(), header.max_length());
    for length in list.length_range() {
        let count = list.count_in(Some(length), Some(length))?;
        if count > 0 {
            println!("  {length:>3}: {count}");
        }
    }
    println!();
    Ok(())
}
