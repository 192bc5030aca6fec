//! Configuration for the spicy application.
//!
//! Handles command-line arguments and merges them with an optional TOML
//! file and the environment. Precedence, highest first:
//!
//! 1. command-line flags
//! 2. config file (`--config <PATH>`)
//! 3. `SPICY_CORPUS_DIR`
//! 4. built-in defaults
//!
//! The tool works with zero arguments as long as `./corpus` holds the
//! category files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use spicy_core::random::{RandomSource, SeededRandom, SystemRandom};
use spicy_core::DirectoryLocator;
use std::path::{Path, PathBuf};

/// Environment variable naming the corpus directory
pub const CORPUS_DIR_ENV: &str = "SPICY_CORPUS_DIR";

const DEFAULT_CORPUS_DIR: &str = "corpus";
const DEFAULT_SEPARATOR: &str = "-";

#[derive(Debug, Parser)]
#[command(name = "spicy")]
#[command(about = "Random words drawn uniformly from binary word corpora")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding `<category>.bin` corpus files
    #[arg(short = 'd', long, global = true)]
    pub corpus_dir: Option<PathBuf>,

    /// Random seed for reproducible output (default: OS randomness)
    #[arg(short = 's', long, global = true)]
    pub seed: Option<u64>,

    /// Log corpus activity to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Draw words from one category
    Word {
        /// Category name, e.g. adjectives, nouns, colors
        category: String,

        /// Minimum word length
        #[arg(long)]
        min: Option<u8>,

        /// Maximum word length
        #[arg(long)]
        max: Option<u8>,

        /// Number of words to draw
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Adjective and noun joined by a separator
    Pair {
        /// Separator (default from config, else "-")
        #[arg(long)]
        separator: Option<String>,

        /// Maximum length of each word
        #[arg(long)]
        max: Option<u8>,

        /// Number of pairs to draw
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Fill a template: %a adjective, %n noun, %c color, %% percent
    Format {
        template: String,

        /// Number of lines to render
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Show header details for corpus categories
    Info {
        /// Categories to inspect (default: adjectives nouns colors)
        categories: Vec<String>,
    },

    /// Compile a newline-delimited word list into a corpus file
    Build {
        /// Input word list
        input: PathBuf,

        /// Output corpus file
        output: PathBuf,

        /// Record width (default: longest word)
        #[arg(long)]
        width: Option<u8>,
    },
}

/// Settings read from the TOML config file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub corpus_dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub separator: Option<String>,
    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Fully resolved configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub corpus_dir: PathBuf,
    pub extension: String,
    pub separator: String,
    pub seed: Option<u64>,
}

impl Config {
    /// Resolve configuration from parsed arguments, the optional config
    /// file and the environment.
    pub fn load(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let env_dir = std::env::var_os(CORPUS_DIR_ENV).map(PathBuf::from);

        Ok(Self::merge(cli.corpus_dir.clone(), cli.seed, file, env_dir))
    }

    /// Merge layers; CLI values take precedence.
    pub fn merge(
        corpus_dir: Option<PathBuf>,
        seed: Option<u64>,
        file: FileConfig,
        env_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            corpus_dir: corpus_dir
                .or(file.corpus_dir)
                .or(env_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS_DIR)),
            extension: file
                .extension
                .unwrap_or_else(|| spicy_core::locator::DEFAULT_EXTENSION.to_string()),
            separator: file.separator.unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
            seed: seed.or(file.seed),
        }
    }

    pub fn locator(&self) -> DirectoryLocator {
        DirectoryLocator::new(&self.corpus_dir).with_extension(&self.extension)
    }

    /// Seeded ChaCha8 when a seed is configured, OS randomness otherwise.
    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(SystemRandom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::merge(None, None, FileConfig::default(), None);
        assert_eq!(config.corpus_dir, PathBuf::from("corpus"));
        assert_eq!(config.extension, "bin");
        assert_eq!(config.separator, "-");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_precedence() {
        let file = FileConfig {
            corpus_dir: Some(PathBuf::from("/from/file")),
            extension: None,
            separator: Some("_".into()),
            seed: Some(1),
        };
        let env = Some(PathBuf::from("/from/env"));

        let config = Config::merge(None, None, file.clone(), env.clone());
        assert_eq!(config.corpus_dir, PathBuf::from("/from/file"));
        assert_eq!(config.separator, "_");
        assert_eq!(config.seed, Some(1));

        let config = Config::merge(Some(PathBuf::from("/from/cli")), Some(9), file, env.clone());
        assert_eq!(config.corpus_dir, PathBuf::from("/from/cli"));
        assert_eq!(config.seed, Some(9));

        let config = Config::merge(None, None, FileConfig::default(), env);
        assert_eq!(config.corpus_dir, PathBuf::from("/from/env"));
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spicy.toml");
        std::fs::write(&path, "corpus_dir = \"words\"\nextension = \"dat\"\nseed = 5\n").unwrap();

        let file = FileConfig::load(&path).unwrap();
        assert_eq!(file.corpus_dir, Some(PathBuf::from("words")));
        assert_eq!(file.extension.as_deref(), Some("dat"));
        assert_eq!(file.seed, Some(5));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spicy.toml");
        std::fs::write(&path, "colour = true\n").unwrap();
        assert!(FileConfig::load(&path).is_err());
    }

    #[test]
    fn test_locator_uses_extension() {
        let config = Config {
            corpus_dir: PathBuf::from("w"),
            extension: "dat".into(),
            separator: "-".into(),
            seed: None,
        };
        assert_eq!(
            spicy_core::CorpusLocator::locate(&config.locator(), "nouns"),
            PathBuf::from("w/nouns.dat")
        );
    }

    #[test]
    fn test_seeded_source_reproducible() {
        let config = Config::merge(None, Some(3), FileConfig::default(), None);
        let mut a = config.random_source();
        let mut b = config.random_source();
        assert_eq!(a.draw(0, 1 << 40), b.draw(0, 1 << 40));
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["spicy", "--seed", "4", "word", "nouns", "--max", "6", "-n", "3"])
            .unwrap();
        assert_eq!(cli.seed, Some(4));
        assert!(matches!(
            cli.command,
            Commands::Word { ref category, min: None, max: Some(6), count: 3 } if category == "nouns"
        ));
    }
}
