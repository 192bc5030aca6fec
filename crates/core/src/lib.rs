//! spicy-core: random words from fixed-width binary corpora
//!
//! This library selects random words by category (adjectives, nouns,
//! colors, ...) from compact binary dictionaries:
//! - Every record has the same byte width, so any word is one seek away
//! - A per-length cumulative count table sits in the file header
//! - Selection is uniform over individual words in a length range, not
//!   over lengths
//!
//! # Architecture
//!
//! - `header`: corpus header codec
//! - `record`: fixed-width record padding and reads
//! - `word_list`: query engine over one open corpus file
//! - `corpus`: per-category aggregate with lazy opening
//! - `locator`: category name to file path
//! - `random`: injectable random sources
//! - `builder`: corpus file construction
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **No global state**: locator and random source are passed in
//! - **Deterministic**: a seeded or scripted source makes runs reproducible

pub mod builder;
pub mod corpus;
pub mod error;
pub mod header;
pub mod locator;
pub mod random;
pub mod record;
pub mod word_list;

// Re-export commonly used types
pub use builder::CorpusBuilder;
pub use corpus::{Corpus, ADJECTIVES, COLORS, NOUNS};
pub use error::{Error, HeaderError, Result};
pub use header::CorpusHeader;
pub use locator::{CorpusLocator, DirectoryLocator};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, SystemRandom};
pub use word_list::WordList;
