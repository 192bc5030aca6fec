//! Category-keyed collection of open word lists.
//!
//! A `Corpus` owns a locator, a random source and at most one `WordList`
//! per category. Lists are opened on first request and reused afterwards;
//! every handle is released when the corpus is dropped, including when a
//! scoped closure returns early or unwinds.
//!
//! ```no_run
//! use spicy_core::{Corpus, DirectoryLocator, SystemRandom};
//!
//! let name = Corpus::using(DirectoryLocator::new("corpus"), SystemRandom, |corpus| {
//!     let adjective = corpus.adjective(None, Some(8))?;
//!     let noun = corpus.noun(None, Some(8))?;
//!     Ok::<_, spicy_core::Error>(format!("{adjective}-{noun}"))
//! });
//! ```

use crate::error::Result;
use crate::locator::CorpusLocator;
use crate::random::RandomSource;
use crate::word_list::WordList;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Category name for adjectives
pub const ADJECTIVES: &str = "adjectives";

/// Category name for nouns
pub const NOUNS: &str = "nouns";

/// Category name for colors
pub const COLORS: &str = "colors";

/// Lazily opened word lists sharing one locator and one random source.
#[derive(Debug)]
pub struct Corpus<L, S> {
    locator: L,
    source: S,
    lists: HashMap<String, WordList>,
}

impl<L: CorpusLocator, S: RandomSource> Corpus<L, S> {
    pub fn new(locator: L, source: S) -> Self {
        Self {
            locator,
            source,
            lists: HashMap::new(),
        }
    }

    /// Run `f` against a fresh corpus, releasing every opened list
    /// afterwards.
    pub fn using<T, F>(locator: L, source: S, f: F) -> T
    where
        F: FnOnce(&mut Self) -> T,
    {
        let mut corpus = Self::new(locator, source);
        f(&mut corpus)
    }

    /// Draw a word from `category`, opening its list on first use.
    ///
    /// # Errors
    /// - `Error::CorpusUnreadable` if the category has no readable file
    /// - `Error::CorpusCorrupt` if its header fails to decode
    /// - any error of [`WordList::word`]
    pub fn category(&mut self, category: &str, min: Option<u8>, max: Option<u8>) -> Result<String> {
        let list = open_list(&mut self.lists, &self.locator, category)?;
        list.word(min, max, &mut self.source)
    }

    pub fn adjective(&mut self, min: Option<u8>, max: Option<u8>) -> Result<String> {
        self.category(ADJECTIVES, min, max)
    }

    pub fn noun(&mut self, min: Option<u8>, max: Option<u8>) -> Result<String> {
        self.category(NOUNS, min, max)
    }

    pub fn color(&mut self, min: Option<u8>, max: Option<u8>) -> Result<String> {
        self.category(COLORS, min, max)
    }

    /// The word list for `category`, opening it if needed.
    pub fn list(&mut self, category: &str) -> Result<&mut WordList> {
        open_list(&mut self.lists, &self.locator, category)
    }
}

impl<L, S> Corpus<L, S> {
    /// Names of the categories opened so far.
    pub fn open_categories(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<L, S> Drop for Corpus<L, S> {
    fn drop(&mut self) {
        if !self.lists.is_empty() {
            tracing::debug!(lists = self.lists.len(), "releasing corpus");
        }
    }
}

fn open_list<'a, L: CorpusLocator>(
    lists: &'a mut HashMap<String, WordList>,
    locator: &L,
    category: &str,
) -> Result<&'a mut WordList> {
    match lists.entry(category.to_string()) {
        Entry::Occupied(entry) => Ok(entry.into_mut()),
        Entry::Vacant(entry) => {
            let list = WordList::open(locator.locate(category))?;
            Ok(entry.insert(list))
        }
    }
}
