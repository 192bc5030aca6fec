//! Corpus file construction.
//!
//! Produces the exact byte layout `WordList` reads: header, then records
//! sorted by ascending byte length (insertion order within a length),
//! each padded to a common width.

use crate::error::{Error, HeaderError, Result};
use crate::header::CorpusHeader;
use crate::record::{pad_record, trim_record};
use std::io::Write;

/// Collects words and serializes them as a corpus.
#[derive(Debug, Clone, Default)]
pub struct CorpusBuilder {
    words: Vec<String>,
    width: Option<u8>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a record width instead of using the longest word's length.
    pub fn with_width(mut self, width: u8) -> Self {
        self.width = Some(width);
        self
    }

    pub fn push(&mut self, word: impl Into<String>) -> &mut Self {
        self.words.push(word.into());
        self
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Build the header describing the collected words.
    ///
    /// # Errors
    /// - `Error::PaddedWord` for a word that would not read back unchanged
    /// - `Error::WordTooLong` for a word over 255 bytes
    /// - `Error::Header` if there are no words or the table is invalid
    pub fn header(&self) -> Result<CorpusHeader> {
        let mut lengths = Vec::with_capacity(self.words.len());
        for word in &self.words {
            let bytes = word.as_bytes();
            if bytes.is_empty() || trim_record(bytes) != bytes {
                return Err(Error::PaddedWord { word: word.clone() });
            }

            let len = u8::try_from(bytes.len()).map_err(|_| Error::WordTooLong {
                word: word.clone(),
                length: bytes.len(),
            })?;
            lengths.push(len);
        }

        let (Some(&min_length), Some(&max_length)) = (lengths.iter().min(), lengths.iter().max())
        else {
            return Err(HeaderError::EmptyTable.into());
        };

        let mut per_length = vec![0u32; (max_length - min_length) as usize + 1];
        for len in &lengths {
            per_length[(len - min_length) as usize] += 1;
        }

        let cumulative = per_length
            .iter()
            .scan(0u32, |total, count| {
                *total += count;
                Some(*total)
            })
            .collect();

        let width = self.width.unwrap_or(max_length);
        Ok(CorpusHeader::new(width, min_length, cumulative)?)
    }

    /// Serialize header and records into a byte vector.
    pub fn build(&self) -> Result<Vec<u8>> {
        let header = self.header()?;
        let width = header.record_width();

        let mut sorted: Vec<&str> = self.words.iter().map(String::as_str).collect();
        sorted.sort_by_key(|word| word.len());

        let mut bytes = header.encode();
        bytes.reserve(sorted.len() * width as usize);
        for word in sorted {
            bytes.extend_from_slice(&pad_record(word, width)?);
        }

        Ok(bytes)
    }

    /// Serialize straight into a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.build()?)?;
        Ok(())
    }
}

impl<S: Into<String>> Extend<S> for CorpusBuilder {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for CorpusBuilder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}
