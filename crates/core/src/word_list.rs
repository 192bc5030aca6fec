//! Word selection over a single corpus file.
//!
//! A `WordList` decodes the header once, then answers each query with one
//! seek and one record read. Selection is uniform over *words* in the
//! requested length range: the draw is taken over the cumulative count
//! interval for that range, and the draw itself is the record index.
//!
//! # Draw Resolution
//!
//! ```text
//! lengths:     3     4     5
//! cumulative:  2     2     3        (no words of length 4)
//! records:   [cat][dog][zebra]
//! index:       0    1     2
//!
//! word(3..=5): draw in [0, 3)
//! word(4..=5): draw in [cumulative[3], cumulative[5]) = [2, 3)
//! ```
//!
//! The bucket holding a draw is the first length whose running total is
//! strictly greater than the draw, so a draw equal to a bucket's total
//! belongs to the next bucket.
//!
//! # Thread Safety
//!
//! Not thread-safe: seek followed by read is not atomic. Wrap in a mutex or
//! open one `WordList` per worker (the file is read-only).

use crate::error::{Error, Result};
use crate::header::CorpusHeader;
use crate::random::RandomSource;
use crate::record;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Seek};
use std::ops::RangeInclusive;
use std::path::Path;

/// An open corpus ready to serve random words.
#[derive(Debug)]
pub struct WordList<R = File> {
    header: CorpusHeader,
    /// Offset of the first record
    data_origin: u64,
    /// Words of length <= key, for every length in the corpus range
    length_to_cumulative: BTreeMap<u8, u32>,
    reader: R,
}

impl WordList<File> {
    /// Open a corpus file and decode its header.
    ///
    /// # Errors
    /// - `Error::CorpusUnreadable` if the file cannot be opened
    /// - `Error::CorpusCorrupt` if the header fails to decode
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::CorpusUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::from_reader(file).map_err(|e| match e {
            Error::Header(source) => Error::CorpusCorrupt {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::debug!(
            path = %path.display(),
            width = list.header.record_width(),
            min_length = list.header.min_length(),
            max_length = list.header.max_length(),
            words = list.total_words(),
            "opened corpus"
        );

        Ok(list)
    }
}

impl<R: Read + Seek> WordList<R> {
    /// Decode the header from `reader`, which must be positioned at offset 0.
    pub fn from_reader(mut reader: R) -> Result<Self> {
        let header = CorpusHeader::decode(&mut reader)?;
        let data_origin = header.encoded_len() as u64;

        let length_to_cumulative = (header.min_length()..=header.max_length())
            .zip(header.cumulative().iter().copied())
            .collect();

        Ok(Self {
            header,
            data_origin,
            length_to_cumulative,
            reader,
        })
    }

    /// Draw a random word with length in `[min, max]`, clamped to the
    /// corpus's own length range.
    ///
    /// Missing bounds default to the corpus bounds. Bounds outside the
    /// corpus range are narrowed rather than rejected, so asking for at
    /// least 50 bytes on a corpus topping out at 12 yields a 12-byte word.
    ///
    /// # Errors
    /// - `Error::InvalidRange` if both bounds are given and `min > max`
    /// - `Error::NoWordsInRange` if the clamped range holds no words
    /// - `Error::DrawOutOfRange` if `source` ignores the requested interval
    /// - `Error::ShortRead` / `Error::Io` if the record cannot be read
    pub fn word<S: RandomSource + ?Sized>(
        &mut self,
        min: Option<u8>,
        max: Option<u8>,
        source: &mut S,
    ) -> Result<String> {
        let range = self.clamp_range(min, max)?;
        let (lo, hi) = (*range.start(), *range.end());

        let (rand_min, rand_max) = self.draw_interval(lo, hi);
        if rand_max <= rand_min {
            return Err(Error::NoWordsInRange { lo, hi });
        }

        let (low, high) = (u64::from(rand_min), u64::from(rand_max));
        let draw = source.draw(low, high);
        if draw < low || draw >= high {
            return Err(Error::DrawOutOfRange { draw, low, high });
        }

        // draw < rand_max <= u32::MAX
        let index = draw as u32;
        let length = range
            .clone()
            .find(|length| self.cumulative_at(*length) > index)
            .ok_or(Error::NoWordsInRange { lo, hi })?;

        let offset = self.record_offset(index);
        tracing::trace!(lo, hi, low, high, draw, length, offset, "resolved draw");

        record::read_word(&mut self.reader, offset, self.header.record_width())
    }

    /// Read the record at `index` (0-based across the whole corpus).
    pub fn word_at(&mut self, index: u32) -> Result<String> {
        let offset = self.record_offset(index);
        record::read_word(&mut self.reader, offset, self.header.record_width())
    }
}

impl<R> WordList<R> {
    pub fn header(&self) -> &CorpusHeader {
        &self.header
    }

    /// Byte offset of the first record.
    pub fn data_origin(&self) -> u64 {
        self.data_origin
    }

    /// Byte offset of the record at `index`.
    pub fn record_offset(&self, index: u32) -> u64 {
        self.data_origin + u64::from(index) * u64::from(self.header.record_width())
    }

    /// Shortest and longest word lengths present.
    pub fn length_range(&self) -> RangeInclusive<u8> {
        self.header.min_length()..=self.header.max_length()
    }

    pub fn total_words(&self) -> u32 {
        self.header.total_words()
    }

    /// Number of words whose length lies in `[lo, hi]`, after clamping.
    pub fn count_in(&self, lo: Option<u8>, hi: Option<u8>) -> Result<u32> {
        let range = self.clamp_range(lo, hi)?;
        let (rand_min, rand_max) = self.draw_interval(*range.start(), *range.end());
        Ok(rand_max.saturating_sub(rand_min))
    }

    /// Resolve caller bounds into a range inside the corpus bounds.
    fn clamp_range(&self, min: Option<u8>, max: Option<u8>) -> Result<RangeInclusive<u8>> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(Error::InvalidRange { min, max });
            }
        }

        let (corpus_min, corpus_max) = (self.header.min_length(), self.header.max_length());
        let lo = min.unwrap_or(corpus_min).clamp(corpus_min, corpus_max);
        let hi = max.unwrap_or(corpus_max).clamp(corpus_min, corpus_max);

        Ok(lo..=hi)
    }

    /// Half-open draw interval covering every word of length `lo..=hi`.
    fn draw_interval(&self, lo: u8, hi: u8) -> (u32, u32) {
        let rand_min = if lo == self.header.min_length() {
            0
        } else {
            self.cumulative_at(lo - 1)
        };
        (rand_min, self.cumulative_at(hi))
    }

    fn cumulative_at(&self, length: u8) -> u32 {
        self.length_to_cumulative
            .get(&length)
            .copied()
            .unwrap_or_else(|| self.header.total_words())
    }
}
