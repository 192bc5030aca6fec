//! Corpus header encoding and decoding.
//!
//! Every corpus file starts with a small header describing the fixed-width
//! record region that follows it.
//!
//! # Header Format
//!
//! ```text
//! +---------------------+
//! | record_width (1)    |  u8 byte width of every record
//! +---------------------+
//! | min_length (1)      |  u8 shortest word length present
//! +---------------------+
//! | group_count (1)     |  u8 number of length buckets
//! +---------------------+
//! | cumulative (4 * n)  |  u32 little-endian running totals, one per
//! | (variable)          |  length from min_length upward
//! +---------------------+
//! | records             |  record_width bytes each, space padded
//! +---------------------+
//! ```
//!
//! There is no magic number or checksum. Decoding validates what the
//! layout itself implies: a non-zero width, a non-empty and non-decreasing
//! table, and a maximum length that still fits in a byte.

use crate::error::HeaderError;
use std::io::{ErrorKind, Read};

/// Size of the fixed header prefix (width, min length, group count)
pub const PREFIX_SIZE: usize = 3;

/// Size of one cumulative table entry
const ENTRY_SIZE: usize = 4;

/// Decoded corpus header.
///
/// # Invariants
/// - `record_width > 0`
/// - `cumulative` is non-empty and non-decreasing
/// - `min_length + cumulative.len() - 1 <= 255`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusHeader {
    record_width: u8,
    min_length: u8,
    cumulative: Vec<u32>,
}

impl CorpusHeader {
    /// Build a header from its parts, applying the same checks as decoding.
    pub fn new(record_width: u8, min_length: u8, cumulative: Vec<u32>) -> Result<Self, HeaderError> {
        if record_width == 0 {
            return Err(HeaderError::ZeroWidth);
        }

        if cumulative.is_empty() {
            return Err(HeaderError::EmptyTable);
        }

        if cumulative.len() > u8::MAX as usize
            || min_length as usize + cumulative.len() - 1 > u8::MAX as usize
        {
            return Err(HeaderError::LengthOverflow {
                min_length,
                group_count: cumulative.len(),
            });
        }

        for (index, pair) in cumulative.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(HeaderError::NonMonotonic {
                    index: index + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }

        Ok(Self {
            record_width,
            min_length,
            cumulative,
        })
    }

    /// Decode a header from a stream positioned at offset 0.
    ///
    /// On success the stream is positioned at the first record.
    ///
    /// # Errors
    /// - `HeaderError::TruncatedHeader` if the stream ends early
    /// - `HeaderError::Io` for any other read failure
    /// - the validation errors of [`CorpusHeader::new`]
    pub fn decode<R: Read>(reader: &mut R) -> Result<Self, HeaderError> {
        let mut prefix = [0u8; PREFIX_SIZE];
        let got = read_full(reader, &mut prefix)?;
        if got < PREFIX_SIZE {
            return Err(HeaderError::TruncatedHeader {
                required: PREFIX_SIZE,
                actual: got,
            });
        }

        let [record_width, min_length, group_count] = prefix;

        let mut table = vec![0u8; group_count as usize * ENTRY_SIZE];
        let got = read_full(reader, &mut table)?;
        if got < table.len() {
            return Err(HeaderError::TruncatedHeader {
                required: PREFIX_SIZE + table.len(),
                actual: PREFIX_SIZE + got,
            });
        }

        let cumulative = table
            .chunks_exact(ENTRY_SIZE)
            .map(|entry| u32::from_le_bytes([entry[0], entry[1], entry[2], entry[3]]))
            .collect();

        Self::new(record_width, min_length, cumulative)
    }

    /// Encode the header into its on-disk byte layout.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        bytes.push(self.record_width);
        bytes.push(self.min_length);
        bytes.push(self.group_count());
        for count in &self.cumulative {
            bytes.extend_from_slice(&count.to_le_bytes());
        }
        bytes
    }

    /// Number of bytes the header occupies; also the data origin.
    pub fn encoded_len(&self) -> usize {
        PREFIX_SIZE + self.cumulative.len() * ENTRY_SIZE
    }

    pub fn record_width(&self) -> u8 {
        self.record_width
    }

    pub fn min_length(&self) -> u8 {
        self.min_length
    }

    /// Longest word length covered by the table.
    pub fn max_length(&self) -> u8 {
        self.min_length + (self.group_count() - 1)
    }

    /// Number of length buckets. Always equals `cumulative().len()`.
    pub fn group_count(&self) -> u8 {
        self.cumulative.len() as u8
    }

    pub fn cumulative(&self) -> &[u32] {
        &self.cumulative
    }

    /// Total number of records in the corpus.
    pub fn total_words(&self) -> u32 {
        self.cumulative.last().copied().unwrap_or(0)
    }
}

/// Read until `buf` is full or the stream ends, returning the byte count.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
