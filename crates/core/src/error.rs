//! Error types for corpus decoding and word selection.
//!
//! All operations return structured errors rather than panicking. None of
//! them are transient: a failed draw leaves its `WordList` usable for the
//! next request.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all corpus operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Opening: the corpus file is missing or its header is unusable
/// - Querying: the caller's request or the random draw is invalid
/// - Reading: the record region disagrees with the header
/// - Writing: a word does not fit the corpus format
#[derive(Debug, Error)]
pub enum Error {
    /// The corpus file could not be opened
    #[error("corpus {path} is unreadable: {source}")]
    CorpusUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The corpus file opened but its header failed to decode
    #[error("corpus {path} is corrupt: {source}")]
    CorpusCorrupt {
        path: PathBuf,
        #[source]
        source: HeaderError,
    },

    /// Header codec error outside of a named file (e.g. in-memory corpora)
    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    /// Both bounds supplied and `min > max`
    #[error("invalid length range: min {min} is greater than max {max}")]
    InvalidRange { min: u8, max: u8 },

    /// The clamped range `[lo, hi]` holds no words
    #[error("no words with length in {lo}..={hi}")]
    NoWordsInRange { lo: u8, hi: u8 },

    /// The random source returned a value outside `[low, high)`
    #[error("random draw {draw} outside requested interval {low}..{high}")]
    DrawOutOfRange { draw: u64, low: u64, high: u64 },

    /// Fewer bytes than one record remain at the computed offset
    #[error("short read at offset {offset}: expected {expected} bytes, got {actual}")]
    ShortRead {
        offset: u64,
        expected: usize,
        actual: usize,
    },

    /// Record bytes are not valid UTF-8
    #[error("record at offset {offset} is not valid UTF-8")]
    InvalidWord {
        offset: u64,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A word is empty or longer than the record width allows
    #[error("word {word:?} does not fit a {width}-byte record")]
    RecordTooWide { word: String, width: u8 },

    /// A word is longer than the 255-byte format ceiling
    #[error("word {word:?} is {length} bytes, over the 255-byte limit")]
    WordTooLong { word: String, length: usize },

    /// A word is empty or ends in whitespace or NUL, which reads would strip
    #[error("word {word:?} is empty or ends in padding bytes")]
    PaddedWord { word: String },

    /// Seek or read failure on an already-open corpus
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Corpus header decoding errors.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// Fewer bytes than the 3-byte prefix plus `group_count * 4` table
    #[error("truncated header: need at least {required} bytes, got {actual}")]
    TruncatedHeader { required: usize, actual: usize },

    /// `record_width` is zero
    #[error("record width is zero")]
    ZeroWidth,

    /// `group_count` is zero, so the corpus has no length buckets
    #[error("cumulative table is empty")]
    EmptyTable,

    /// `cumulative[index]` is smaller than its predecessor
    #[error("cumulative table decreases at index {index}: {previous} then {current}")]
    NonMonotonic {
        index: usize,
        previous: u32,
        current: u32,
    },

    /// `min_length + group_count - 1` does not fit in a byte
    #[error("length range overflows: min length {min_length} with {group_count} groups")]
    LengthOverflow { min_length: u8, group_count: usize },

    /// Underlying stream failure while reading the header
    #[error("I/O error reading header: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = Error::CorpusCorrupt {
            path: PathBuf::from("corpus/nouns.bin"),
            source: HeaderError::ZeroWidth,
        };
        let msg = err.to_string();
        assert!(msg.contains("corpus/nouns.bin"));
        assert!(msg.contains("record width is zero"));
    }

    #[test]
    fn test_header_error_converts() {
        let err: Error = HeaderError::EmptyTable.into();
        assert!(matches!(err, Error::Header(HeaderError::EmptyTable)));
    }
}
