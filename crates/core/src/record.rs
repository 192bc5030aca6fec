//! Fixed-width record padding and trimming.
//!
//! Words are stored right-padded with spaces to the corpus record width,
//! with no delimiters between records.
//!
//! # Padding Rules
//! - `pad_record`: appends `0x20` bytes up to the width; never truncates
//! - `trim_record`: strips trailing spaces, whitespace and NUL bytes
//!
//! # Example
//! ```
//! use spicy_core::record::{pad_record, trim_record};
//!
//! let record = pad_record("fox", 6).unwrap();
//! assert_eq!(record, b"fox   ");
//! assert_eq!(trim_record(&record), b"fox");
//! ```

use crate::error::{Error, Result};
use std::io::{ErrorKind, Read, Seek, SeekFrom};

/// Padding byte used to fill records to their fixed width
pub const PAD_BYTE: u8 = b' ';

/// Pad `word` to exactly `width` bytes.
///
/// # Errors
/// Returns `Error::RecordTooWide` if the word is empty or longer than
/// `width` bytes.
pub fn pad_record(word: &str, width: u8) -> Result<Vec<u8>> {
    let bytes = word.as_bytes();
    if bytes.is_empty() || bytes.len() > width as usize {
        return Err(Error::RecordTooWide {
            word: word.to_string(),
            width,
        });
    }

    let mut record = Vec::with_capacity(width as usize);
    record.extend_from_slice(bytes);
    record.resize(width as usize, PAD_BYTE);
    Ok(record)
}

/// Strip trailing padding from a raw record.
pub fn trim_record(record: &[u8]) -> &[u8] {
    let end = record
        .iter()
        .rposition(|&b| !(b.is_ascii_whitespace() || b == 0))
        .map_or(0, |i| i + 1);
    &record[..end]
}

/// Seek to `offset` and read one record of `width` bytes.
///
/// # Errors
/// - `Error::ShortRead` if fewer than `width` bytes remain
/// - `Error::Io` on seek/read failure
pub fn read_record<R: Read + Seek>(reader: &mut R, offset: u64, width: u8) -> Result<Vec<u8>> {
    reader.seek(SeekFrom::Start(offset))?;

    let mut record = vec![0u8; width as usize];
    let mut filled = 0;
    while filled < record.len() {
        match reader.read(&mut record[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    if filled < record.len() {
        return Err(Error::ShortRead {
            offset,
            expected: record.len(),
            actual: filled,
        });
    }

    Ok(record)
}

/// Read one record and decode it as a trimmed UTF-8 word.
pub fn read_word<R: Read + Seek>(reader: &mut R, offset: u64, width: u8) -> Result<String> {
    let record = read_record(reader, offset, width)?;
    let trimmed = trim_record(&record).to_vec();
    String::from_utf8(trimmed).map_err(|source| Error::InvalidWord { offset, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_pad_exact_width() {
        assert_eq!(pad_record("abcdef", 6).unwrap(), b"abcdef");
    }

    #[test]
    fn test_pad_too_wide() {
        let result = pad_record("abcdefg", 6);
        assert!(matches!(result, Err(Error::RecordTooWide { width: 6, .. })));
    }

    #[test]
    fn test_pad_empty() {
        assert!(pad_record("", 6).is_err());
    }

    #[test]
    fn test_trim_padding_variants() {
        assert_eq!(trim_record(b"dog   "), b"dog");
        assert_eq!(trim_record(b"dog\0\0\0"), b"dog");
        assert_eq!(trim_record(b"dog \t\n"), b"dog");
        assert_eq!(trim_record(b"      "), b"");
        assert_eq!(trim_record(b"ice cap "), b"ice cap");
    }

    #[test]
    fn test_read_record_at_offset() {
        let mut cursor = Cursor::new(b"cat   dog   fox   ".to_vec());
        assert_eq!(read_record(&mut cursor, 6, 6).unwrap(), b"dog   ");
        assert_eq!(read_word(&mut cursor, 12, 6).unwrap(), "fox");
        // Random access: going backwards works too
        assert_eq!(read_word(&mut cursor, 0, 6).unwrap(), "cat");
    }

    #[test]
    fn test_short_read() {
        let mut cursor = Cursor::new(b"cat   do".to_vec());
        let result = read_record(&mut cursor, 6, 6);
        assert!(matches!(
            result,
            Err(Error::ShortRead {
                offset: 6,
                expected: 6,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut cursor = Cursor::new(vec![0xFF, 0xFE, b' ', b' ']);
        let result = read_word(&mut cursor, 0, 4);
        assert!(matches!(result, Err(Error::InvalidWord { offset: 0, .. })));
    }
}
