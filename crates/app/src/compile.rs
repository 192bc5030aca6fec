//! Corpus compilation from plain word lists.
//!
//! Input is one word per line. Surrounding whitespace is trimmed; blank
//! lines and lines starting with `#` are skipped. Words keep their input
//! order within each length, so the same input always yields the same
//! bytes.

use anyhow::{Context, Result};
use spicy_core::{CorpusBuilder, CorpusHeader};
use std::io::BufRead;
use std::path::Path;

/// Collect words from a line-oriented reader.
pub fn read_word_list<R: BufRead>(reader: R) -> Result<CorpusBuilder> {
    let mut builder = CorpusBuilder::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", number + 1))?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        builder.push(word);
    }
    Ok(builder)
}

/// Compile `input` into a corpus file at `output`, returning its header.
pub fn compile_file(input: &Path, output: &Path, width: Option<u8>) -> Result<CorpusHeader> {
    let file = std::fs::File::open(input)
        .with_context(|| format!("Failed to open word list: {}", input.display()))?;
    let mut builder = read_word_list(std::io::BufReader::new(file))?;
    if let Some(width) = width {
        builder = builder.with_width(width);
    }

    let header = builder
        .header()
        .with_context(|| format!("Cannot build corpus from {}", input.display()))?;
    let bytes = builder.build()?;
    std::fs::write(output, bytes)
        .with_context(|| format!("Failed to write corpus: {}", output.display()))?;

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        words = header.total_words(),
        "compiled corpus"
    );

    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spicy_core::{ScriptedRandom, WordList};

    #[test]
    fn test_skips_blanks_and_comments() {
        let input = "# colors\nred\n\n  teal  \n#ignored\nblue\n";
        let builder = read_word_list(input.as_bytes()).unwrap();
        assert_eq!(builder.len(), 3);

        let header = builder.header().unwrap();
        assert_eq!(header.min_length(), 3);
        assert_eq!(header.max_length(), 4);
        assert_eq!(header.cumulative(), &[1, 3]);
    }

    #[test]
    fn test_compile_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("nouns.txt");
        let output = dir.path().join("nouns.bin");
        std::fs::write(&input, "otter\nyak\nheron\n").unwrap();

        let header = compile_file(&input, &output, Some(8)).unwrap();
        assert_eq!(header.record_width(), 8);
        assert_eq!(header.total_words(), 3);

        let mut list = WordList::open(&output).unwrap();
        let mut source = ScriptedRandom::new([0, 2]);
        assert_eq!(list.word(None, None, &mut source).unwrap(), "yak");
        assert_eq!(list.word(None, None, &mut source).unwrap(), "heron");
    }

    #[test]
    fn test_shipped_corpus_matches_sources() {
        let corpus_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../corpus");
        for name in ["adjectives", "nouns", "colors"] {
            let source = std::fs::File::open(corpus_dir.join(format!("{name}.txt"))).unwrap();
            let built = read_word_list(std::io::BufReader::new(source))
                .unwrap()
                .build()
                .unwrap();
            let shipped = std::fs::read(corpus_dir.join(format!("{name}.bin"))).unwrap();
            assert_eq!(built, shipped, "{name}.bin is stale");
        }
    }

    #[test]
    fn test_empty_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.txt");
        std::fs::write(&input, "# nothing here\n").unwrap();

        let result = compile_file(&input, &dir.path().join("out.bin"), None);
        assert!(result.is_err());
        assert!(!dir.path().join("out.bin").exists());
    }
}
