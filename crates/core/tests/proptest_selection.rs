//! Property-based tests for header decoding and word selection.

use proptest::prelude::*;
use spicy_core::{CorpusBuilder, CorpusHeader, Error, ScriptedRandom, WordList};
use std::io::Cursor;

// Strategy for lowercase words of 1 to 12 bytes
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..=40)
}

fn open(words: &[String]) -> WordList<Cursor<Vec<u8>>> {
    let builder: CorpusBuilder = words.iter().cloned().collect();
    WordList::from_reader(Cursor::new(builder.build().unwrap())).unwrap()
}

proptest! {
    #[test]
    fn decoded_header_invariants(
        width in 1u8..=64,
        min_length in 0u8..=32,
        counts in prop::collection::vec(0u32..1000, 1..=32),
    ) {
        // Per-bucket counts to running totals
        let cumulative: Vec<u32> = counts
            .iter()
            .scan(0u32, |t, c| { *t += c; Some(*t) })
            .collect();
        let encoded = CorpusHeader::new(width, min_length, cumulative.clone()).unwrap().encode();

        let header = CorpusHeader::decode(&mut Cursor::new(encoded)).unwrap();
        prop_assert_eq!(
            header.max_length() as usize,
            min_length as usize + header.group_count() as usize - 1
        );
        prop_assert!(header.cumulative().windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(header.cumulative(), &cumulative[..]);
    }

    #[test]
    fn words_respect_clamped_bounds(
        words in corpus_strategy(),
        min in proptest::option::of(0u8..20),
        max in proptest::option::of(0u8..20),
        seed in any::<u64>(),
    ) {
        let mut list = open(&words);
        let (corpus_min, corpus_max) = (*list.length_range().start(), *list.length_range().end());
        let mut source = spicy_core::SeededRandom::new(seed);

        match (min, max) {
            (Some(lo), Some(hi)) if lo > hi => {
                let result = list.word(min, max, &mut source);
                prop_assert!(
                    matches!(result, Err(Error::InvalidRange { .. })),
                    "expected InvalidRange for {}..={}", lo, hi
                );
            }
            _ => {
                let lo = min.unwrap_or(corpus_min).clamp(corpus_min, corpus_max);
                let hi = max.unwrap_or(corpus_max).clamp(corpus_min, corpus_max);
                match list.word(min, max, &mut source) {
                    Ok(word) => {
                        prop_assert!(word.len() >= lo as usize && word.len() <= hi as usize);
                    }
                    Err(Error::NoWordsInRange { .. }) => {
                        prop_assert!(words.iter().all(|w| w.len() < lo as usize || w.len() > hi as usize));
                    }
                    Err(e) => prop_assert!(false, "unexpected error: {}", e),
                }
            }
        }
    }

    #[test]
    fn draw_selects_record_at_index(words in corpus_strategy(), pick in any::<prop::sample::Index>()) {
        let mut list = open(&words);
        let draw = pick.index(list.total_words() as usize) as u64;

        let mut source = ScriptedRandom::new([draw]);
        let drawn = list.word(None, None, &mut source).unwrap();

        let mut sorted = words.clone();
        sorted.sort_by_key(|w| w.len());
        prop_assert_eq!(&drawn, &sorted[draw as usize]);
        prop_assert_eq!(drawn, list.word_at(draw as u32).unwrap());
    }
}
