//! The index of all words that can be a secret or a guess

use crate::{error::SetupError, types::Word};
use fst::{Set, Streamer};
use rand::Rng;
use std::collections::BTreeMap;

/// All valid words, grouped by their length
///
/// Every length is backed by its own FST set, so membership tests are cheap and
/// the whole index is immutable once built. Share it by reference between sessions.
#[derive(Debug)]
pub struct Dictionary {
    by_length: BTreeMap<usize, Set<Vec<u8>>>,
    discarded: usize,
}

impl Dictionary {
    /// Build the index from a word source, one word per item
    ///
    /// Words are trimmed and uppercased. Items that are not made up of letters only,
    /// as well as words that are shorter than `char_min` or longer than `char_max`,
    /// are discarded. Duplicates are removed.
    ///
    /// # Errors
    ///
    /// - [`SetupError::InvalidConfiguration`] if `char_min` is zero or larger than `char_max`
    /// - [`SetupError::EmptyDictionary`] if no word survives the filter
    pub fn build<I>(source: I, char_min: usize, char_max: usize) -> Result<Self, SetupError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if char_min == 0 {
            return Err(SetupError::InvalidConfiguration(
                "words must have at least one letter",
            ));
        }
        if char_min > char_max {
            return Err(SetupError::InvalidConfiguration(
                "the minimum word length must not exceed the maximum word length",
            ));
        }

        let mut scanned = 0_usize;
        let mut grouped = BTreeMap::<usize, Vec<Vec<u8>>>::new();

        for item in source {
            scanned += 1;
            let Ok(word) = Word::parse(item.as_ref()) else {
                continue;
            };
            if !(char_min..=char_max).contains(&word.len()) {
                continue;
            }
            grouped
                .entry(word.len())
                .or_default()
                .push(word.bytes().collect());
        }

        let by_length = grouped
            .into_iter()
            .map(|(len, mut words)| {
                words.sort_unstable();
                words.dedup();
                let set = Set::from_iter(words).expect("words are sorted and deduplicated");
                (len, set)
            })
            .collect::<BTreeMap<_, _>>();

        let dictionary = Self {
            by_length,
            discarded: 0,
        };
        let kept = dictionary.len();
        if kept == 0 {
            return Err(SetupError::EmptyDictionary(char_min..=char_max));
        }

        let discarded = scanned - kept;
        tracing::debug!(
            scanned,
            kept,
            discarded,
            lengths = ?dictionary.lengths().collect::<Vec<_>>(),
            "built dictionary"
        );

        Ok(Self {
            discarded,
            ..dictionary
        })
    }

    /// Pick a uniformly random word of exactly `length` letters
    ///
    /// # Errors
    ///
    /// [`SetupError::NoWordsOfLength`] if the dictionary has no word of that length
    pub fn random_word<R>(&self, length: usize, rng: &mut R) -> Result<Word, SetupError>
    where
        R: Rng + ?Sized,
    {
        let set = self
            .by_length
            .get(&length)
            .filter(|set| !set.is_empty())
            .ok_or(SetupError::NoWordsOfLength(length..=length))?;

        let target = rng.gen_range(0..set.len());
        let mut stream = set.stream();
        for _ in 0..target {
            let _ = stream.next();
        }

        // every key in the set was built from a valid word
        let key = stream.next().expect("target is smaller than the set length");
        Ok(Word::from_letters(key).expect("dictionary keys are letters only"))
    }

    /// Test if the word is known
    ///
    /// Only the words of the same length as `word` are considered.
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.by_length
            .get(&word.len())
            .is_some_and(|set| set.contains(word.to_key()))
    }

    /// Test if the text is a known word after normalizing it
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::parse(text).is_ok_and(|word| self.contains(&word))
    }

    /// All word lengths with at least one word, in ascending order
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_length
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(len, _)| *len)
    }

    /// The number of words with exactly `length` letters
    #[must_use]
    pub fn count(&self, length: usize) -> usize {
        self.by_length.get(&length).map_or(0, Set::len)
    }

    /// The total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_length.values().map(Set::len).sum()
    }

    /// Returns true iff there are no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of source items that were not taken into the dictionary
    ///
    /// Counts invalid words, words of the wrong length, and duplicates.
    #[must_use]
    pub const fn discarded(&self) -> usize {
        self.discarded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::mock::StepRng, rngs::StdRng, SeedableRng};

    fn words(dictionary: &Dictionary, length: usize) -> Vec<String> {
        dictionary.by_length[&length]
            .stream()
            .into_strs()
            .unwrap()
    }

    #[test]
    fn test_build_filters_and_normalizes() {
        let dictionary = Dictionary::build(
            ["crane", "Trace", "  alloy ", "cat", "abcdefg", "no-go", "", "CRANE"],
            4,
            6,
        )
        .unwrap();

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.count(5), 3);
        assert_eq!(dictionary.count(3), 0);
        assert_eq!(dictionary.discarded(), 5);
        assert_eq!(dictionary.lengths().collect::<Vec<_>>(), vec![5]);
        assert_eq!(words(&dictionary, 5), vec!["ALLOY", "CRANE", "TRACE"]);
    }

    #[test]
    fn test_build_groups_by_length() {
        let dictionary =
            Dictionary::build(["tree", "house", "garden", "bee", "mice"], 3, 6).unwrap();

        assert_eq!(dictionary.lengths().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
        assert_eq!(dictionary.count(4), 2);
        assert_eq!(words(&dictionary, 4), vec!["MICE", "TREE"]);
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn test_build_empty() {
        let err = Dictionary::build(["cat", "dog"], 4, 5).unwrap_err();
        assert_eq!(err, SetupError::EmptyDictionary(4..=5));

        let err = Dictionary::build(Vec::<String>::new(), 4, 5).unwrap_err();
        assert_eq!(err, SetupError::EmptyDictionary(4..=5));
    }

    #[test]
    fn test_build_invalid_bounds() {
        assert!(matches!(
            Dictionary::build(["crane"], 0, 5),
            Err(SetupError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Dictionary::build(["crane"], 6, 5),
            Err(SetupError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_contains() {
        let dictionary = Dictionary::build(["crane", "tree"], 4, 5).unwrap();

        assert!(dictionary.contains(&Word::parse("CRANE").unwrap()));
        assert!(dictionary.contains(&Word::parse("tree").unwrap()));
        assert!(!dictionary.contains(&Word::parse("trees").unwrap()));
        assert!(!dictionary.contains(&Word::parse("cran").unwrap()));
        assert!(!dictionary.contains(&Word::parse("cranes").unwrap()));

        assert!(dictionary.contains_str(" Crane "));
        assert!(!dictionary.contains_str("cr4ne"));
        assert!(!dictionary.contains_str(""));
    }

    #[test]
    fn test_random_word_picks_by_index() {
        let dictionary = Dictionary::build(["delta", "alpha", "gamma", "bravo"], 5, 5).unwrap();

        let mut rng = StepRng::new(0, 0);
        assert_eq!(
            dictionary.random_word(5, &mut rng).unwrap().to_string(),
            "ALPHA"
        );
    }

    #[test]
    fn test_random_word_has_requested_length() {
        let dictionary =
            Dictionary::build(["tree", "mice", "house", "crane", "garden"], 4, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let word = dictionary.random_word(5, &mut rng).unwrap();
            assert_eq!(word.len(), 5);
            assert!(dictionary.contains(&word));
        }
    }

    #[test]
    fn test_random_word_covers_all_words() {
        let dictionary = Dictionary::build(["alpha", "bravo", "delta"], 5, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            let _ = seen.insert(dictionary.random_word(5, &mut rng).unwrap().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_random_word_missing_length() {
        let dictionary = Dictionary::build(["tree", "garden"], 4, 6).unwrap();
        let mut rng = StepRng::new(0, 0);

        assert_eq!(
            dictionary.random_word(5, &mut rng).unwrap_err(),
            SetupError::NoWordsOfLength(5..=5)
        );
    }
}
