//! Per-letter feedback for a guess against the secret

use crate::types::{Letter, LetterCounts, Word};
use smallvec::SmallVec;

/// The feedback for a single letter of a guess
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Correct letter in correct position
    ///
    /// This is the green result in the game
    Correct,
    /// Letter is part of the secret, but in a different position
    ///
    /// This is the yellow result in the game
    Present,
    /// Letter is not part of the secret, or all of its occurrences are already accounted for
    ///
    /// This is the darkened result in the game
    Absent,
}

/// The feedback for a full guess, one entry per letter in the order of the guess
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GuessResult(SmallVec<[(Letter, LetterStatus); 16]>);

impl GuessResult {
    /// Iterate over each letter of the guess together with its status
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Letter, LetterStatus)> + '_ {
        self.0.iter().copied()
    }

    /// Iterate over the status of each position
    pub fn statuses(&self) -> impl ExactSizeIterator<Item = LetterStatus> + '_ {
        self.0.iter().map(|(_, status)| *status)
    }

    /// The guess that this feedback was computed for
    #[must_use]
    pub fn word(&self) -> Word {
        Word(self.0.iter().map(|(letter, _)| *letter).collect())
    }

    /// The number of letters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true iff there is no letter, which never happens for an evaluated guess
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is in its correct position, i.e. the guess is the secret
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.statuses().all(|status| status == LetterStatus::Correct)
    }
}

impl<'a> IntoIterator for &'a GuessResult {
    type Item = &'a (Letter, LetterStatus);

    type IntoIter = std::slice::Iter<'a, (Letter, LetterStatus)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Compute the feedback for `guess` against `secret`
///
/// Exact matches are resolved first and consume their occurrence of the letter,
/// only the remaining occurrences can mark a letter as [`LetterStatus::Present`],
/// from left to right.
///
/// # Panics
///
/// Panics if the words differ in length
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> GuessResult {
    assert_eq!(
        secret.len(),
        guess.len(),
        "secret and guess must have the same length"
    );

    let mut available = LetterCounts::of(secret);
    let mut result = guess
        .iter()
        .zip(secret.iter())
        .map(|(g, s)| {
            if g == s {
                let _ = available.take(g);
                (g, LetterStatus::Correct)
            } else {
                (g, LetterStatus::Absent)
            }
        })
        .collect::<SmallVec<[_; 16]>>();

    for (letter, status) in &mut result {
        if *status != LetterStatus::Correct && available.take(*letter) {
            *status = LetterStatus::Present;
        }
    }

    GuessResult(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use LetterStatus::{Absent, Correct, Present};

    fn check(secret: &str, guess: &str) -> Vec<LetterStatus> {
        let secret = Word::parse(secret).unwrap();
        let guess = Word::parse(guess).unwrap();
        evaluate(&secret, &guess).statuses().collect()
    }

    #[test]
    fn test_all_correct() {
        let secret = Word::parse("crane").unwrap();
        let result = evaluate(&secret, &secret);
        assert!(result.is_solved());
        assert_eq!(result.word(), secret);
    }

    #[test]
    fn test_all_absent() {
        assert_eq!(check("dream", "quick"), [Absent; 5]);
    }

    #[test]
    fn test_mixed() {
        assert_eq!(
            check("crane", "trace"),
            [Absent, Correct, Correct, Present, Correct]
        );
        assert_eq!(
            check("charm", "crane"),
            [Correct, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn test_exact_match_consumes_before_present() {
        // the second L is exact, only one L is left for the first position
        // the first A takes the only A, the second one is absent
        assert_eq!(
            check("alloy", "llama"),
            [Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn test_exact_match_later_in_the_word() {
        // the last E is exact, so only one E is left for the first two positions
        assert_eq!(
            check("there", "eerie"),
            [Present, Absent, Present, Absent, Correct]
        );
        assert_eq!(
            check("creep", "speed"),
            [Absent, Present, Correct, Correct, Absent]
        );
        assert_eq!(
            check("creep", "geese"),
            [Absent, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn test_duplicate_letters_in_secret() {
        assert_eq!(
            check("creep", "arose"),
            [Absent, Correct, Absent, Absent, Present]
        );
        assert_eq!(
            check("those", "sores"),
            [Present, Present, Absent, Present, Absent]
        );
    }

    #[test]
    fn test_keeps_guess_letters_in_order() {
        let secret = Word::parse("crane").unwrap();
        let guess = Word::parse("trace").unwrap();
        let result = evaluate(&secret, &guess);

        assert_eq!(result.len(), 5);
        assert_eq!(result.word(), guess);
        let letters = result.iter().map(|(l, _)| char::from(l)).collect::<String>();
        assert_eq!(letters, "TRACE");
    }

    #[test]
    fn test_other_lengths() {
        assert_eq!(check("tree", "reed"), [Present, Present, Correct, Absent]);
        assert_eq!(
            check("garden", "danger"),
            [Present, Correct, Present, Present, Correct, Present]
        );
    }

    #[test]
    fn test_many_repeated_letters() {
        // 299 A's in both words, the guess has one exact A less than the secret
        let secret = format!("{}b", "a".repeat(299));
        let guess = format!("b{}", "a".repeat(299));
        let statuses = check(&secret, &guess);

        assert_eq!(statuses.len(), 300);
        assert_eq!(statuses[0], Present);
        assert!(statuses[1..299].iter().all(|&status| status == Correct));
        assert_eq!(statuses[299], Present);
    }

    #[test]
    #[should_panic(expected = "secret and guess must have the same length")]
    fn test_length_mismatch() {
        let _ = check("crane", "tree");
    }

    fn word_pair() -> impl Strategy<Value = (Word, Word)> {
        (1_usize..=8).prop_flat_map(|len| {
            let word = proptest::collection::vec(b'a'..=b'f', len)
                .prop_map(|bytes| Word::from_letters(&bytes).unwrap());
            (word.clone(), word)
        })
    }

    proptest! {
        #[test]
        fn prop_guessing_the_secret_is_all_correct(pair in word_pair()) {
            let (secret, _) = pair;
            prop_assert!(evaluate(&secret, &secret).is_solved());
        }

        #[test]
        fn prop_never_more_hits_than_occurrences(pair in word_pair()) {
            let (secret, guess) = pair;
            let result = evaluate(&secret, &guess);
            let in_secret = LetterCounts::of(&secret);
            let mut hits = LetterCounts::new();
            for (letter, status) in result.iter() {
                if status != Absent {
                    hits.add(letter);
                }
            }
            for letter in guess.iter() {
                prop_assert!(hits.get(letter) <= in_secret.get(letter));
            }
        }

        #[test]
        fn prop_correct_iff_same_letter(pair in word_pair()) {
            let (secret, guess) = pair;
            let result = evaluate(&secret, &guess);
            for ((_, status), (s, g)) in result.iter().zip(secret.iter().zip(guess.iter())) {
                prop_assert_eq!(status == Correct, s == g);
            }
        }

        #[test]
        fn prop_evaluate_is_pure(pair in word_pair()) {
            let (secret, guess) = pair;
            prop_assert_eq!(evaluate(&secret, &guess), evaluate(&secret, &guess));
        }
    }
}
