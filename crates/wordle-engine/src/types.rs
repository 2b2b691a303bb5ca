//! Letters and words, the value types every other part of the engine works with

use crate::error::InvalidWord;
use smallvec::SmallVec;
use std::{fmt, str::FromStr};

/// A possible letter, can only be ASCII characters, i.e. [a-zA-Z]
///
/// Letters are case-insensitive and always render as uppercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Letter(u8);

impl Letter {
    /// Create a new letter
    ///
    /// Returns None if the letter is not in [a-zA-Z]
    #[must_use]
    pub const fn try_new(b: u8) -> Option<Self> {
        match b {
            b'a'..=b'z' => Some(Self(b - b'a')),
            b'A'..=b'Z' => Some(Self(b - b'A')),
            _ => None,
        }
    }

    /// Create a new letter
    ///
    /// # Panics
    /// Panics if the letter is not in [a-zA-Z]
    #[must_use]
    pub const fn new(b: u8) -> Self {
        match b {
            b'a'..=b'z' => Self(b - b'a'),
            b'A'..=b'Z' => Self(b - b'A'),
            _ => panic!("Invalid letter, only accept [a-zA-Z]"),
        }
    }

    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<Letter> for u8 {
    fn from(letter: Letter) -> Self {
        b'A' + letter.0
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        Self::from(u8::from(letter))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, char::from(*self))
    }
}

/// How often each letter occurs, one counter per letter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LetterCounts([usize; 26]);

impl LetterCounts {
    /// Create a table where every letter has a count of zero
    #[must_use]
    pub const fn new() -> Self {
        Self([0; 26])
    }

    /// Count every letter of the given word
    #[must_use]
    pub fn of(word: &Word) -> Self {
        word.iter().fold(Self::new(), |mut counts, letter| {
            counts.add(letter);
            counts
        })
    }

    /// Return the current count for a letter, O(1)
    #[must_use]
    pub const fn get(&self, letter: Letter) -> usize {
        self.0[letter.index()]
    }

    /// Increment the count for a letter, O(1)
    pub fn add(&mut self, letter: Letter) {
        self.0[letter.index()] += 1;
    }

    /// Decrement the count for a letter if it is not already zero
    ///
    /// Returns true if an occurrence was available and has been taken
    pub fn take(&mut self, letter: Letter) -> bool {
        let count = &mut self.0[letter.index()];
        if *count == 0 {
            false
        } else {
            *count -= 1;
            true
        }
    }
}

impl Default for LetterCounts {
    fn default() -> Self {
        Self::new()
    }
}

/// A word made up of [`Letter`]s, never empty
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(pub(crate) SmallVec<[Letter; 16]>);

impl Word {
    /// Parse a word from user or word list input
    ///
    /// Surrounding whitespace is ignored and the case is normalized.
    ///
    /// # Errors
    ///
    /// [`InvalidWord`] if the input is empty or contains anything but ASCII letters
    pub fn parse(text: &str) -> Result<Self, InvalidWord> {
        let text = text.trim();
        if text.is_empty() {
            return Err(InvalidWord::Empty);
        }

        text.chars()
            .map(|c| {
                u8::try_from(c)
                    .ok()
                    .and_then(Letter::try_new)
                    .ok_or(InvalidWord::NotALetter(c))
            })
            .collect::<Result<SmallVec<_>, _>>()
            .map(Self)
    }

    /// Create a word from bytes that are known to be letters, e.g. from a dictionary
    pub(crate) fn from_letters(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }
        bytes
            .iter()
            .copied()
            .map(Letter::try_new)
            .collect::<Option<SmallVec<_>>>()
            .map(Self)
    }

    /// The number of letters in this word
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, a word has at least one letter
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the letter at the given position
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<Letter> {
        self.0.get(pos).copied()
    }

    /// Iterate over all letters in order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Letter> + '_ {
        self.0.iter().copied()
    }

    /// Iterate over the uppercase ASCII bytes of this word
    pub fn bytes(&self) -> impl ExactSizeIterator<Item = u8> + '_ {
        self.iter().map(u8::from)
    }

    pub(crate) fn to_key(&self) -> SmallVec<[u8; 16]> {
        self.bytes().collect()
    }
}

impl FromStr for Word {
    type Err = InvalidWord;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|letter| fmt::Display::fmt(&letter, f))
    }
}
