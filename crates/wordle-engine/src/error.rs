//! Errors raised while setting up a game or while playing it

use std::ops::RangeInclusive;
use thiserror::Error;

/// Input that cannot be turned into a [`Word`](crate::Word)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidWord {
    /// Nothing but whitespace
    #[error("a word must have at least one letter")]
    Empty,
    /// Only ASCII letters are allowed
    #[error("'{0}' is not a letter, only [a-zA-Z] are allowed")]
    NotALetter(char),
}

/// Errors that prevent a dictionary or a game session from being created
///
/// These are fatal to the setup, no partial value is ever returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No word of the source survived the length filter
    #[error("the word list has no words with {min} to {max} letters", min = .0.start(), max = .0.end())]
    EmptyDictionary(RangeInclusive<usize>),
    /// There is no word to pick from for any of the requested lengths
    #[error("there are no words with {min} to {max} letters", min = .0.start(), max = .0.end())]
    NoWordsOfLength(RangeInclusive<usize>),
    /// Word length bounds or guess limit are out of range
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Errors for a single guess
///
/// A rejected guess leaves the session untouched, the player can simply try again.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The session is already won or lost
    #[error("the game is already over")]
    GameAlreadyOver,
    /// The guess does not have as many letters as the secret
    #[error("the guess must have exactly {expected} letters, but it has {actual}")]
    InvalidGuessLength {
        /// Length of the secret
        expected: usize,
        /// Length of the submitted guess
        actual: usize,
    },
    /// The guess is not part of the dictionary
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),
}
