//! A single play-through, from picking the secret to winning or losing

use crate::{
    dictionary::Dictionary,
    error::{GuessError, SetupError},
    feedback::{evaluate, GuessResult},
    types::Word,
};
use rand::{seq::SliceRandom, Rng};

/// Where a session is in its lifecycle
///
/// `Won` and `Lost` are terminal, a session never leaves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The player still has guesses left and has not found the secret
    InProgress,
    /// The secret was guessed
    Won,
    /// All guesses are used up without finding the secret
    Lost,
}

impl GameStatus {
    /// Returns true iff no further guesses are accepted
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// The state of one game
///
/// The session borrows the [`Dictionary`] to validate guesses and owns everything else.
#[derive(Debug)]
pub struct GameSession<'d> {
    dictionary: &'d Dictionary,
    secret: Word,
    max_guesses: usize,
    history: Vec<GuessResult>,
    status: GameStatus,
}

impl<'d> GameSession<'d> {
    /// Start a new game
    ///
    /// The length of the secret is chosen uniformly among all lengths in
    /// `char_min..=char_max` that have at least one word in the dictionary,
    /// then the secret is drawn from the words of that length.
    ///
    /// # Errors
    ///
    /// - [`SetupError::InvalidConfiguration`] if `char_min > char_max` or `max_guesses` is zero
    /// - [`SetupError::NoWordsOfLength`] if the dictionary has no word in the length range
    pub fn new<R>(
        dictionary: &'d Dictionary,
        char_min: usize,
        char_max: usize,
        max_guesses: usize,
        rng: &mut R,
    ) -> Result<Self, SetupError>
    where
        R: Rng + ?Sized,
    {
        if char_min > char_max {
            return Err(SetupError::InvalidConfiguration(
                "the minimum word length must not exceed the maximum word length",
            ));
        }
        if max_guesses == 0 {
            return Err(SetupError::InvalidConfiguration(
                "the player needs at least one guess",
            ));
        }

        let lengths = dictionary
            .lengths()
            .filter(|len| (char_min..=char_max).contains(len))
            .collect::<Vec<_>>();
        let length = *lengths
            .choose(rng)
            .ok_or(SetupError::NoWordsOfLength(char_min..=char_max))?;

        let secret = dictionary.random_word(length, rng)?;
        tracing::debug!(length, max_guesses, "started new game");

        Ok(Self {
            dictionary,
            secret,
            max_guesses,
            history: Vec::with_capacity(max_guesses),
            status: GameStatus::InProgress,
        })
    }

    /// Play one guess
    ///
    /// The text is trimmed and its case is normalized before it is checked.
    /// On success, the feedback is recorded in the history and returned.
    ///
    /// # Errors
    ///
    /// The session is left unchanged and no guess is used up if
    /// - [`GuessError::GameAlreadyOver`]: the game was already won or lost
    /// - [`GuessError::InvalidGuessLength`]: the guess has not the same length as the secret
    /// - [`GuessError::UnknownWord`]: the guess is not in the dictionary
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessResult, GuessError> {
        if self.status.is_over() {
            tracing::trace!(status = ?self.status, "rejected guess after the game ended");
            return Err(GuessError::GameAlreadyOver);
        }

        let text = text.trim();
        let actual = text.chars().count();
        if actual != self.length() {
            tracing::trace!(actual, expected = self.length(), "rejected guess length");
            return Err(GuessError::InvalidGuessLength {
                expected: self.length(),
                actual,
            });
        }

        let guess = match Word::parse(text) {
            Ok(guess) if self.dictionary.contains(&guess) => guess,
            _ => {
                tracing::trace!(guess = text, "rejected unknown word");
                return Err(GuessError::UnknownWord(text.to_uppercase()));
            }
        };

        let result = evaluate(&self.secret, &guess);
        self.history.push(result.clone());

        self.status = if guess == self.secret {
            GameStatus::Won
        } else if self.history.len() == self.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        tracing::debug!(
            attempt = self.history.len(),
            remaining = self.remaining_guesses(),
            status = ?self.status,
            "accepted guess"
        );

        Ok(result)
    }

    /// Return the secret, regardless of the state of the game
    ///
    /// Callers are expected to only show this in debug mode or after the game is over.
    #[must_use]
    pub const fn reveal_secret(&self) -> &Word {
        &self.secret
    }

    /// The number of guesses the player has left
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses - self.history.len()
    }

    /// The current state of the game
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The number of letters of the secret, and so of every guess
    #[must_use]
    pub fn length(&self) -> usize {
        self.secret.len()
    }

    /// The total number of guesses for this game
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// The feedback of all accepted guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }
}
