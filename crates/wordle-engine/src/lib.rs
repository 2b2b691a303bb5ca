/*!
The game engine behind a Wordle style guessing game.

A [`Dictionary`] indexes all known words by their length. A [`GameSession`] picks a
secret from it and checks every guess, handing back a [`GuessResult`] with the
[`LetterStatus`] of each letter, until the player found the secret or ran out of guesses.

The engine never reads files or prints anything. Loading the word list, reading input, and
presenting the feedback is left to the caller.

# Example

```rust
use rand::{rngs::StdRng, SeedableRng};
use wordle_engine::{Dictionary, GameSession, GameStatus, GuessError, LetterStatus};

// Build the dictionary from some word list - only words with 5 letters are kept
let dictionary = Dictionary::build(["crane", "trace", "party", "morty", "toy"], 5, 5)?;
assert_eq!(dictionary.len(), 4);

// Start a game with 5-letter words and 6 guesses
// The random source is injected, a seeded one makes the secret reproducible
let mut rng = StdRng::seed_from_u64(42);
let mut session = GameSession::new(&dictionary, 5, 5, 6, &mut rng)?;
assert_eq!(session.length(), 5);

// Guesses that are not in the dictionary are rejected and don't use up a guess
assert_eq!(
    session.submit_guess("xxxxx"),
    Err(GuessError::UnknownWord(String::from("XXXXX")))
);
assert_eq!(session.remaining_guesses(), 6);

// Let's peek at the secret and guess it
let secret = session.reveal_secret().to_string();
let feedback = session.submit_guess(&secret)?;

assert!(feedback.statuses().all(|status| status == LetterStatus::Correct));
assert_eq!(session.status(), GameStatus::Won);

// The game is over, no more guesses are accepted
assert_eq!(session.submit_guess("crane"), Err(GuessError::GameAlreadyOver));
# Ok::<(), Box<dyn std::error::Error>>(())
```

The feedback takes repeated letters into account. A letter is never marked more often
than it appears in the secret, and exact matches take precedence.

```rust
use wordle_engine::{evaluate, LetterStatus::*, Word};

let secret: Word = "alloy".parse()?;
let guess: Word = "llama".parse()?;

let statuses = evaluate(&secret, &guess).statuses().collect::<Vec<_>>();
assert_eq!(statuses, [Present, Correct, Present, Absent, Absent]);
# Ok::<(), wordle_engine::InvalidWord>(())
```
*/

#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_crate_dependencies,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod session;
pub mod types;

pub use dictionary::Dictionary;
pub use error::{GuessError, InvalidWord, SetupError};
pub use feedback::{evaluate, GuessResult, LetterStatus};
pub use session::{GameSession, GameStatus};
pub use types::{Letter, LetterCounts, Word};
