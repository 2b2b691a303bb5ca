//! Play Wordle in the terminal
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

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use eyre::{Result, WrapErr};
use rand::{rngs::StdRng, SeedableRng};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, IsTerminal},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing_subscriber::EnvFilter;
use wordle_engine::{Dictionary, GameSession, GameStatus, GuessResult, LetterStatus};

fn main() -> Result<()> {
    eyre::set_hook(Box::new(eyre::DefaultHandler::default_with))?;

    let opts = parse_opts(&command().get_matches());
    init_logging(opts.debug);

    let words = load_word_list(&opts.word_list)?;
    let scanned = words.len();
    let dictionary = Dictionary::build(words, opts.size.min, opts.size.max)
        .wrap_err_with(|| format!("The word list '{}' is not usable.", opts.word_list.display()))?;

    if opts.debug {
        eprintln!(
            "Removed {}/{} words. {} remain.",
            dictionary.discarded(),
            scanned,
            dictionary.len()
        );
    }

    let mut rng = opts.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let mut session = GameSession::new(
        &dictionary,
        opts.size.min,
        opts.size.max,
        opts.guesses.get(),
        &mut rng,
    )?;

    if opts.debug {
        eprintln!(
            "Secret Word: {} ({} chars).",
            session.reveal_secret(),
            session.length()
        );
    }

    let palette = if opts.plain {
        Palette::PLAIN
    } else {
        Palette::EMOJI
    };
    if io::stdin().is_terminal() && console::Term::stderr().is_term() {
        play(&mut session, palette, &mut Terminal)
    } else {
        play(&mut session, palette, &mut Lines(io::stdin().lock()))
    }
}

#[derive(Debug)]
struct Opts {
    word_list: PathBuf,
    size: Size,
    guesses: NonZeroUsize,
    seed: Option<u64>,
    debug: bool,
    plain: bool,
}

/// Inclusive bounds for the length of the secret
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Size {
    min: usize,
    max: usize,
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = |s: &str| s.trim().parse::<usize>().map_err(|e| e.to_string());

        let (min, max) = match s.split_once("..=") {
            Some((min, max)) => (number(min)?, number(max)?),
            None => {
                let size = number(s)?;
                (size, size)
            }
        };

        if min == 0 {
            Err(String::from("Words must have at least one letter"))
        } else if min > max {
            Err(format!("The range {min}..={max} does not contain any length"))
        } else {
            Ok(Self { min, max })
        }
    }
}

fn command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("word-list")
                .value_name("WORD_LIST")
                .required(false)
                .help("The word list to use")
                .long_help(concat!(
                    "The word list to use. ",
                    "The list must contain one word per line. ",
                    "For comma separated lines, only the first column is used. ",
                    "Words with anything but the letters a to z are ignored, ",
                    "as are words that do not fit the --size."
                ))
                .env("WORDLE_WORD_LIST")
                .value_parser(value_parser!(PathBuf))
                .default_value("/usr/share/dict/words"),
        )
        .arg(
            Arg::new("size")
                .help("The number of letters of the secret word, e.g. 5 or 4..=6")
                .long_help(concat!(
                    "The number of letters of the secret word. ",
                    "Either a single number or an inclusive range like 4..=6. ",
                    "For a range, the length of the secret is chosen at random ",
                    "among all lengths that have words in the word list."
                ))
                .short('s')
                .long("size")
                .env("WORDLE_SIZE")
                .value_parser(str::parse::<Size>)
                .default_value("5"),
        )
        .arg(
            Arg::new("guesses")
                .help("How many guesses the player gets")
                .short('g')
                .long("guesses")
                .env("WORDLE_GUESSES")
                .value_parser(str::parse::<NonZeroUsize>)
                .default_value("5"),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for picking the secret word, the same seed picks the same word")
                .long("seed")
                .env("WORDLE_SEED")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("debug")
                .help("Show word list statistics and the secret word")
                .short('d')
                .long("debug")
                .env("WORDLE_DEBUG")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("plain")
                .help("Use plain characters instead of colored squares for the feedback")
                .long("plain")
                .action(ArgAction::SetTrue),
        )
}

fn parse_opts(matches: &ArgMatches) -> Opts {
    let word_list = matches
        .get_one::<PathBuf>("word-list")
        .cloned()
        .expect("word-list has a default value");
    let size = *matches
        .get_one::<Size>("size")
        .expect("size has a default value");
    let guesses = *matches
        .get_one::<NonZeroUsize>("guesses")
        .expect("guesses has a default value");
    let seed = matches.get_one::<u64>("seed").copied();
    let debug = matches.get_flag("debug");
    let plain = matches.get_flag("plain");

    Opts {
        word_list,
        size,
        guesses,
        seed,
        debug,
        plain,
    }
}

fn init_logging(debug: bool) {
    let default = if debug {
        "warn,wordle=debug,wordle_engine=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_word_list(file: &Path) -> Result<Vec<String>> {
    tracing::debug!(path = %file.display(), "loading word list");
    let lines = BufReader::new(
        File::open(file).wrap_err_with(|| format!("The file '{}' is missing.", file.display()))?,
    );

    read_words(lines).wrap_err_with(|| format!("The file '{}' could not be read.", file.display()))
}

fn read_words(lines: impl BufRead) -> Result<Vec<String>> {
    let mut words = Vec::with_capacity(1024);
    for line in lines.lines() {
        if let Some(word) = first_column(&line?) {
            words.push(String::from(word));
        }
    }
    Ok(words)
}

fn first_column(line: &str) -> Option<&str> {
    line.split(',')
        .next()
        .map(str::trim)
        .filter(|word| !word.is_empty())
}

/// Maps the status of a letter to the symbol that is shown to the player
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Palette {
    correct: &'static str,
    present: &'static str,
    absent: &'static str,
    separator: &'static str,
}

impl Palette {
    const EMOJI: Self = Self {
        correct: "\u{1F7E9}",
        present: "\u{1F7E8}",
        absent: "\u{2B1C}",
        separator: "",
    };

    const PLAIN: Self = Self {
        correct: "+",
        present: "?",
        absent: "-",
        separator: " ",
    };

    const fn symbol(self, status: LetterStatus) -> &'static str {
        match status {
            LetterStatus::Correct => self.correct,
            LetterStatus::Present => self.present,
            LetterStatus::Absent => self.absent,
        }
    }
}

fn render(result: &GuessResult, palette: Palette) -> String {
    let mut letters = String::with_capacity(result.len() * 2);
    let mut symbols = String::with_capacity(result.len() * 4);

    for &(letter, status) in result {
        letters.push(char::from(letter));
        letters.push(' ');
        symbols.push_str(palette.symbol(status));
        symbols.push_str(palette.separator);
    }

    format!("{}\n{}", letters.trim_end(), symbols.trim_end())
}

/// Where the guesses of the player come from
trait Guesses {
    /// Read the next guess, `None` if there is no more input
    fn next_guess(&mut self) -> Result<Option<String>>;
}

/// Interactive prompt on a terminal
#[derive(Clone, Copy, Debug)]
struct Terminal;

impl Guesses for Terminal {
    fn next_guess(&mut self) -> Result<Option<String>> {
        let guess = dialoguer::Input::<String>::new()
            .with_prompt("Please make a guess")
            .interact_text()?;
        Ok(Some(guess))
    }
}

/// One guess per line, e.g. from a pipe
#[derive(Debug)]
struct Lines<R>(R);

impl<R: BufRead> Guesses for Lines<R> {
    fn next_guess(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.0.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn play(
    session: &mut GameSession<'_>,
    palette: Palette,
    guesses: &mut impl Guesses,
) -> Result<()> {
    println!(
        "Guess the word with {} letters, you have {} guesses.",
        session.length(),
        session.max_guesses()
    );

    while !session.status().is_over() {
        let Some(guess) = guesses.next_guess()? else {
            eyre::bail!("The input ended before the game was over.");
        };

        match session.submit_guess(&guess) {
            Ok(result) => {
                println!("{}", render(&result, palette));
                println!("{} guesses left!\n", session.remaining_guesses());
            }
            Err(e) => eprintln!("{e}. Guess again."),
        }
    }

    if session.status() == GameStatus::Won {
        println!("You won!");
    } else {
        println!("You have lost :( The word was {}.", session.reveal_secret());
    }

    Ok(())
}
