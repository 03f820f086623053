use crate::dictionary::{
    EMBEDDED_PHRASES, default_phrases_path, load_phrases_from_file, load_phrases_from_str,
};
use crate::error::Result;
use crate::game_state::{
    DEFAULT_MAX_WRONG_GUESSES, GameConfig, GameInterface, Round, SessionStats, StageCounting,
    UserAction,
};
use clap::Parser;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Snowman: guess the phrase before the snowman is built
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited phrase file
    #[arg(short = 'i', long = "input")]
    pub phrases_path: Option<PathBuf>,

    /// Wrong guesses allowed before the snowman is finished
    #[arg(
        short = 'm',
        long = "max-wrong-guesses",
        default_value_t = DEFAULT_MAX_WRONG_GUESSES
    )]
    pub max_wrong_guesses: usize,

    /// Seed for phrase order and narration, for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reset the wrong-guess count after every right guess
    #[arg(long)]
    pub consecutive: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn game_config(&self) -> Result<GameConfig> {
        let counting = if self.consecutive {
            StageCounting::Consecutive
        } else {
            StageCounting::Cumulative
        };
        GameConfig::new(self.max_wrong_guesses, counting, self.seed)
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Explicit file first, then the per-user phrase file if it exists, then the
/// built-in phrases.
pub fn resolve_phrases(explicit: Option<&Path>) -> Result<Vec<String>> {
    if let Some(path) = explicit {
        return load_phrases_from_file(path);
    }
    if let Some(path) = default_phrases_path().filter(|p| p.is_file()) {
        log::info!("Loading phrases from {}", path.display());
        return load_phrases_from_file(path);
    }
    Ok(load_phrases_from_str(EMBEDDED_PHRASES))
}

/// Marker left in the config directory after the first session.
pub fn returning_player_marker() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("snowman").join("played"))
}

/// Reports whether `marker` existed, creating it when it did not.
pub fn check_and_mark_returning(marker: &Path) -> bool {
    if marker.is_file() {
        return true;
    }
    let created = match marker.parent() {
        Some(dir) => fs::create_dir_all(dir).and_then(|()| fs::write(marker, "")),
        None => fs::write(marker, ""),
    };
    if let Err(e) = created {
        log::warn!("Could not create {}: {e}", marker.display());
    }
    false
}

pub fn parse_action(input: &str) -> Option<UserAction> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    match input.to_uppercase().as_str() {
        "EXIT" | "QUIT" => Some(UserAction::Exit),
        "NEXT" | "PLAY AGAIN" => Some(UserAction::PlayAgain),
        "HELP" | "INSTRUCTIONS" => Some(UserAction::Instructions),
        _ => Some(UserAction::Guess(input.to_string())),
    }
}

/// Display with a space between characters so hidden letters are countable.
pub fn format_display(display: &str) -> String {
    display
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_snowman(round: &Round) -> String {
    let built = round.wrong_guesses().min(round.max_wrong_guesses());
    let pending = round.max_wrong_guesses() - built;
    format!(
        "Snowman [{}{}] {}/{}",
        "#".repeat(built),
        ".".repeat(pending),
        built,
        round.max_wrong_guesses()
    )
}

fn format_guessed(round: &Round) -> String {
    round
        .letters_guessed()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_board(round: &Round) {
    println!("{}", format_display(round.display()));
    println!("{}", format_snowman(round));
    if !round.letters_guessed().is_empty() {
        println!("Guessed: {}", format_guessed(round));
    }
}

/// Line-oriented terminal front end over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_action(&mut self) -> Option<UserAction> {
        println!("\nGuess a letter or the phrase ('help', 'next', or 'exit'):");
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => Some(UserAction::Exit),
            Ok(_) => {
                let action = parse_action(&input);
                if action.is_none() {
                    println!("I don't understand. Try guessing a letter!");
                }
                action
            }
            Err(e) => {
                log::error!("Failed to read input: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn display_welcome(&mut self, message: &str) {
        println!("{message}");
    }

    fn display_instructions(&mut self, instructions: &str) {
        println!("{instructions}");
    }

    fn display_new_round(&mut self, round: &Round) {
        println!("\nNew phrase:");
        display_board(round);
    }

    fn display_another_game(&mut self, message: &str) {
        println!("{message}");
    }

    fn display_right(&mut self, message: &str, round: &Round) {
        println!("{message}");
        display_board(round);
    }

    fn display_wrong(&mut self, message: &str, round: &Round) {
        println!("{message}");
        display_board(round);
    }

    fn display_won(&mut self, message: &str, round: &Round) {
        println!("{message}");
        println!("{}", format_display(round.display()));
    }

    fn display_lost(&mut self, message: &str, round: &Round) {
        println!("{}", format_snowman(round));
        println!("{message}");
    }

    fn display_play_again_prompt(&mut self, message: &str) {
        println!("{message}");
    }

    fn display_exit_message(&mut self, stats: &SessionStats) {
        println!(
            "Exiting. Rounds played: {} (won {}, lost {}).",
            stats.rounds(),
            stats.won,
            stats.lost
        );
    }
}
