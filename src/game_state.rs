use crate::dictionary::PhraseDictionary;
use crate::error::{Result, SnowmanError};
use crate::phrase::Phrase;
use crate::responses::{INSTRUCTIONS, PLAY_AGAIN_INSTRUCTIONS, Responses};
use crate::{debug_log, info_log};
use rand::Rng;
use std::collections::BTreeSet;

/// Snowman parts: head, torso, arms, lower body.
pub const DEFAULT_MAX_WRONG_GUESSES: usize = 4;

/// One stage per letter of the alphabet is the most a round can use.
pub const MAX_WRONG_GUESSES: usize = 26;

/// How wrong guesses add up toward the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageCounting {
    /// Every wrong guess builds another stage; stages are never removed.
    #[default]
    Cumulative,
    /// A right guess resets the count.
    Consecutive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_wrong_guesses: usize,
    pub counting: StageCounting,
    pub seed: Option<u64>,
    /// Returning players get a short greeting instead of the full intro.
    pub returning_player: bool,
}

impl GameConfig {
    pub fn new(
        max_wrong_guesses: usize,
        counting: StageCounting,
        seed: Option<u64>,
    ) -> Result<Self> {
        if !(1..=MAX_WRONG_GUESSES).contains(&max_wrong_guesses) {
            return Err(SnowmanError::InvalidConfig(format!(
                "max wrong guesses must be 1 to {MAX_WRONG_GUESSES}, got {max_wrong_guesses}"
            )));
        }
        Ok(Self {
            max_wrong_guesses,
            counting,
            seed,
            returning_player: false,
        })
    }

    #[must_use]
    pub fn with_returning_player(mut self, returning_player: bool) -> Self {
        self.returning_player = returning_player;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_wrong_guesses: DEFAULT_MAX_WRONG_GUESSES,
            counting: StageCounting::default(),
            seed: None,
            returning_player: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    Right { guess: String, display: String },
    Wrong {
        guess: String,
        display: String,
        wrong_guesses: usize,
        stages_left: usize,
    },
    Won { phrase: String },
    Lost { phrase: String },
    /// The round already ended; the guess was ignored.
    AlreadyOver,
}

/// One play-through of a phrase with its wrong-guess budget.
#[derive(Debug, Clone)]
pub struct Round {
    phrase: Phrase,
    max_wrong_guesses: usize,
    counting: StageCounting,
    wrong_guesses: usize,
    letters_guessed: BTreeSet<char>,
    result: Option<RoundResult>,
}

impl Round {
    pub fn new(text: &str, config: &GameConfig) -> Self {
        Self {
            phrase: Phrase::new(text),
            max_wrong_guesses: config.max_wrong_guesses,
            counting: config.counting,
            wrong_guesses: 0,
            letters_guessed: BTreeSet::new(),
            result: None,
        }
    }

    pub fn guess(&mut self, input: &str) -> RoundEvent {
        if self.result.is_some() {
            return RoundEvent::AlreadyOver;
        }

        let guess = input.to_uppercase();
        let mut chars = guess.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            self.letters_guessed.insert(letter);
        }

        let outcome = self.phrase.submit_guess(&guess);
        if outcome.complete {
            info_log!("Round won: {}", self.phrase.secret());
            self.result = Some(RoundResult::Won);
            return RoundEvent::Won {
                phrase: self.phrase.secret(),
            };
        }
        if outcome.accepted {
            if self.counting == StageCounting::Consecutive {
                self.wrong_guesses = 0;
            }
            return RoundEvent::Right {
                guess,
                display: outcome.display,
            };
        }

        self.wrong_guesses += 1;
        debug_log!(
            "Wrong guess {:?} ({}/{})",
            guess,
            self.wrong_guesses,
            self.max_wrong_guesses
        );
        if self.wrong_guesses >= self.max_wrong_guesses {
            info_log!("Round lost: {}", self.phrase.secret());
            self.result = Some(RoundResult::Lost);
            return RoundEvent::Lost {
                phrase: self.phrase.secret(),
            };
        }
        RoundEvent::Wrong {
            guess,
            display: outcome.display,
            wrong_guesses: self.wrong_guesses,
            stages_left: self.stages_left(),
        }
    }

    pub fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    pub fn display(&self) -> &str {
        self.phrase.display()
    }

    pub fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    pub fn max_wrong_guesses(&self) -> usize {
        self.max_wrong_guesses
    }

    pub fn stages_left(&self) -> usize {
        self.max_wrong_guesses.saturating_sub(self.wrong_guesses)
    }

    /// Single-character guesses made so far, right or wrong.
    pub fn letters_guessed(&self) -> &BTreeSet<char> {
        &self.letters_guessed
    }

    pub fn result(&self) -> Option<RoundResult> {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    PlayAgain,
    Instructions,
    Exit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub won: usize,
    pub lost: usize,
}

impl SessionStats {
    pub fn rounds(&self) -> usize {
        self.won + self.lost
    }
}

/// Surface the game loop talks to. Implemented by the terminal front end and
/// by test doubles.
pub trait GameInterface {
    /// `None` means the input was not understood and the turn is skipped.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_welcome(&mut self, message: &str);
    fn display_instructions(&mut self, instructions: &str);
    fn display_new_round(&mut self, round: &Round);
    fn display_another_game(&mut self, message: &str);
    fn display_right(&mut self, message: &str, round: &Round);
    fn display_wrong(&mut self, message: &str, round: &Round);
    fn display_won(&mut self, message: &str, round: &Round);
    fn display_lost(&mut self, message: &str, round: &Round);
    fn display_play_again_prompt(&mut self, message: &str);
    fn display_exit_message(&mut self, stats: &SessionStats);
}

/// Runs rounds until the player exits. A new phrase is drawn after every win
/// or loss once the player asks for one, or immediately on "play again".
pub fn game_loop<D, Q, I>(
    dictionary: &mut PhraseDictionary<D>,
    config: &GameConfig,
    responses: &mut Responses<Q>,
    interface: &mut I,
) -> SessionStats
where
    D: Rng,
    Q: Rng,
    I: GameInterface + ?Sized,
{
    let mut stats = SessionStats::default();
    if config.returning_player {
        interface.display_welcome(responses.welcome_back());
    } else {
        interface.display_welcome(responses.first_welcome());
        interface.display_instructions(INSTRUCTIONS);
    }

    let mut round = Round::new(&dictionary.get_phrase(), config);
    interface.display_new_round(&round);

    loop {
        let guess = match interface.read_action() {
            Some(UserAction::Exit) => {
                interface.display_exit_message(&stats);
                break;
            }
            Some(UserAction::PlayAgain) => {
                interface.display_another_game(responses.another_game());
                round = Round::new(&dictionary.get_phrase(), config);
                debug_log!(
                    "New round started, {} phrases left in pool",
                    dictionary.remaining()
                );
                interface.display_new_round(&round);
                continue;
            }
            Some(UserAction::Instructions) => {
                interface.display_instructions(INSTRUCTIONS);
                continue;
            }
            Some(UserAction::Guess(guess)) => guess,
            None => continue,
        };

        match round.guess(&guess) {
            RoundEvent::Right { guess, .. } => {
                interface.display_right(&responses.right(&guess), &round);
            }
            RoundEvent::Wrong { guess, .. } => {
                interface.display_wrong(&responses.wrong(&guess), &round);
            }
            RoundEvent::Won { phrase } => {
                stats.won += 1;
                interface.display_won(&responses.won(&phrase), &round);
                interface.display_play_again_prompt(PLAY_AGAIN_INSTRUCTIONS);
            }
            RoundEvent::Lost { phrase } => {
                stats.lost += 1;
                interface.display_lost(&responses.lost(&phrase), &round);
                interface.display_play_again_prompt(PLAY_AGAIN_INSTRUCTIONS);
            }
            RoundEvent::AlreadyOver => {
                interface.display_play_again_prompt(PLAY_AGAIN_INSTRUCTIONS);
            }
        }
    }

    stats
}
