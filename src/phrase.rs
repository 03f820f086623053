//! Guess evaluation against a single secret phrase.
//!
//! A [`Phrase`] owns the uppercased secret and the display shown to the
//! player. Letters start hidden behind [`HIDDEN`]; every other character
//! (spaces, punctuation, digits) is visible from the start and can never be
//! guessed. A guess is either a single letter, which reveals every occurrence
//! of that letter, or anything else, which is compared with the whole phrase.

use crate::debug_log;

/// Marker shown in place of a letter that has not been guessed yet.
pub const HIDDEN: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseState {
    InProgress,
    Complete,
}

/// Result of one call to [`Phrase::submit_guess`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// `false` when the guess matched nothing. No state changed in that case.
    pub accepted: bool,
    pub complete: bool,
    pub display: String,
}

#[derive(Debug, Clone)]
pub struct Phrase {
    secret: Vec<char>,
    display: String,
    state: PhraseState,
}

fn is_guessable(c: char) -> bool {
    c.is_alphabetic()
}

impl Phrase {
    pub fn new(text: &str) -> Self {
        let secret: Vec<char> = text.to_uppercase().chars().collect();
        let display: String = secret
            .iter()
            .map(|&c| if is_guessable(c) { HIDDEN } else { c })
            .collect();
        let mut phrase = Self {
            secret,
            display,
            state: PhraseState::InProgress,
        };
        phrase.update_state();
        phrase
    }

    pub fn secret(&self) -> String {
        self.secret.iter().collect()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn state(&self) -> PhraseState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == PhraseState::Complete
    }

    /// Number of letter positions still hidden.
    pub fn remaining_letters(&self) -> usize {
        self.display.chars().filter(|&c| c == HIDDEN).count()
    }

    /// Evaluates a letter or whole-phrase guess. Matching ignores case.
    ///
    /// Once the phrase is complete every further guess is accepted and
    /// changes nothing.
    pub fn submit_guess(&mut self, input: &str) -> GuessOutcome {
        if self.is_complete() {
            return self.outcome(true);
        }

        let guess: Vec<char> = input.to_uppercase().chars().collect();
        let accepted = match guess.as_slice() {
            [letter] => self.reveal_letter(*letter),
            _ => self.reveal_phrase(&guess),
        };

        if accepted {
            self.update_state();
        }
        debug_log!(
            "Guess {:?}: accepted={} display={:?}",
            input,
            accepted,
            self.display
        );
        self.outcome(accepted)
    }

    fn reveal_letter(&mut self, letter: char) -> bool {
        if !is_guessable(letter) || !self.secret.contains(&letter) {
            return false;
        }
        self.display = self
            .secret
            .iter()
            .zip(self.display.chars())
            .map(|(&s, d)| if s == letter { s } else { d })
            .collect();
        true
    }

    fn reveal_phrase(&mut self, guess: &[char]) -> bool {
        if guess != self.secret.as_slice() {
            return false;
        }
        self.display = self.secret();
        true
    }

    fn update_state(&mut self) {
        if self.display.chars().eq(self.secret.iter().copied()) {
            self.state = PhraseState::Complete;
        }
    }

    fn outcome(&self, accepted: bool) -> GuessOutcome {
        GuessOutcome {
            accepted,
            complete: self.is_complete(),
            display: self.display.clone(),
        }
    }
}
