use rand::Rng;
use rand::rngs::StdRng;

pub const INSTRUCTIONS: &str = "Guess a letter that is in the phrase, or guess the whole phrase. \
     Figure out the phrase before the snowman is built to win!";

pub const PLAY_AGAIN_INSTRUCTIONS: &str = "Type 'next' to play another phrase or 'exit' to quit.";

const FIRST_WELCOME: &str =
    "Welcome to Snowman! Let's see if you can solve the phrase before the snowman is done.";

pub const ANOTHER_GAME: &str = "Okay, here's another game!";

const WELCOME_BACK: [&str; 4] = [
    "Welcome back to Snowman! A fresh phrase is waiting for you.",
    "Welcome back! Let's see how fast you can solve this one.",
    "Glad you're here! Grab your mittens, it's time to play Snowman.",
    "Hey there, you made it! Let's play Snowman.",
];

const RIGHT: [&str; 5] = [
    "Right on! Good guess.",
    "Splendid!",
    "Wonderful! Keep going!",
    "Easy peasy lemon squeezy!",
    "Easy as pie!",
];

const WRONG: [&str; 4] = [
    "Whoops, that isn't in the phrase. Try again!",
    "Try again!",
    "You can do this!",
    "Incorrect. Keep on trying!",
];

const LOST: [&str; 2] = ["Better luck next time!", "Don't give up, keep on trying!"];

const WON: [&str; 5] = [
    "Congratulations and BRAVO!",
    "You did it! So proud of you!",
    "Well done!",
    "I'm happy for you!",
    "This is awesome! You're awesome! Way to go!",
];

/// Picks varied narration lines so repeated turns don't read the same.
#[derive(Debug)]
pub struct Responses<R = StdRng> {
    rng: R,
}

impl<R: Rng> Responses<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick(&mut self, lines: &[&'static str]) -> &'static str {
        lines[self.rng.random_range(0..lines.len())]
    }

    /// Full introduction for a player who has never played before.
    pub fn first_welcome(&self) -> &'static str {
        FIRST_WELCOME
    }

    pub fn welcome_back(&mut self) -> &'static str {
        self.pick(&WELCOME_BACK)
    }

    pub fn another_game(&self) -> &'static str {
        ANOTHER_GAME
    }

    pub fn right(&mut self, guess: &str) -> String {
        format!("{guess} is right. {}", self.pick(&RIGHT))
    }

    pub fn wrong(&mut self, guess: &str) -> String {
        format!("{guess} is wrong. {}", self.pick(&WRONG))
    }

    pub fn won(&mut self, phrase: &str) -> String {
        format!("{phrase} is right! {}", self.pick(&WON))
    }

    pub fn lost(&mut self, phrase: &str) -> String {
        format!("Sorry, you lost. The phrase is {phrase}. {}", self.pick(&LOST))
    }
}
