// Library interface for snowman
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod phrase;
pub mod responses;

// Re-export commonly used items for easier testing
pub use dictionary::{PhraseDictionary, load_phrases_from_file, load_phrases_from_str};
pub use error::SnowmanError;
pub use game_state::{GameConfig, Round, RoundEvent, SessionStats, StageCounting, game_loop};
pub use phrase::{GuessOutcome, Phrase, PhraseState};
pub use responses::Responses;
