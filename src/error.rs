use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnowmanError {
    /// The phrase catalog has no entries. Raised when a dictionary is built.
    #[error("phrase catalog is empty")]
    EmptyCatalog,

    #[error("phrase has no letters to guess: {0:?}")]
    UnguessablePhrase(String),

    #[error("failed to read phrases from '{}': {source}", .path.display())]
    PhraseFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SnowmanError>;
