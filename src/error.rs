use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("Provided character {0:?} is not a letter")]
    NotALetter(char),

    #[error("Should specify at least one argument")]
    EmptyArguments,

    #[error("Failed to find {0} number")]
    MissingExtreme(&'static str),

    #[error("New instance creation of {0} is forbidden")]
    AlreadyInstantiated(&'static str),

    #[error("Failed to load settings from {}: {message}", path.display())]
    Settings { path: PathBuf, message: String },
}

impl ConstructionError {
    pub fn settings(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Settings {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Illegal-argument failures are the caller's fault; the rest are
    /// broken internal state.
    pub fn is_illegal_argument(&self) -> bool {
        matches!(self, Self::NotALetter(_) | Self::EmptyArguments)
    }
}
