use thiserror::Error;

pub mod key;
pub mod script;

pub use key::{Key, parse_key};
pub use script::{ScriptStep, parse_script, parse_step};

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("Invalid script line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },

    #[error("Invalid wait duration: {0}")]
    InvalidDuration(String),

    #[error("Unexpected trailing input: {0}")]
    TrailingInput(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty input")]
    EmptyInput,
}
