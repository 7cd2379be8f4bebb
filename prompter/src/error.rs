//! # Prompt Errors
//!
//! Errors surfaced to the **caller** of a [`crate::utils::Terminal`].
//!
//! Bad user input (a word where a number was expected, a value out of range,
//! an empty answer, an unknown option) is *not* an error: the terminal prints
//! a diagnostic and asks again. Only misuse of the terminal itself, or a
//! failing input/output stream, ends up here.
use std::{error::Error, fmt::Display, io};

/// Represents possible errors when talking to a [`crate::utils::Terminal`].
///
/// - `StreamAlreadyClosed`: a read or a second `close` after the input was closed.
/// - `NoOptionsProvided`: a choice was requested from an empty option list.
/// - `InputExhausted`: the input ended while a value was still being requested.
/// - `Io`: the underlying reader or writer failed.
#[derive(Debug)]
pub enum PromptError {
    StreamAlreadyClosed,
    NoOptionsProvided,
    InputExhausted,
    Io(io::Error),
}

impl Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StreamAlreadyClosed => {
                write!(f, "The input stream is already closed")
            }
            Self::NoOptionsProvided => {
                write!(f, "No options were provided to choose from")
            }
            Self::InputExhausted => {
                write!(f, "The input ended before a valid answer was given")
            }
            Self::Io(e) => {
                write!(f, "Terminal I/O failed => {}", e)
            }
        }
    }
}

impl Error for PromptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
