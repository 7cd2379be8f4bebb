//! # Prompter
//!
//! Blocking console prompts for text-based games and other interactive CLI
//! programs. Every request prints a question, reads one line, validates it and
//! asks again until the answer is valid.
//!
//! ## Features
//!
//! - **Numeric requests** - integers and decimals, optionally bounded with
//!   Rust range syntax (`..`, `5..`, `..=9`, `1..=6`)
//! - **String requests** - anything but an empty or whitespace-only line
//! - **Choices** - pick one of several labels, case-insensitively, by index
//!   or by name; a single option is chosen without asking
//! - **Explicit ownership** - a [`utils::Terminal`] owns its input handle and
//!   releases it on `close` or drop
//!
//! ## Feature Flags
//!
//! - **`std`** (default) - [`utils::Terminal::stdio`], bound to the process
//!   standard input and output
//! - **`serde`** - `Serialize`/`Deserialize` for [`utils::TerminalOptions`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prompter::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//!
//! let name = terminal.request_string("What is your horse called?")?;
//! let age = terminal.request_int("How old is it?", 0..=40)?;
//! let discipline = terminal.request_choice_name(
//!     "Which discipline?",
//!     &["Dressage", "Jumping", "Eventing"],
//! )?;
//!
//! println!("{} ({} years) trains {}", name, age, discipline);
//! terminal.close()?;
//! # Ok::<(), prompter::PromptError>(())
//! ```
//!
//! ## Error Handling
//!
//! Invalid answers are handled inside the retry loop and never reach the
//! caller. [`PromptError`] only reports misuse or a broken stream:
//!
//! ```rust
//! use prompter::{PromptError, utils::Terminal};
//! use std::io::Cursor;
//!
//! let mut terminal = Terminal::new(Cursor::new(""), Vec::new());
//! let empty: [&str; 0] = [];
//!
//! match terminal.request_choice("Pick one", &empty) {
//!     Err(PromptError::NoOptionsProvided) => {}
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: terminal lifecycle and rejected
//! answers at `debug`, raw lines at `trace`. User-facing diagnostics are
//! always written to the terminal's output, never to the logger.

pub mod error;
pub use error::PromptError;

pub mod utils;
