//! # Terminal Input Helper
//!
//! This module provides [`Terminal`], the interactive side of the crate. Every
//! `request_*` operation follows the same protocol:
//!
//! 1. print the prompt,
//! 2. read one line and trim it,
//! 3. validate it with [`crate::utils::sanitize`],
//! 4. on failure print exactly one diagnostic line and start over.
//!
//! A request only returns once it holds a valid value. Bad user input never
//! reaches the caller as an error; [`PromptError`] is reserved for a closed
//! terminal, an empty option list, exhausted input and I/O failures.
//!
//! ## Ownership
//!
//! A terminal owns its input handle. [`Terminal::close`] releases it
//! explicitly and reports a second close; dropping the terminal releases it
//! silently, on every exit path.
//!
//! ## Usage
//!
//! ### Example 1: bounded integer
//! ```rust,no_run
//! use prompter::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let horses = terminal.request_int("How many horses do you own?", 0..=20)?;
//! println!("Horses: {}", horses);
//! # Ok::<(), prompter::PromptError>(())
//! ```
//!
//! ### Example 2: choice by name
//! ```rust,no_run
//! use prompter::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let place = terminal.request_choice_name("Where to?", &["Stable", "Paddock", "Arena"])?;
//! println!("Going to the {}", place);
//! # Ok::<(), prompter::PromptError>(())
//! ```
//!
//! ### Example 3: scripted input
//! ```rust
//! use prompter::utils::Terminal;
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! let mut terminal = Terminal::new(Cursor::new("abc\n3\n7\n"), &mut output);
//!
//! assert_eq!(terminal.request_int("Pick a number", 5..).unwrap(), 7);
//! ```
use crate::error::PromptError;
use crate::utils::options::TerminalOptions;
use crate::utils::sanitize::{self, Bounds, Numeric, Rejection};
use log::{debug, trace, warn};
use std::io::{BufRead, Write};

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        use std::io::{self, StdinLock, Stdout};

        /// A [`Terminal`] bound to the process standard input and output.
        pub type StdTerminal = Terminal<StdinLock<'static>, Stdout>;

        impl Terminal<StdinLock<'static>, Stdout> {
            /// Creates a terminal over the process standard input and output.
            ///
            /// Standard input stays locked until the terminal is closed or dropped.
            pub fn stdio() -> Self {
                Terminal::new(io::stdin().lock(), io::stdout())
            }
        }
    }
}

/// Prompts on `W`, reads answers from `R` and loops until they are valid.
pub struct Terminal<R, W> {
    /// `None` once the terminal has been closed.
    input: Option<R>,
    output: W,
    pub options: TerminalOptions,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        debug!("terminal opened");
        Self {
            input: Some(input),
            output,
            options: TerminalOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TerminalOptions) -> Self {
        self.options = options;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn is_closed(&self) -> bool {
        self.input.is_none()
    }

    /// Releases the input handle. No further reads are possible afterwards.
    ///
    /// The input is released even if flushing the output fails.
    ///
    /// # Errors
    /// [`PromptError::StreamAlreadyClosed`] if the terminal was already closed,
    /// or [`PromptError::Io`] if the final flush fails.
    pub fn close(&mut self) -> Result<(), PromptError> {
        self.input.take().ok_or(PromptError::StreamAlreadyClosed)?;
        debug!("terminal closed");

        self.output.flush()?;
        Ok(())
    }

    /// Reads one line, blocking until it is complete or the input ends.
    ///
    /// Returns the trimmed line, or `None` at the end of the input. Bytes that
    /// are not valid UTF-8 are replaced, so the line is still validated.
    ///
    /// # Errors
    /// [`PromptError::StreamAlreadyClosed`] after [`Terminal::close`], or
    /// [`PromptError::Io`] if reading fails.
    pub fn read_line(&mut self) -> Result<Option<String>, PromptError> {
        let input = self
            .input
            .as_mut()
            .ok_or(PromptError::StreamAlreadyClosed)?;

        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            trace!("end of input");
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf).trim().to_string();
        trace!("read line {:?}", line);
        Ok(Some(line))
    }

    /// Prints `question` and returns the answer as [`Terminal::read_line`] does.
    pub fn ask_question(&mut self, question: &str) -> Result<Option<String>, PromptError> {
        self.ensure_open()?;

        write!(
            self.output,
            "{indent}{}\n{indent}",
            question,
            indent = self.options.indent
        )?;
        self.output.flush()?;

        self.read_line()
    }

    /// Prints a "press ENTER" line and discards one line of input.
    ///
    /// The end of the input counts as a key press.
    pub fn request_user_press_return(&mut self) -> Result<(), PromptError> {
        self.ensure_open()?;

        self.say("-- press ENTER/RETURN --")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    /// Requests an integer within `bounds`.
    ///
    /// ```rust,ignore
    /// terminal.request_int("Any integer:", ..)?;
    /// terminal.request_int("Integer >= 5:", 5..)?;
    /// terminal.request_int("Integer between 5 and 10:", 5..=10)?;
    /// ```
    pub fn request_int(
        &mut self,
        message: &str,
        bounds: impl Into<Bounds<i32>>,
    ) -> Result<i32, PromptError> {
        self.request_number(message, bounds)
    }

    /// Requests a floating-point number within `bounds`, written with `.` as
    /// decimal separator.
    pub fn request_double(
        &mut self,
        message: &str,
        bounds: impl Into<Bounds<f64>>,
    ) -> Result<f64, PromptError> {
        self.request_number(message, bounds)
    }

    /// Requests any [`Numeric`] value within `bounds`.
    ///
    /// # Errors
    /// [`PromptError::InputExhausted`] if the input ends before a valid
    /// number was entered.
    pub fn request_number<T: Numeric>(
        &mut self,
        message: &str,
        bounds: impl Into<Bounds<T>>,
    ) -> Result<T, PromptError> {
        let bounds = bounds.into();
        if bounds.is_empty() {
            warn!("bounds for {:?} admit no value", message);
        }

        let decimal_places = self.options.decimal_places;
        self.request(message, |answer| {
            sanitize::parse_number(answer, &bounds, decimal_places)
        })
    }

    /// Requests a string that is not empty after trimming.
    pub fn request_string(&mut self, message: &str) -> Result<String, PromptError> {
        self.request(message, |answer| {
            sanitize::non_empty(answer).map(str::to_string)
        })
    }

    /// Requests one of `options` and returns its index.
    ///
    /// Answers are compared case-insensitively; the first matching option
    /// wins. A single option is selected without reading any input.
    ///
    /// # Errors
    /// [`PromptError::NoOptionsProvided`] if `options` is empty.
    pub fn request_choice<S: AsRef<str>>(
        &mut self,
        message: &str,
        options: &[S],
    ) -> Result<usize, PromptError> {
        match options {
            [] => Err(PromptError::NoOptionsProvided),
            [only] => {
                debug!("single option {:?} selected automatically", only.as_ref());
                self.say("Only one option available.")?;
                self.say(&format!("Selecting {}.", only.as_ref()))?;
                self.output.flush()?;
                Ok(0)
            }
            _ => {
                let labels: Vec<&str> = options.iter().map(|option| option.as_ref()).collect();
                let question = format!("{}: {}", message, labels.join(", "));

                self.request(&question, |answer| sanitize::match_option(answer, options))
            }
        }
    }

    /// Same as [`Terminal::request_choice`], but returns the selected label.
    pub fn request_choice_name<S: AsRef<str>>(
        &mut self,
        message: &str,
        options: &[S],
    ) -> Result<String, PromptError> {
        let index = self.request_choice(message, options)?;
        Ok(options[index].as_ref().to_string())
    }

    /// The retry loop shared by every request.
    fn request<T>(
        &mut self,
        message: &str,
        mut validate: impl FnMut(&str) -> Result<T, Rejection>,
    ) -> Result<T, PromptError> {
        loop {
            let answer = self
                .ask_question(message)?
                .ok_or(PromptError::InputExhausted)?;

            match validate(&answer) {
                Ok(value) => break Ok(value),
                Err(rejection) => {
                    debug!("rejected {:?}: {:?}", answer, rejection);
                    self.say(&rejection.to_string())?;
                }
            }
        }
    }

    fn say(&mut self, line: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}{}", self.options.indent, line)?;
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), PromptError> {
        if self.is_closed() {
            Err(PromptError::StreamAlreadyClosed)
        } else {
            Ok(())
        }
    }
}

impl<R, W> Drop for Terminal<R, W> {
    fn drop(&mut self) {
        // Already-closed terminals are fine here, only report a real release.
        if self.input.take().is_some() {
            debug!("terminal input released on drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type ScriptedTerminal<'a, 'b> = Terminal<Cursor<&'a str>, &'b mut Vec<u8>>;

    /// Runs `interact` against scripted `input` and returns its result with
    /// everything the terminal printed.
    fn transcript<T>(
        input: &str,
        interact: impl FnOnce(&mut ScriptedTerminal<'_, '_>) -> T,
    ) -> (T, String) {
        let mut output = Vec::new();
        let result = {
            let mut terminal = Terminal::new(Cursor::new(input), &mut output);
            interact(&mut terminal)
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_terminal_read_line_trims() {
        let (lines, _) = transcript("  Blitz \t\n\n", |t| {
            (t.read_line().unwrap(), t.read_line().unwrap(), t.read_line().unwrap())
        });
        assert_eq!(lines.0, Some("Blitz".to_string()));
        assert_eq!(lines.1, Some(String::new()));
        assert_eq!(lines.2, None);
    }

    #[test]
    fn test_terminal_read_line_last_line_without_newline() {
        let (line, _) = transcript("42", |t| t.read_line().unwrap());
        assert_eq!(line, Some("42".to_string()));
    }

    #[test]
    fn test_terminal_request_int_invalid_utf8_is_rejected() {
        let mut output = Vec::new();
        let value = {
            let mut terminal = Terminal::new(Cursor::new(&b"\xff\xfe\n7\n"[..]), &mut output);
            terminal.request_int("x", ..).unwrap()
        };
        let out = String::from_utf8(output).unwrap();
        assert_eq!(value, 7);
        assert_eq!(out.matches("not an integer").count(), 1);
    }

    struct FailingFlush;

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("flush failed"))
        }
    }

    #[test]
    fn test_terminal_close_releases_input_when_flush_fails() {
        let mut terminal = Terminal::new(Cursor::new("1\n"), FailingFlush);

        assert!(matches!(terminal.close(), Err(PromptError::Io(_))));
        assert!(terminal.is_closed());
        assert!(matches!(
            terminal.read_line(),
            Err(PromptError::StreamAlreadyClosed)
        ));
        assert!(matches!(
            terminal.close(),
            Err(PromptError::StreamAlreadyClosed)
        ));
    }

    #[test]
    fn test_terminal_ask_question_layout() {
        let (answer, out) = transcript("Ada\n", |t| t.ask_question("Your name?").unwrap());
        assert_eq!(answer, Some("Ada".to_string()));
        assert_eq!(out, " Your name?\n ");
    }

    #[test]
    fn test_terminal_close_twice() {
        let (results, _) = transcript("1\n", |t| {
            let first = t.close();
            let second = t.close();
            (first, second, t.is_closed())
        });
        assert!(results.0.is_ok());
        assert!(matches!(results.1, Err(PromptError::StreamAlreadyClosed)));
        assert!(results.2);
    }

    #[test]
    fn test_terminal_read_after_close() {
        let (results, out) = transcript("1\n", |t| {
            t.close().unwrap();
            (
                t.read_line(),
                t.ask_question("Still there?"),
                t.request_int("Number?", ..),
                t.request_user_press_return(),
            )
        });
        assert!(matches!(results.0, Err(PromptError::StreamAlreadyClosed)));
        assert!(matches!(results.1, Err(PromptError::StreamAlreadyClosed)));
        assert!(matches!(results.2, Err(PromptError::StreamAlreadyClosed)));
        assert!(matches!(results.3, Err(PromptError::StreamAlreadyClosed)));
        assert_eq!(out, "");
    }

    #[test]
    fn test_terminal_request_int_retries_until_in_range() {
        let (value, out) = transcript("abc\n3\n7\n", |t| t.request_int("x", 5..).unwrap());
        assert_eq!(value, 7);
        assert_eq!(
            out,
            " x\n  The value is not an integer, try again!\n x\n  The number must be greater than or equal to \"5\", try again!\n x\n "
        );
    }

    #[test]
    fn test_terminal_request_int_between() {
        let (value, out) = transcript("11\n4\n10\n", |t| t.request_int("x", 5..=10).unwrap());
        assert_eq!(value, 10);
        assert_eq!(out.matches("less than or equal to \"10\"").count(), 1);
        assert_eq!(out.matches("greater than or equal to \"5\"").count(), 1);
        assert_eq!(out.matches(" x\n").count(), 3);
    }

    #[test]
    fn test_terminal_request_int_unbounded_accepts_negative() {
        let (value, out) = transcript("-12\n", |t| t.request_int("x", ..).unwrap());
        assert_eq!(value, -12);
        assert!(!out.contains("try again"));
    }

    #[test]
    fn test_terminal_request_int_at_most() {
        let (value, _) = transcript("100\n-3\n", |t| t.request_int("x", ..=0).unwrap());
        assert_eq!(value, -3);
    }

    #[test]
    fn test_terminal_request_int_input_exhausted() {
        let (res, out) = transcript("abc\n", |t| t.request_int("x", ..));
        assert!(matches!(res, Err(PromptError::InputExhausted)));
        assert_eq!(out.matches("not an integer").count(), 1);
    }

    #[test]
    fn test_terminal_request_double() {
        let (value, out) = transcript("1,5\n0.5\n1.5\n", |t| {
            t.request_double("Weight?", 1.0..=2.0).unwrap()
        });
        assert_eq!(value, 1.5);
        assert_eq!(out.matches("not a decimal number").count(), 1);
        assert_eq!(out.matches("greater than or equal to \"1.00\"").count(), 1);
    }

    #[test]
    fn test_terminal_request_double_uses_decimal_places_option() {
        let (value, out) = transcript("9\n2\n", |t| {
            t.options.decimal_places = 1;
            t.request_double("x", ..=2.26).unwrap()
        });
        assert_eq!(value, 2.0);
        assert!(out.contains("less than or equal to \"2.3\""));
    }

    #[test]
    fn test_terminal_request_number_generic() {
        let (value, out) = transcript("-1\n300\n200\n", |t| {
            t.request_number::<u8>("Age?", ..).unwrap()
        });
        assert_eq!(value, 200);
        assert_eq!(out.matches("not an integer").count(), 2);
    }

    #[test]
    fn test_terminal_request_string_rejects_blank() {
        let (value, out) = transcript("\n   \n  Fury  \n", |t| t.request_string("Name?").unwrap());
        assert_eq!(value, "Fury");
        assert_eq!(out.matches("must not be empty").count(), 2);
    }

    #[test]
    fn test_terminal_request_string_input_exhausted() {
        let (res, _) = transcript("", |t| t.request_string("Name?"));
        assert!(matches!(res, Err(PromptError::InputExhausted)));
    }

    #[test]
    fn test_terminal_request_choice_ignores_case() {
        let (value, out) = transcript("b\n", |t| t.request_choice("Pick", &["A", "B"]).unwrap());
        assert_eq!(value, 1);
        assert_eq!(out, " Pick: A, B\n ");
    }

    #[test]
    fn test_terminal_request_choice_retries() {
        let (value, out) = transcript("C\n\na\n", |t| {
            t.request_choice("Pick", &["A", "B"]).unwrap()
        });
        assert_eq!(value, 0);
        assert_eq!(out.matches("must be one of the options").count(), 2);
    }

    #[test]
    fn test_terminal_request_choice_name() {
        let options = vec!["Stable".to_string(), "Paddock".to_string()];
        let (value, _) = transcript("PADDOCK\n", |t| {
            t.request_choice_name("Where to?", &options).unwrap()
        });
        assert_eq!(value, "Paddock");
    }

    #[test]
    fn test_terminal_request_choice_single_option_reads_nothing() {
        let (results, out) = transcript("next\n", |t| {
            let choice = t.request_choice("Pick", &["Only"]).unwrap();
            (choice, t.read_line().unwrap())
        });
        assert_eq!(results.0, 0);
        assert_eq!(results.1, Some("next".to_string()));
        assert_eq!(out, " Only one option available.\n Selecting Only.\n");
    }

    #[test]
    fn test_terminal_request_choice_no_options() {
        let empty: [&str; 0] = [];
        let (results, out) = transcript("A\n", |t| {
            (
                t.request_choice("Pick", &empty),
                t.request_choice_name("Pick", &empty),
                t.read_line().unwrap(),
            )
        });
        assert!(matches!(results.0, Err(PromptError::NoOptionsProvided)));
        assert!(matches!(results.1, Err(PromptError::NoOptionsProvided)));
        assert_eq!(results.2, Some("A".to_string()));
        assert_eq!(out, "");
    }

    #[test]
    fn test_terminal_request_user_press_return() {
        let (results, out) = transcript("anything\nrest\n", |t| {
            t.request_user_press_return().unwrap();
            t.read_line().unwrap()
        });
        assert_eq!(results, Some("rest".to_string()));
        assert_eq!(out, " -- press ENTER/RETURN --\n");
    }

    #[test]
    fn test_terminal_request_user_press_return_at_end_of_input() {
        let (res, _) = transcript("", |t| t.request_user_press_return());
        assert!(res.is_ok());
    }

    #[test]
    fn test_terminal_custom_indent() {
        let (_, out) = transcript("x\n1\n", |t| {
            t.options.indent = String::from("> ");
            t.request_int("n", ..).unwrap()
        });
        assert_eq!(out, "> n\n> > The value is not an integer, try again!\n> n\n> ");
    }

    #[test]
    fn test_terminal_with_options() {
        let mut output = Vec::new();
        let terminal = Terminal::new(Cursor::new(""), &mut output).with_options(TerminalOptions {
            indent: String::new(),
            decimal_places: 0,
        });
        assert_eq!(terminal.options.indent, "");
        assert_eq!(terminal.options.decimal_places, 0);
        assert!(terminal.output().is_empty());
    }
}
