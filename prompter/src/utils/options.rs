//! # Terminal Options
//!
//! Presentation settings for a [`crate::utils::Terminal`].
//!
//! With the `serde` feature enabled, options can be loaded from any serde
//! format; missing fields fall back to their defaults.
//!
//! ```rust
//! use prompter::utils::TerminalOptions;
//!
//! let options = TerminalOptions {
//!     indent: String::from("> "),
//!     ..TerminalOptions::default()
//! };
//! assert_eq!(options.decimal_places, 2);
//! ```

/// Options used by a [`crate::utils::Terminal`].
///
/// # Default
/// ```rust,ignore
/// TerminalOptions {
///     indent: " ".to_string(),
///     decimal_places: 2,
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TerminalOptions {
    /// Prefix written before every prompt, diagnostic and notice line.
    pub indent: String,
    /// Digits after the decimal point when a decimal bound is shown to the user.
    pub decimal_places: usize,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            indent: String::from(" "),
            decimal_places: 2,
        }
    }
}
