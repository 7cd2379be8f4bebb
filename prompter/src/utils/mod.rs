pub mod sanitize;
pub use sanitize::{Bounds, NumberKind, Numeric};

pub mod options;
pub use options::TerminalOptions;

pub mod terminal;
#[cfg(feature = "std")]
pub use terminal::StdTerminal;
pub use terminal::Terminal;
