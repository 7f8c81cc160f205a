//! # Viewer Console
//!
//! Line-oriented host for the key-sequence interpreter and the document
//! viewer.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: the interpreter and the viewer never print
//! - **Input is explicit events**: each stdin line becomes keystrokes
//! - **Deterministic**: a session can be driven from any `BufRead`
//!
//! ## Key Syntax
//!
//! Every character of a line is one keystroke and the end of the line sends
//! `Enter`. Signal keys are written in angle brackets:
//!
//! ```text
//! 42            # goto page 42
//! ma            # set mark a (the trailing Enter is discarded)
//! 4<esc>        # type 4, then cancel it
//! <lt>          # a literal '<'
//! ```
//!
//! When a command needs a file (`o`), the next line is read as its path.

pub mod config;
pub mod error;
pub mod keys;
pub mod session;

pub use config::{load_config, ConsoleConfig};
pub use error::{ConsoleError, ConsoleResult};
pub use keys::{parse_line, KeySyntaxError};
pub use session::{ConsoleSession, LineDialog};
