//! Sequential logger with a debug level that can be switched on and off at runtime.
//!
//! A [`Logger`] owns a [`BaseLogger`] (destination, prefix, header [`Flags`])
//! and one atomic flag. While the flag is set, `debug`, `debugf` and `debugln`
//! write lines tagged `[DEBUG] `; the level word is grayed out when the
//! destination is an interactive terminal. The flag starts from the `DEBUG`
//! environment variable (`yes`, `true` or `1`, any case) and can be changed
//! with `enable_debug` / `disable_debug` from any thread.
//!
//! The free functions in this crate act on one process-wide default logger
//! that writes to stderr:
//!
//! ```
//! mlog::set_prefix("worker: ");
//! mlog::enable_debug();
//! mlog::debugln(&[&"queue depth", &12]).unwrap();
//! mlog::debugf!("{} jobs left", 3).unwrap();
//! mlog::disable_debug();
//! ```
//!
//! Explicit loggers can target any writer:
//!
//! ```
//! use mlog::{BaseLogger, Flags, Logger, Output};
//!
//! let logger = Logger::with_base(
//!     BaseLogger::new(Output::writer(Vec::new()), "", Flags::empty()),
//!     true,
//! );
//! logger.debug(&[&"test"]).unwrap();
//! ```

pub mod base_logger;
pub mod constants;
pub mod debug_logger;
pub mod flags;
pub mod global;
mod macros;
pub mod output;

#[cfg(test)]
mod test_support;

pub use base_logger::BaseLogger;
pub use debug_logger::{debug_tag, parse_debug_value, Logger};
pub use flags::Flags;
pub use global::*;
pub use output::Output;
