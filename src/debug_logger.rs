// Debug level on top of the sequential base logger

use crate::base_logger::{sprint, sprintln, BaseLogger};
use crate::constants::{DEBUG_ENV_TRUTHY, DEBUG_ENV_VAR, DEBUG_LEVEL_TEXT, GRAY};
use crate::flags::Flags;
use crate::output::Output;
use std::env;
use std::fmt::{self, Display};
use std::io;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};

/// A base logger with an extra, runtime-toggleable debug level.
///
/// `debug`, `debugf` and `debugln` write a `[DEBUG] ` tagged line only while
/// debug mode is on. Everything else is forwarded to the base logger untouched.
#[derive(Debug)]
pub struct Logger {
    base: BaseLogger,
    debug_enabled: AtomicBool,
}

impl Logger {
    /// Creates a logger writing to stderr with the standard flags.
    ///
    /// Debug mode starts on when the `DEBUG` environment variable is one of
    /// `yes`, `true` or `1`, ignoring case. The variable is read only here.
    pub fn new() -> Self {
        Self::with_base(BaseLogger::default(), debug_from_env())
    }

    /// Wraps an explicitly configured base logger with the given debug state.
    pub fn with_base(base: BaseLogger, debug: bool) -> Self {
        Self {
            base,
            debug_enabled: AtomicBool::new(debug),
        }
    }

    /// Turns debug mode on. Overrides whatever `DEBUG` said.
    pub fn enable_debug(&self) {
        self.debug_enabled.store(true, Ordering::SeqCst);
    }

    /// Turns debug mode off. Overrides whatever `DEBUG` said.
    pub fn disable_debug(&self) {
        self.debug_enabled.store(false, Ordering::SeqCst);
    }

    /// Current debug mode. May already be stale when another thread toggles it.
    pub fn is_debug_enabled(&self) -> bool {
        self.debug_enabled.load(Ordering::SeqCst)
    }

    /// Writes the values back to back behind a `[DEBUG] ` tag, in debug mode only.
    #[track_caller]
    pub fn debug(&self, values: &[&dyn Display]) -> io::Result<()> {
        self.debug_at(Location::caller(), values)
    }

    /// Formats `args`, then behaves like `debug` with the result.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let message = fmt::format(args);
        self.debug_at(Location::caller(), &[&message])
    }

    /// Like `debug`, but the values are separated by spaces and end with a newline.
    #[track_caller]
    pub fn debugln(&self, values: &[&dyn Display]) -> io::Result<()> {
        let message = sprintln(values);
        self.debug_at(Location::caller(), &[&message])
    }

    fn debug_at(&self, caller: &Location<'_>, values: &[&dyn Display]) -> io::Result<()> {
        if !self.is_debug_enabled() {
            return Ok(());
        }
        self.base.output_with(caller, |is_terminal| {
            format!("{}{}", debug_tag(is_terminal), sprint(values))
        })
    }

    pub fn base(&self) -> &BaseLogger {
        &self.base
    }

    pub fn set_output(&self, output: Output) {
        self.base.set_output(output);
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.base.set_prefix(prefix);
    }

    pub fn prefix(&self) -> String {
        self.base.prefix()
    }

    pub fn set_flags(&self, flags: Flags) {
        self.base.set_flags(flags);
    }

    pub fn flags(&self) -> Flags {
        self.base.flags()
    }

    pub fn output(&self, caller: &Location<'_>, message: &str) -> io::Result<()> {
        self.base.output(caller, message)
    }

    #[track_caller]
    pub fn print(&self, values: &[&dyn Display]) -> io::Result<()> {
        self.base.print(values)
    }

    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.base.printf(args)
    }

    #[track_caller]
    pub fn println(&self, values: &[&dyn Display]) -> io::Result<()> {
        self.base.println(values)
    }

    #[track_caller]
    pub fn fatal(&self, values: &[&dyn Display]) -> ! {
        self.base.fatal(values)
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.base.fatalf(args)
    }

    #[track_caller]
    pub fn fatalln(&self, values: &[&dyn Display]) -> ! {
        self.base.fatalln(values)
    }

    #[track_caller]
    pub fn panic(&self, values: &[&dyn Display]) -> ! {
        self.base.panic(values)
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.base.panicf(args)
    }

    #[track_caller]
    pub fn panicln(&self, values: &[&dyn Display]) -> ! {
        self.base.panicln(values)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// `[DEBUG] `, with the level word grayed out when `colored` is set.
pub fn debug_tag(colored: bool) -> String {
    if colored {
        format!("[{}] ", colorize(GRAY, DEBUG_LEVEL_TEXT))
    } else {
        format!("[{}] ", DEBUG_LEVEL_TEXT)
    }
}

fn colorize(color: u8, text: &str) -> String {
    format!("\x1b[{}m{}\x1b[0m", color, text)
}

/// Whether a `DEBUG` value switches debug mode on.
pub fn parse_debug_value(value: &str) -> bool {
    DEBUG_ENV_TRUTHY
        .iter()
        .any(|truthy| value.eq_ignore_ascii_case(truthy))
}

fn debug_from_env() -> bool {
    env::var(DEBUG_ENV_VAR)
        .map(|value| parse_debug_value(&value))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{BrokenPipe, SharedBuffer};
    use std::sync::Arc;
    use std::thread;

    fn buffered(debug: bool) -> (Logger, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let base = BaseLogger::new(Output::writer(buffer.clone()), "", Flags::empty());
        (Logger::with_base(base, debug), buffer)
    }

    #[test]
    fn recognised_debug_values() {
        for value in ["yes", "true", "1", "YES", "True", "tRuE", "Yes"] {
            assert!(parse_debug_value(value), "{value} should enable debug");
        }
    }

    #[test]
    fn unrecognised_debug_values() {
        for value in ["", "maybe", "0", "false", "no", "on", " yes", "1 "] {
            assert!(!parse_debug_value(value), "{value:?} should not enable debug");
        }
    }

    #[test]
    fn debug_writes_plain_tag_to_non_terminal() {
        let (logger, buffer) = buffered(true);
        logger.debug(&[&"test"]).unwrap();
        assert_eq!(buffer.contents(), "[DEBUG] test\n");
        assert!(!buffer.contents().contains('\x1b'));
    }

    #[test]
    fn debug_is_silent_when_disabled() {
        let (logger, buffer) = buffered(false);
        logger.debug(&[&"x"]).unwrap();
        logger.debugf(format_args!("{}", 1)).unwrap();
        logger.debugln(&[&"a", &"b"]).unwrap();
        assert_eq!(buffer.contents(), "");
    }

    #[test]
    fn toggling_switches_output() {
        let (logger, buffer) = buffered(false);
        logger.enable_debug();
        assert!(logger.is_debug_enabled());
        logger.debug(&[&"x"]).unwrap();
        logger.disable_debug();
        assert!(!logger.is_debug_enabled());
        logger.debug(&[&"x"]).unwrap();
        assert_eq!(buffer.contents(), "[DEBUG] x\n");
    }

    #[test]
    fn debugf_matches_debug_of_formatted_string() {
        let (formatted, formatted_buffer) = buffered(true);
        let (plain, plain_buffer) = buffered(true);
        formatted.debugf(format_args!("{}-{}", "a", 2)).unwrap();
        plain.debug(&[&"a-2"]).unwrap();
        assert_eq!(formatted_buffer.contents(), plain_buffer.contents());
        assert_eq!(formatted_buffer.contents(), "[DEBUG] a-2\n");
    }

    #[test]
    fn debugln_matches_debug_of_joined_line() {
        let (joined, joined_buffer) = buffered(true);
        let (plain, plain_buffer) = buffered(true);
        joined.debugln(&[&"a", &"b"]).unwrap();
        plain.debug(&[&"a b\n"]).unwrap();
        assert_eq!(joined_buffer.contents(), plain_buffer.contents());
        assert_eq!(joined_buffer.contents(), "[DEBUG] a b\n");
    }

    #[test]
    fn debug_concatenates_values() {
        let (logger, buffer) = buffered(true);
        logger.debug(&[&"n=", &3, &'!']).unwrap();
        assert_eq!(buffer.contents(), "[DEBUG] n=3!\n");
    }

    #[test]
    fn prefix_and_flags_apply_to_debug_lines() {
        let (logger, buffer) = buffered(true);
        logger.set_prefix("svc ");
        logger.set_flags(Flags::SHORT_FILE);
        let line = line!() + 1;
        logger.debug(&[&"ready"]).unwrap();
        assert_eq!(
            buffer.contents(),
            format!("svc debug_logger.rs:{line}: [DEBUG] ready\n")
        );
    }

    #[test]
    fn toggling_leaves_base_settings_alone() {
        let (logger, _buffer) = buffered(false);
        logger.set_prefix("p ");
        logger.set_flags(Flags::UTC);
        logger.enable_debug();
        logger.disable_debug();
        assert_eq!(logger.prefix(), "p ");
        assert_eq!(logger.flags(), Flags::UTC);
    }

    #[test]
    fn pass_through_print_is_untagged() {
        let (logger, buffer) = buffered(false);
        logger.print(&[&"plain"]).unwrap();
        logger.println(&[&"one", &"two"]).unwrap();
        logger.printf(format_args!("{:>4}", 7)).unwrap();
        logger.output(Location::caller(), "raw").unwrap();
        assert_eq!(buffer.contents(), "plain\none two\n   7\nraw\n");
    }

    #[test]
    fn debug_write_errors_are_returned() {
        let base = BaseLogger::new(Output::writer(BrokenPipe), "", Flags::empty());
        let logger = Logger::with_base(base, true);
        assert_eq!(
            logger.debug(&[&"x"]).unwrap_err().kind(),
            io::ErrorKind::BrokenPipe
        );
        logger.disable_debug();
        assert!(logger.debug(&[&"x"]).is_ok());
    }

    #[test]
    fn colored_tag_wraps_only_the_level_word() {
        assert_eq!(debug_tag(true), "[\x1b[37mDEBUG\x1b[0m] ");
        assert_eq!(debug_tag(false), "[DEBUG] ");
    }

    #[test]
    fn swapped_destination_gets_the_whole_line() {
        let (logger, first) = buffered(true);
        let second = SharedBuffer::default();
        let logger = Arc::new(logger);

        let swapper = {
            let logger = Arc::clone(&logger);
            let second = second.clone();
            thread::spawn(move || {
                logger.set_output(Output::writer(second));
            })
        };
        for _ in 0..200 {
            logger.debug(&[&"tick"]).unwrap();
        }
        swapper.join().unwrap();

        let combined = first.contents() + &second.contents();
        assert_eq!(combined.lines().count(), 200);
        assert!(combined.lines().all(|line| line == "[DEBUG] tick"));
    }

    #[test]
    fn concurrent_toggle_and_debug() {
        let (logger, buffer) = buffered(false);
        let logger = Arc::new(logger);
        let readers: Vec<_> = (0..8)
            .map(|_| {
                let logger = Arc::clone(&logger);
                thread::spawn(move || {
                    for _ in 0..200 {
                        logger.debug(&[&"tick"]).unwrap();
                    }
                })
            })
            .collect();
        let writer = {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..500 {
                    if i % 2 == 0 {
                        logger.enable_debug();
                    } else {
                        logger.disable_debug();
                    }
                }
            })
        };
        for reader in readers {
            reader.join().unwrap();
        }
        writer.join().unwrap();

        assert!(!logger.is_debug_enabled());
        assert!(buffer.contents().lines().all(|line| line == "[DEBUG] tick"));
    }
}
