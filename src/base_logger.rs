//! Sequential line logger: one destination, one prefix, one set of header flags.
//!
//! Every emitted line is assembled in full and handed to the destination with a
//! single `write_all` while the state lock is held, so lines from concurrent
//! callers never interleave.

use crate::constants::{DATE_FORMAT, FATAL_EXIT_CODE, MICROSECONDS_FORMAT, TIME_FORMAT};
use crate::flags::Flags;
use crate::output::Output;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};
use std::panic::Location;
use std::process;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct State {
    prefix: String,
    flags: Flags,
    output: Output,
}

#[derive(Debug)]
pub struct BaseLogger {
    state: Mutex<State>,
}

impl BaseLogger {
    pub fn new(output: Output, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            state: Mutex::new(State {
                prefix: prefix.into(),
                flags,
                output,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_output(&self, output: Output) {
        self.state().output = output;
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.state().prefix = prefix.into();
    }

    pub fn prefix(&self) -> String {
        self.state().prefix.clone()
    }

    pub fn set_flags(&self, flags: Flags) {
        self.state().flags = flags;
    }

    pub fn flags(&self) -> Flags {
        self.state().flags
    }

    /// Whether the current destination is an interactive terminal.
    pub fn is_terminal(&self) -> bool {
        self.state().output.is_terminal()
    }

    /// Writes one line attributed to `caller`.
    ///
    /// A trailing newline is appended when `message` lacks one. Errors from the
    /// destination are returned as-is.
    pub fn output(&self, caller: &Location<'_>, message: &str) -> io::Result<()> {
        let mut state = self.state();
        let line = format_line(&state.prefix, state.flags, caller, message);
        state.output.write_all(line.as_bytes())
    }

    /// Like `output`, but the message is built by `render` while the state lock
    /// is held. `render` is told whether the destination it will be written to
    /// is a terminal, so a concurrent `set_output` cannot slip in between.
    pub fn output_with<F>(&self, caller: &Location<'_>, render: F) -> io::Result<()>
    where
        F: FnOnce(bool) -> String,
    {
        let mut state = self.state();
        let message = render(state.output.is_terminal());
        let line = format_line(&state.prefix, state.flags, caller, &message);
        state.output.write_all(line.as_bytes())
    }

    /// Writes the values back to back, with no separator.
    #[track_caller]
    pub fn print(&self, values: &[&dyn Display]) -> io::Result<()> {
        self.output(Location::caller(), &sprint(values))
    }

    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.output(Location::caller(), &fmt::format(args))
    }

    /// Writes the values separated by single spaces.
    #[track_caller]
    pub fn println(&self, values: &[&dyn Display]) -> io::Result<()> {
        self.output(Location::caller(), &sprintln(values))
    }

    /// `print` followed by `process::exit(1)`.
    #[track_caller]
    pub fn fatal(&self, values: &[&dyn Display]) -> ! {
        let _ = self.output(Location::caller(), &sprint(values));
        process::exit(FATAL_EXIT_CODE)
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.output(Location::caller(), &fmt::format(args));
        process::exit(FATAL_EXIT_CODE)
    }

    #[track_caller]
    pub fn fatalln(&self, values: &[&dyn Display]) -> ! {
        let _ = self.output(Location::caller(), &sprintln(values));
        process::exit(FATAL_EXIT_CODE)
    }

    /// `print` followed by a panic carrying the message.
    #[track_caller]
    pub fn panic(&self, values: &[&dyn Display]) -> ! {
        self.emit_and_panic(Location::caller(), sprint(values))
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit_and_panic(Location::caller(), fmt::format(args))
    }

    #[track_caller]
    pub fn panicln(&self, values: &[&dyn Display]) -> ! {
        self.emit_and_panic(Location::caller(), sprintln(values))
    }

    #[track_caller]
    fn emit_and_panic(&self, caller: &Location<'_>, message: String) -> ! {
        let _ = self.output(caller, &message);
        panic!("{message}")
    }
}

impl Default for BaseLogger {
    fn default() -> Self {
        Self::new(Output::Stderr, "", Flags::STD)
    }
}

pub(crate) fn sprint(values: &[&dyn Display]) -> String {
    let mut message = String::new();
    for value in values {
        let _ = write!(message, "{value}");
    }
    message
}

pub(crate) fn sprintln(values: &[&dyn Display]) -> String {
    let mut message = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            message.push(' ');
        }
        let _ = write!(message, "{value}");
    }
    message.push('\n');
    message
}

fn format_line(prefix: &str, flags: Flags, caller: &Location<'_>, message: &str) -> String {
    let mut line = String::with_capacity(prefix.len() + message.len() + 32);
    if !flags.contains(Flags::MSG_PREFIX) {
        line.push_str(prefix);
    }
    if flags.contains(Flags::DATE) || flags.wants_time() {
        if flags.contains(Flags::UTC) {
            write_timestamp(&mut line, Utc::now(), flags);
        } else {
            write_timestamp(&mut line, Local::now(), flags);
        }
    }
    if flags.wants_file() {
        let file = if flags.contains(Flags::SHORT_FILE) {
            short_file(caller.file())
        } else {
            caller.file()
        };
        let _ = write!(line, "{}:{}: ", file, caller.line());
    }
    if flags.contains(Flags::MSG_PREFIX) {
        line.push_str(prefix);
    }
    line.push_str(message);
    if !message.ends_with('\n') {
        line.push('\n');
    }
    line
}

fn write_timestamp<Tz: TimeZone>(line: &mut String, now: DateTime<Tz>, flags: Flags)
where
    Tz::Offset: Display,
{
    if flags.contains(Flags::DATE) {
        let _ = write!(line, "{}", now.format(DATE_FORMAT));
    }
    if flags.contains(Flags::MICROSECONDS) {
        let _ = write!(line, "{} ", now.format(MICROSECONDS_FORMAT));
    } else if flags.contains(Flags::TIME) {
        let _ = write!(line, "{} ", now.format(TIME_FORMAT));
    }
}

fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
