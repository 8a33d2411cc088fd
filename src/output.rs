use crossterm::tty::IsTty;
use std::fmt;
use std::fs::File;
use std::io::{self, stderr, stdout, Write};

/// Where a `BaseLogger` writes its lines.
pub enum Output {
    Stderr,
    Stdout,
    File(File),
    /// Any other writer. Never treated as a terminal.
    Writer(Box<dyn Write + Send>),
}

impl Output {
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Output::Writer(Box::new(writer))
    }

    /// Asks the OS whether the destination is a character terminal.
    ///
    /// Not cached: a file handle or redirected stream can change between calls.
    pub fn is_terminal(&self) -> bool {
        match self {
            Output::Stderr => stderr().is_tty(),
            Output::Stdout => stdout().is_tty(),
            Output::File(file) => file.is_tty(),
            Output::Writer(_) => false,
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Output::Stderr
    }
}

impl From<File> for Output {
    fn from(file: File) -> Self {
        Output::File(file)
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stderr => stderr().write(buf),
            Output::Stdout => stdout().write(buf),
            Output::File(file) => file.write(buf),
            Output::Writer(writer) => writer.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        // Lock the std streams once so a line is never split by another writer.
        match self {
            Output::Stderr => stderr().lock().write_all(buf),
            Output::Stdout => stdout().lock().write_all(buf),
            Output::File(file) => file.write_all(buf),
            Output::Writer(writer) => writer.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stderr => stderr().flush(),
            Output::Stdout => stdout().flush(),
            Output::File(file) => file.flush(),
            Output::Writer(writer) => writer.flush(),
        }
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stderr => write!(f, "Stderr"),
            Output::Stdout => write!(f, "Stdout"),
            Output::File(file) => f.debug_tuple("File").field(file).finish(),
            Output::Writer(_) => write!(f, "Writer(..)"),
        }
    }
}
