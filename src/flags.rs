use bitflags::bitflags;

bitflags! {
    /// Header annotations a `BaseLogger` writes in front of every line.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        /// Date in the local time zone: `2009/01/23`.
        const DATE = 1 << 0;
        /// Time in the local time zone: `01:23:23`.
        const TIME = 1 << 1;
        /// Microsecond resolution: `01:23:23.123123`. Implies `TIME`.
        const MICROSECONDS = 1 << 2;
        /// Full file name and line number: `/a/b/c/d.rs:23`.
        const LONG_FILE = 1 << 3;
        /// Final file name element and line number: `d.rs:23`. Overrides `LONG_FILE`.
        const SHORT_FILE = 1 << 4;
        /// Use UTC rather than the local time zone for `DATE` and `TIME`.
        const UTC = 1 << 5;
        /// Move the prefix from the start of the line to just before the message.
        const MSG_PREFIX = 1 << 6;
        /// Initial flags of a default logger.
        const STD = Self::DATE.bits() | Self::TIME.bits();
    }
}

impl Flags {
    pub(crate) fn wants_time(self) -> bool {
        self.intersects(Self::TIME | Self::MICROSECONDS)
    }

    pub(crate) fn wants_file(self) -> bool {
        self.intersects(Self::LONG_FILE | Self::SHORT_FILE)
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::STD
    }
}
