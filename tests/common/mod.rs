#![allow(dead_code)]

use mlog::{BaseLogger, Flags, Logger, Output};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory destination that stays readable after a logger takes a clone.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Logger with no prefix and no header, writing into a fresh buffer.
pub fn bare_logger(debug: bool) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let base = BaseLogger::new(Output::writer(buffer.clone()), "", Flags::empty());
    (Logger::with_base(base, debug), buffer)
}
