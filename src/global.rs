//! Process-wide default `Logger` and free functions bound to it.
//!
//! The default is built on first use with `Logger::new`, so `DEBUG` is read
//! at that moment and never again.

use crate::debug_logger::Logger;
use crate::flags::Flags;
use crate::output::Output;
use lazy_static::lazy_static;
use std::fmt::{self, Display};
use std::io;
use std::panic::Location;

lazy_static! {
    static ref STD: Logger = Logger::new();
}

pub fn default_logger() -> &'static Logger {
    &STD
}

pub fn enable_debug() {
    STD.enable_debug();
}

pub fn disable_debug() {
    STD.disable_debug();
}

pub fn is_debug_enabled() -> bool {
    STD.is_debug_enabled()
}

#[track_caller]
pub fn debug(values: &[&dyn Display]) -> io::Result<()> {
    STD.debug(values)
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) -> io::Result<()> {
    STD.debugf(args)
}

#[track_caller]
pub fn debugln(values: &[&dyn Display]) -> io::Result<()> {
    STD.debugln(values)
}

pub fn set_output(output: Output) {
    STD.set_output(output);
}

pub fn set_prefix(prefix: impl Into<String>) {
    STD.set_prefix(prefix);
}

pub fn prefix() -> String {
    STD.prefix()
}

pub fn set_flags(flags: Flags) {
    STD.set_flags(flags);
}

pub fn flags() -> Flags {
    STD.flags()
}

pub fn output(caller: &Location<'_>, message: &str) -> io::Result<()> {
    STD.output(caller, message)
}

#[track_caller]
pub fn print(values: &[&dyn Display]) -> io::Result<()> {
    STD.print(values)
}

#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) -> io::Result<()> {
    STD.printf(args)
}

#[track_caller]
pub fn println(values: &[&dyn Display]) -> io::Result<()> {
    STD.println(values)
}

#[track_caller]
pub fn fatal(values: &[&dyn Display]) -> ! {
    STD.fatal(values)
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    STD.fatalf(args)
}

#[track_caller]
pub fn fatalln(values: &[&dyn Display]) -> ! {
    STD.fatalln(values)
}

#[track_caller]
pub fn panic(values: &[&dyn Display]) -> ! {
    STD.panic(values)
}

#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    STD.panicf(args)
}

#[track_caller]
pub fn panicln(values: &[&dyn Display]) -> ! {
    STD.panicln(values)
}
