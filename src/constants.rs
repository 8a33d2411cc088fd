/// Environment variable consulted once when a `Logger` is built with `Logger::new`.
pub const DEBUG_ENV_VAR: &str = "DEBUG";
/// Values of `DEBUG` (compared case-insensitively) that switch debug mode on.
pub const DEBUG_ENV_TRUTHY: [&str; 3] = ["yes", "true", "1"];

/// Level word placed inside the bracketed debug tag.
pub const DEBUG_LEVEL_TEXT: &str = "DEBUG";
/// SGR foreground code for the level word on terminals.
pub const GRAY: u8 = 37;

/// Status passed to `std::process::exit` by the fatal emitters.
pub const FATAL_EXIT_CODE: i32 = 1;

// Header layout
pub const DATE_FORMAT: &str = "%Y/%m/%d ";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const MICROSECONDS_FORMAT: &str = "%H:%M:%S%.6f";
