/// Debug line on the default logger, values written back to back.
///
/// ```
/// let attempt = 2;
/// mlog::debug!("retrying, attempt ", attempt).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($($value:expr),* $(,)?) => {
        $crate::global::debug(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Formatted debug line on the default logger.
///
/// ```
/// mlog::debugf!("{}-{}", "a", 2).unwrap();
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)*) => {
        $crate::global::debugf(::std::format_args!($($arg)*))
    };
}

/// Debug line on the default logger, values separated by spaces.
#[macro_export]
macro_rules! debugln {
    ($($value:expr),* $(,)?) => {
        $crate::global::debugln(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}
