//! Macros for last-resort debugging.
//!
//! The errors produced when parsing a time string only tell you what kind
//! of problem was found and in which string. If you need to know where in
//! the parser an error was produced, build with the `extra-debug` feature.
//! Every place that first produces an error is wrapped in the `xerr!()`
//! macro which then prints its location and a backtrace to stderr before
//! resolving into the enclosed expression. Without the feature, the macro
//! simply resolves into the expression:
//!
//! ```rust,ignore
//! if offset.len() != 4 {
//!     xerr!(return Err(ParseError::BadOffset(s.into())))
//! }
//! ```

#[cfg(feature = "extra-debug")]
extern crate backtrace;

#[cfg(feature="extra-debug")]
pub use self::backtrace::Backtrace;

#[cfg(feature = "extra-debug")]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => {{
        eprintln!(
            "--- EXTRA DEBUG {}:{} ---\n{:?}\n--- EXTRA DEBUG ---",
            file!(), line!(), $crate::debug::Backtrace::new()
        );
        $test
    }}
}

#[cfg(not(feature = "extra-debug"))]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => { $test };
}
