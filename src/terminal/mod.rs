//! Shared terminal utilities.
//!
//! Box drawing, raw mode management, entropy estimates, clipboard writes and
//! ANSI helpers.

mod clipboard;
mod output;
mod raw_mode;

#[cfg(test)]
pub(crate) use clipboard::fake::FakeClipboard;
pub use clipboard::copy_to;
pub use output::*;
pub use raw_mode::*;
