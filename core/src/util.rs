//! Various utility types and functions.

pub mod ansi;
pub mod ascii;
pub mod buf;
