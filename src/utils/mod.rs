//! Utility modules for the pathmirror CLI.

pub mod colors;

pub use colors::*;
