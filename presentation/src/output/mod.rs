//! Output formatting.

pub mod console;
