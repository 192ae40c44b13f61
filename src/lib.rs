//! Subtrans - subtitle caption translation
//!
//! Reads an SRT file, sends every caption line to translate-shell and writes
//! the translations back in place, leaving sequence numbers, timecodes and
//! blank lines untouched.

pub mod cli;
pub mod config;
pub mod error;
pub mod language;
pub mod pipeline;
pub mod status;
pub mod subtitle;
pub mod translate;
