// src/console/mod.rs

//! Line-oriented terminal console.
//!
//! - [`parser`] turns one line of text into a [`FrontDeskEvent`].
//! - [`input`] reads stdin on a dedicated thread and feeds parsed events into
//!   the runtime channel.
//!
//! [`FrontDeskEvent`]: crate::engine::FrontDeskEvent

pub mod input;
pub mod parser;

pub use input::{forward_lines, spawn_console};
pub use parser::{parse_line, tokenize, ConsoleLine, HELP};
