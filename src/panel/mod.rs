// src/panel/mod.rs

//! Display panel layer.
//!
//! The runtime hands every new call and every action outcome to a
//! `PanelBackend`, so tests can swap in a recording fake.
//!
//! - [`backend`] provides the `PanelBackend` trait and `ConsolePanel`, the
//!   backend used in production.
//! - [`speech`] runs the optional external speech command for announcements.

pub mod backend;
pub mod speech;

pub use backend::{ConsolePanel, PanelBackend};
pub use speech::spawn_speech;
