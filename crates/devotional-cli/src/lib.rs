//! Command-line entry points for the devotional generator
//!
//! The `devotional` binary either runs the interactive terminal client or a
//! one-shot command that prints to stdout. Both paths share the service
//! client, configuration and rendering from `devotional-term`.

pub mod commands;
pub mod terminal_ui;
