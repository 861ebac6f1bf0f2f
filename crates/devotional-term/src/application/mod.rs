//! Application layer driving the terminal interface.
//!
//! This module owns the main UI loop and the drawing of the UI state. It
//! coordinates between the domain logic and the terminal.

pub mod ui;
pub mod view;
