//! Terminal user interface for the devotional generator.
//!
//! This crate collects an age group and an optional topic, asks the devotional
//! service for a devotional, and renders the result into a fixed template. The
//! UI state lives behind a display-surface abstraction so every operation can
//! be exercised without a terminal.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, ElementId, Event, FormInput, PrintWindow};
pub use domain::services::{AppState, DisplaySurface, UiState};
