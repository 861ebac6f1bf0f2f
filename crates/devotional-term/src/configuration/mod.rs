//! Configuration management for the terminal client.
//!
//! This module provides centralized configuration handling for the service URL,
//! the print directory and request limits.

mod config;

pub use config::*;
