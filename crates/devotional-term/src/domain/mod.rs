//! Core domain logic for the devotional client.
//!
//! This module contains the rendering pipeline, the UI state and the
//! action/event plumbing, independent of the terminal and the network.

pub mod models;
pub mod services;
