//! Type definitions for the devotional generation API
//!
//! This crate holds the contract shared by everything that talks to the
//! devotional service: the audience categories, the generation request body,
//! the devotional payload and the topics listing, plus the typed error used
//! when a call goes wrong.
//!
//! ## Example
//!
//! ```rust
//! use devotional_types::{AgeGroup, GenerationRequest};
//!
//! let request = GenerationRequest::new(AgeGroup::Teens, Some(""));
//! assert_eq!(
//!     serde_json::to_string(&request).unwrap(),
//!     r#"{"age_group":"teens","topic":null}"#
//! );
//! ```

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
