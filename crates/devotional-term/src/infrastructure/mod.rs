//! Infrastructure layer providing external integrations.
//!
//! This module builds the service client from configuration and implements
//! the print window on top of the local file system.

pub mod clients;
pub mod printers;
