//! Data models and serialization helpers.
//!
//! This module contains the data structures used to represent vulnerability
//! records and filter state, plus custom deserializers for parsing record
//! files.
pub mod record;
pub mod serde_helpers;
