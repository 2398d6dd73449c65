//! Core types for the holonet API.
//!
//! Pure domain records, request schemas, validation and repository contracts.
//! Nothing in this crate performs I/O; storage backends and HTTP handlers
//! live in the `holonet` crate.

pub mod catalog;
pub mod serde;
pub mod storage;
