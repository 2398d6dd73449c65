//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository traits
//! that stores every table behind one `Arc<RwLock<_>>`. It backs the handler
//! tests and the `inmemory` build, where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use holonet::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
