//! Core types for the dnsblcheck DNSBL/DNSWL checker.
//!
//! This crate provides the foundational types used across the checker:
//!
//! - **Types**: List entries, check targets, classified outcomes and tallies
//! - **Errors**: Pre-dispatch error handling with [`CheckError`]
//!
//! Everything here is plain data: no I/O, no concurrency. The query engine
//! and the CLI build on these types.

mod error;
pub mod types;

pub use error::{CheckError, Result};
pub use types::*;
