//! # dnsbl-cli
//!
//! Command-line front end for the DNSBL checker.
//!
//! This crate is a thin wrapper around [`dnsbl_engine`]: it parses
//! arguments, loads the built-in list table, streams per-list result lines
//! as workers publish them, and maps the final run status to the process
//! exit code. All query logic lives in the engine.

pub mod cli;
pub mod lists;
pub mod output;

pub use cli::run;
