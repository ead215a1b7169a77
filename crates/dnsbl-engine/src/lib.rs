//! Concurrent DNSBL query engine.
//!
//! This crate is the core of the checker: a bounded worker pool drains one
//! work unit per list entry, each lookup gated by a shared query-rate
//! limiter and (optionally) by an RFC 5782 health check of the list itself.
//! Outcomes are classified per lookup and aggregated into a
//! [`dnsbl_core::Tally`]; no per-unit retries, and one broken list never
//! prevents checking the rest.
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsbl_engine::{Dispatcher, EngineConfig, SystemResolver};
//! use dnsbl_core::Target;
//! use std::sync::Arc;
//!
//! let config = EngineConfig::default();
//! let resolver = Arc::new(SystemResolver::new(config.query_timeout));
//! let dispatcher = Dispatcher::new(config, resolver);
//!
//! let (events_tx, mut events_rx) = tokio::sync::mpsc::unbounded_channel();
//! let report = dispatcher
//!     .run(&Target::ip("192.0.2.7")?, entries, events_tx)
//!     .await;
//! ```

mod dispatch;
mod health;
mod limiter;
mod resolver;
mod strategy;

pub use dispatch::{CheckEvent, Dispatcher, EngineConfig, MAX_WORKERS, MIN_WORKERS};
pub use health::HealthVerifier;
pub use limiter::{QueryLimiter, MAX_RATE, MIN_RATE};
pub use resolver::{LookupError, Resolve, SystemResolver};
pub use strategy::{query_name, run_lookup};
