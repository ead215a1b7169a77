//! DNS resolution seam.
//!
//! The engine only ever sees [`Resolve`]: a name in, a set of addresses or
//! a classified [`LookupError`] out. The production implementation wraps
//! hickory's tokio resolver; tests substitute a scripted one.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use thiserror::Error;
use tracing::debug;

/// Resolution errors, pre-classified for outcome mapping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// NXDOMAIN or an empty answer: the name is not listed
    #[error("name not found")]
    NotFound,

    /// The query did not complete within the resolver's deadline
    #[error("query timed out")]
    Timeout,

    /// Anything else: server failure, malformed response, connectivity
    #[error("resolver error: {0}")]
    Resolver(String),
}

/// Address lookup as the lookup strategies consume it.
#[async_trait]
pub trait Resolve: Send + Sync {
    /// Resolve `name` to its A/AAAA records.
    async fn lookup(&self, name: &str) -> Result<Vec<IpAddr>, LookupError>;
}

/// Production resolver: system DNS configuration with a fallback to the
/// library defaults, and a hard per-query timeout so a wedged server can
/// never stall a run beyond it.
pub struct SystemResolver {
    inner: TokioResolver,
    query_timeout: Duration,
}

impl SystemResolver {
    /// Create a resolver from the system configuration, falling back to
    /// the default public configuration when none can be read.
    #[must_use]
    pub fn new(query_timeout: Duration) -> Self {
        let inner = TokioResolver::builder_tokio()
            .map(|builder| builder.build())
            .unwrap_or_else(|_| {
                TokioResolver::builder_with_config(
                    ResolverConfig::default(),
                    TokioConnectionProvider::default(),
                )
                .build()
            });

        Self {
            inner,
            query_timeout,
        }
    }
}

#[async_trait]
impl Resolve for SystemResolver {
    async fn lookup(&self, name: &str) -> Result<Vec<IpAddr>, LookupError> {
        debug!(name, "issuing query");

        match tokio::time::timeout(self.query_timeout, self.inner.lookup_ip(name)).await {
            Ok(Ok(answer)) => Ok(answer.iter().collect()),
            Ok(Err(err)) => Err(classify(err.to_string())),
            Err(_) => Err(LookupError::Timeout),
        }
    }
}

/// Classify a resolver error by its reported content.
///
/// NXDOMAIN and NOERROR-with-no-data both surface as "no record found";
/// either one is the expected negative answer. The per-query deadline
/// above catches most timeouts before the resolver's own do.
fn classify(text: String) -> LookupError {
    if text.contains("no record") || text.contains("NXDomain") {
        LookupError::NotFound
    } else if text.contains("timed out") || text.contains("timeout") {
        LookupError::Timeout
    } else {
        LookupError::Resolver(text)
    }
}
