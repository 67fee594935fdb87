//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::{system_conf, TokioAsyncResolver};

use crate::config::DNS_ATTEMPTS;
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used for record lookups.
///
/// Reads the system resolver configuration (`/etc/resolv.conf` on Unix,
/// the registry on Windows) so answers match what the host itself sees. If
/// it cannot be read, falls back to the default upstream configuration and
/// logs a warning.
///
/// # Arguments
///
/// * `timeout_seconds` - Per-query timeout
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across lookups.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the timeout is zero.
pub fn init_resolver(timeout_seconds: u64) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    if timeout_seconds == 0 {
        return Err(InitializationError::DnsResolverError(
            "DNS timeout must be at least one second".to_string(),
        ));
    }

    let (config, mut opts) = match system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(timeout_seconds);
    opts.attempts = DNS_ATTEMPTS;
    // Input names are absolute; never append search domains
    opts.ndots = 0;

    log::debug!(
        "DNS resolver configured with {} name servers, timeout {}s",
        config.name_servers().len(),
        timeout_seconds
    );

    Ok(Arc::new(TokioAsyncResolver::tokio(config, opts)))
}
