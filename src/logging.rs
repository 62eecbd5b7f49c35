//! Tracing setup for hosts embedding the form.
//!
//! The library only emits `tracing` events. Hosts without their own
//! subscriber can call [`init_tracing`] to get formatted output on stderr.

use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG` when set, otherwise `default_filter`
/// (e.g. `"contact_form=debug"`).
///
/// # Errors
///
/// Fails if the filter is malformed or a global subscriber is already set.
pub fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}
