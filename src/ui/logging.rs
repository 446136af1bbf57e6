//! ui::logging
//!
//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`, separate from the terminal
//! transcript on stdout. `RUST_LOG` wins over the `--debug` flag.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive used when `RUST_LOG` is unset.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "gitsim=debug"
    } else {
        "gitsim=warn"
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed or the
/// `RUST_LOG` value cannot be parsed.
pub fn init(debug: bool) -> anyhow::Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(value) if !value.trim().is_empty() => EnvFilter::try_new(value)?,
        _ => EnvFilter::try_new(default_directive(debug))?,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_selects_directive() {
        assert_eq!(default_directive(true), "gitsim=debug");
        assert_eq!(default_directive(false), "gitsim=warn");
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }
}
