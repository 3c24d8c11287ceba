//! Subscriber setup for the `tracing` facade.

use tracing_subscriber::EnvFilter;

use crate::error::{ConfigErrorKind, ErrorKind, ShellError, ShellResult};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "CRTSH_LOG";

/// Install a global stderr subscriber. `level` is any `EnvFilter` directive
/// (`info`, `crtsh_core=debug`, ...) and is ignored when `CRTSH_LOG` is set.
pub fn init_logging(level: &str, json: bool) -> ShellResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| config_error(format!("invalid log filter '{level}': {e}")))?;

    #[cfg(feature = "logging-json")]
    if json {
        return tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| config_error(e.to_string()));
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| config_error(e.to_string()))?;

    #[cfg(not(feature = "logging-json"))]
    if json {
        tracing::warn!("JSON log output requested but not compiled in; using text");
    }
    Ok(())
}

fn config_error(message: String) -> ShellError {
    ShellError::new(ErrorKind::Config(ConfigErrorKind::InvalidValue), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_filter() {
        std::env::remove_var(LOG_ENV);
        assert!(init_logging("crtsh=bogus", false).is_err());
    }
}
