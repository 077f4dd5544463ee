use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset, by `-v` count.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,tvmaze_core=info,tvmaze_cli=info",
        _ => "info,tvmaze_core=debug,tvmaze_cli=debug",
    }
}

/// Initialize logging to stderr, keeping stdout for results.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_filter(0), "warn");
        assert!(default_filter(1).contains("tvmaze_core=info"));
        assert!(default_filter(2).contains("tvmaze_core=debug"));
        assert_eq!(default_filter(7), default_filter(2));
    }
}
