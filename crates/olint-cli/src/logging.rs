use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` for the olint
/// crates and `warn` for everything else. Records from the `log` facade used by
/// `olint-core` are forwarded through the subscriber's log bridge.
pub fn init_logging(verbose: bool) -> Result<(), String> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {}", e))
}

/// Filter used when `RUST_LOG` is unset. The binary's log target is `olint`.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,olint_core=debug,olint=debug"
    } else {
        "warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter_names_binary_target() {
        let binary_target = module_path!().split("::").next().unwrap();
        let directive = format!("{binary_target}=debug");
        assert!(default_filter(true).split(',').any(|d| d == directive));
        assert!(default_filter(true).split(',').any(|d| d == "olint_core=debug"));
        assert_eq!(default_filter(false), "warn");
    }
}
