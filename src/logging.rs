// ReelForge Logging
// Copyright (c) 2026 Xing_The_Creator | ReelForge

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `RUST_LOG` wins over the defaults.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
