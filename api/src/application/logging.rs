use tracing_subscriber::{EnvFilter, fmt};

use crate::args::LogArgs;

/// Installs the global subscriber. `RUST_LOG` wins over the configured
/// filter when both are present.
pub fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_new(&args.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if args.json {
        fmt().json().with_env_filter(filter).with_target(true).init();
    } else {
        fmt().with_env_filter(filter).with_target(true).init();
    }
}
