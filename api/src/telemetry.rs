//! Logging bootstrap

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber; `RUST_LOG` wins over the default `info`
pub fn init(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt = fmt().with_env_filter(filter).with_target(false);
    if json {
        fmt.json().init();
    } else {
        fmt.init();
    }
}
