// src/logging.rs
use env_logger::{Builder, Env};

/// Installs the stderr logger. `RUST_LOG` wins over `-v`.
pub fn init(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));
    builder.format_timestamp(None).format_target(false);
    // ignore a logger that is already installed
    let _ = builder.try_init();
}
