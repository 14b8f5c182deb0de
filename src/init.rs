//! Initialization that needs to be done on startup

/// Sets up logging to stderr. `RUST_LOG` overrides the default `info` level.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
