// Logging initialization for the binary
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().ok();
    let app_filter = Targets::new().with_target("fxw", app_level(verbose, env_filter.is_some()));
    let env_filter = env_filter.unwrap_or_else(|| {
        EnvFilter::new(if verbose { "debug" } else { "off" })
    });

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time().with_writer(std::io::stderr))
        .with(app_filter)
        .with(env_filter)
        .init();
}

// Ceiling for the crate's own events. With RUST_LOG set the env filter decides.
fn app_level(verbose: bool, env_configured: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else if env_configured {
        LevelFilter::TRACE
    } else {
        LevelFilter::OFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_level() {
        assert_eq!(app_level(false, false), LevelFilter::OFF);
        assert_eq!(app_level(true, false), LevelFilter::DEBUG);
        assert_eq!(app_level(true, true), LevelFilter::DEBUG);
        // RUST_LOG alone must be able to enable the crate's logs.
        assert_eq!(app_level(false, true), LevelFilter::TRACE);
    }
}
