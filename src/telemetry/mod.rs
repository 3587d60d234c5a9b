//! Tracing initialization.

use tracing_subscriber::{fmt, EnvFilter, prelude::*};

use crate::config::ConfigSource;

const DEFAULT_DIRECTIVES: &str = "info,tower_http=info,axum=info";

/// Filter from `RUST_LOG`, falling back to the defaults when unset or unparsable.
fn env_filter(source: &impl ConfigSource) -> EnvFilter {
    source
        .non_empty("RUST_LOG")
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber. Must run before the config check so its
/// report reaches the log.
///
/// `NO_COLOR` (any non-empty value) disables ANSI output, e.g. for log shippers.
pub fn init(source: &impl ConfigSource) {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_ansi(source.non_empty("NO_COLOR").is_none());

    tracing_subscriber::registry()
        .with(env_filter(source))
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapSource;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn filter_defaults_when_unset_or_blank() {
        assert_eq!(env_filter(&MapSource::new()).max_level_hint(), Some(LevelFilter::INFO));
        let blank = MapSource::new().with("RUST_LOG", "");
        assert_eq!(env_filter(&blank).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn filter_from_rust_log() {
        let src = MapSource::new().with("RUST_LOG", "debug");
        assert_eq!(env_filter(&src).max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
