use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log`, `JOURNEY_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Resolve the log filter: explicit flag, then `JOURNEY_LOG`, then `RUST_LOG`.
#[must_use]
pub fn resolve_filter(flag: Option<&str>) -> String {
    resolve_filter_with(flag, |key| std::env::var(key).ok())
}

fn resolve_filter_with(flag: Option<&str>, env: impl Fn(&str) -> Option<String>) -> String {
    flag.map(str::to_owned)
        .or_else(|| env("JOURNEY_LOG"))
        .or_else(|| env("RUST_LOG"))
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

/// Install the global subscriber. Events go to stderr so they never mix with
/// command output.
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
