use tracing_subscriber::EnvFilter;

/// Returns the filter for a verbosity count.
///
/// Without `-v` the filter comes from `RUST_LOG`, falling back to `info`.
/// Each `-v` raises the level: `debug`, then `trace`.
pub fn filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Installs the global subscriber, writing to stderr so stdout holds only
/// the table.
pub fn init(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_the_level() {
        assert_eq!(filter(1).to_string(), "debug");
        assert_eq!(filter(2).to_string(), "trace");
        assert_eq!(filter(7).to_string(), "trace");
    }
}
