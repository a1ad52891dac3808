//! Logging setup for the schemagen binary
//!
//! Library crates log through the `log` facade: `info!` for per-file
//! progress, `debug!` for per-declaration detail. The binary logs at `warn`
//! by default and at `info` with `--verbose`; `RUST_LOG` overrides both.
//!
//! ```bash
//! RUST_LOG=debug schemagen generate scenario.xsd
//! RUST_LOG=schemagen_model=debug schemagen check scenario.xsd
//! ```

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;
use std::sync::Once;

static INIT: Once = Once::new();

/// Default level for the given verbosity
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::Info } else { LevelFilter::Warn }
}

/// Initialize logging; subsequent calls are no-ops
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let level = default_level(verbose).to_string().to_lowercase();
        Builder::from_env(Env::default().default_filter_or(level))
            .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), LevelFilter::Warn);
        assert_eq!(default_level(true), LevelFilter::Info);
    }
}
