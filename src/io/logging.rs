//! Logger setup for the command-line binary

use log::LevelFilter;

/// Verbosity selected by the `--quiet` and `--verbose` flags
pub const fn level_filter(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install `env_logger` with a default level, overridable through `RUST_LOG`
///
/// Calling it again after a logger is installed has no effect.
pub fn init_logging(default_level: LevelFilter) {
    let installed = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init()
        .is_ok();

    if installed {
        log::debug!("Logging initialised at {default_level}");
    }
}
