use crate::constants::RUST_LOG_ENV;
use std::ffi::OsString;
use tracing::debug;
use tracing_subscriber::{
    EnvFilter,
    filter::{Directive, LevelFilter},
};

const CRATE_TARGET: &str = "app_utils";

/// Installs the process-wide subscriber at INFO.
///
/// Only the first call has an effect; it returns `true` when it installed the
/// subscriber and `false` when one was already in place.
pub fn setup_logging() -> bool {
    setup_logging_with(false)
}

/// Same as [`setup_logging`], with `verbose` raising this crate to DEBUG.
pub fn setup_logging_with(verbose: bool) -> bool {
    let rust_log = std::env::var_os(RUST_LOG_ENV).and_then(|v| OsString::into_string(v).ok());
    let filter = build_filter(verbose, rust_log.as_deref());

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if installed {
        debug!("set up logging");
    }
    installed
}

/// Builds the filter. Usable `RUST_LOG` directives replace the defaults
/// entirely; otherwise INFO everywhere, DEBUG for this crate when `verbose`.
pub fn build_filter(
    verbose: bool,
    rust_log: Option<&str>,
) -> EnvFilter {
    let mut from_env = Vec::new();
    for s in rust_log.into_iter().flat_map(|env| env.split(',')) {
        let s = s.trim();
        if s.is_empty() {
            continue;
        }
        match s.parse::<Directive>() {
            Ok(d) => from_env.push(d),
            Err(err) => eprintln!("WARN ignoring log directive: `{s}`: {err}"),
        }
    }

    // e.g. `RUST_LOG=error app-utils -v` logs only errors
    if !from_env.is_empty() {
        return from_env
            .into_iter()
            .fold(EnvFilter::new(""), |filter, d| filter.add_directive(d));
    }

    let own_level = if verbose { "debug" } else { "info" };
    let mut filter = EnvFilter::new("").add_directive(LevelFilter::INFO.into());
    if let Ok(d) = format!("{CRATE_TARGET}={own_level}").parse::<Directive>() {
        filter = filter.add_directive(d);
    }
    filter
}
