// SPDX-License-Identifier: MPL-2.0

//! Installs a logger that writes to the console, honouring `RUST_LOG`.
//!
//! Intended for example binaries and quick manual testing; production
//! embedders are expected to install their own `log` implementation.

/// Initialise console logging at the default level (`info`), or whatever
/// `RUST_LOG` specifies.
pub fn init() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}

/// Initialise console logging at the given level, overridable by `RUST_LOG`.
pub fn init_with_level(level: log::LevelFilter) {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}
