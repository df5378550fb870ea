//! # Tessera Log
//!
//! Zero-config `tracing` setup shared by the tessera binaries and tests.
//!
//! ## Quick Start
//!
//! ```rust
//! fn main() -> tessera_log::Result<()> {
//!     // Env if set, otherwise a preset for the build profile
//!     let _guard = tessera_log::auto_init()?;
//!
//!     tracing::info!(node = "root", "resolving");
//!     Ok(())
//! }
//! ```
//!
//! Events go to stderr, so stdout stays free for program output.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format, Writer};
pub use error::{Error, Result};

/// Auto-detect and initialize the best logging configuration
///
/// `TESSERA_LOG` or `RUST_LOG` selects [`Config::from_env`]; otherwise debug
/// builds get [`Config::development`] and release builds
/// [`Config::production`].
pub fn auto_init() -> Result<LoggerGuard> {
    init_with(Config::detect(|key| std::env::var(key).ok()))
}

/// Initialize with default configuration
pub fn init() -> Result<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> Result<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}

/// Initialize for tests
///
/// Safe to call from every test: the first call installs a subscriber that
/// writes through libtest's capture, later calls return a no-op guard.
pub fn init_test() -> LoggerGuard {
    if tracing::dispatcher::has_been_set() {
        return LoggerGuard::noop();
    }
    init_with(Config::test()).unwrap_or_else(|_| LoggerGuard::noop())
}
