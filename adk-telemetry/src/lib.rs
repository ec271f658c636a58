//! # adk-telemetry
//!
//! Logging setup shared by ADK-Rust theme tooling.
//!
//! Library crates only emit `tracing` events; binaries and tests call one of
//! the `init_*` functions once to install a subscriber.
//!
//! ```rust,no_run
//! use adk_telemetry::{TelemetryConfig, init_with_config};
//!
//! init_with_config(TelemetryConfig::new("theme-build").with_log_directive("adk_theme=debug"))
//!     .expect("logging");
//! ```

mod error;
mod init;

pub use error::TelemetryError;
pub use init::{TelemetryConfig, init_telemetry, init_with_config};
