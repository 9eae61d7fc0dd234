//! # Admission Telemetry
//!
//! Structured logging for transaction admission.
//!
//! Library crates only emit `tracing` events; the embedding process calls
//! [`init_logging`] once to decide where they go.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use admission_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ADMISSION_SERVICE_NAME` | `tx-admission` | Service name attached to log lines |
//! | `ADMISSION_LOG_LEVEL` or `RUST_LOG` | `info` | Log level filter |
//! | `ADMISSION_LOG_JSON` | `false` | Emit JSON lines instead of text |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

// Macros below expand to `$crate::tracing::...` so callers need no direct dependency.
#[doc(hidden)]
pub use tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TelemetryError {
    /// The level string is not a valid `EnvFilter` directive
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// Directive as configured
        filter: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber was already installed in this process
    #[error("logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Log a transaction-related event with standard fields.
///
/// ```rust,ignore
/// log_tx_event!(warn, "transaction rejected", tx_hash, stage = "signature");
/// ```
#[macro_export]
macro_rules! log_tx_event {
    ($level:ident, $msg:expr, $tx_hash:expr $(, $($field:tt)*)?) => {
        $crate::tracing::$level!(
            tx_hash = %$tx_hash,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a rejection with the pipeline stage and the rendered reason.
#[macro_export]
macro_rules! log_rejection {
    ($tx_hash:expr, $stage:expr, $reason:expr) => {
        $crate::log_tx_event!(
            warn,
            "transaction rejected",
            $tx_hash,
            stage = $stage,
            reason = %$reason
        )
    };
}

/// Log an accepted transaction with the command it carries.
#[macro_export]
macro_rules! log_admission {
    ($tx_hash:expr, $command:expr) => {
        $crate::log_tx_event!(debug, "transaction admitted", $tx_hash, command = $command)
    };
}
