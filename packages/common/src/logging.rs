//! Structured logging infrastructure
//!
//! Provides env_logger-based logging that never records secret material.
//! Library crates emit events through `tracing`, which forwards to the `log`
//! facade when no subscriber is installed, so a single `init()` covers both.

use log::{debug, error, info, warn};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points for the digest crates
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=info` - Enable info and above
    /// - `RUST_LOG=cryypt_digest=trace` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; only the first call installs a logger.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a failed cryptographic operation
    ///
    /// Only the error's type name is recorded, never its payload, since
    /// configuration errors may echo caller input.
    pub fn log_crypto_error<E: std::error::Error + ?Sized>(operation: &str, _error: &E) {
        error!(
            "Cryptographic operation failed: {} (error_type: {})",
            operation,
            std::any::type_name::<E>()
        );
    }

    /// Log a digest operation with the algorithm name and input size
    pub fn log_digest_operation(operation: &str, algorithm: &str, input_len: usize) {
        debug!("Digest operation: {operation} (algorithm: {algorithm}, input_len: {input_len})");
    }

    /// Log performance metrics and timing information
    pub fn log_performance_metric(operation: &str, duration_ms: u64, success: bool) {
        if success {
            debug!("Performance: {operation} completed in {duration_ms}ms");
        } else {
            warn!("Performance: {operation} failed after {duration_ms}ms");
        }
    }
}

/// Macro for secure cryptographic operation logging
#[macro_export]
macro_rules! log_crypto_safe {
    (ERROR, $operation:expr, $error:expr) => {
        log::error!(
            "Cryptographic operation failed: {} (error_type: {})",
            $operation,
            std::any::type_name_of_val(&$error)
        );
    };
    (WARN, $operation:expr, $error:expr) => {
        log::warn!(
            "Cryptographic operation warning: {} (error_type: {})",
            $operation,
            std::any::type_name_of_val(&$error)
        );
    };
}
