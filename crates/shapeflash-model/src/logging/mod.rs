//! Logging utilities.
//!
//! Centralizes logger initialization for binaries built on the model
//! crates. Library code only uses the `log` facade; no backend is imposed
//! beyond what `init_logging` sets up.

mod init;

pub use init::{LoggingConfig, init_logging};
