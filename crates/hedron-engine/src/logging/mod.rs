//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade so the
//! engine and the demo binary share one backend setup.

mod init;

pub use init::{LoggingConfig, init_logging};
