//! Hedron engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo layer.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod render;
