//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (platform
//! loop) and the demo layer: the `App` callbacks and the per-frame context.
//! Runtime internals stay out of user code.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
