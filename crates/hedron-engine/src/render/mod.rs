//! GPU rendering support types.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record their
//! passes into the frame encoder through [`RenderTarget`].

mod ctx;

pub use ctx::{RenderCtx, RenderTarget};
