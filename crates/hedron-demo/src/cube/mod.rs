//! Fixed-viewpoint cube: mesh constants, camera math and the renderer.

mod camera;
mod mesh;
mod renderer;

pub use renderer::CubeRenderer;
