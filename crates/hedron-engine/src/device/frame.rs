/// A single acquired frame.
///
/// Short-lived: the surface texture blocks acquisition of subsequent frames
/// until it is presented, so a `GpuFrame` should be recorded and submitted
/// within the same callback.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
