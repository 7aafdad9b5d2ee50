/// Initialization parameters for the GPU layer.
///
/// Kept deliberately small; a knob is only added once a concrete platform or
/// backend requirement shows up.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when one is available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// FIFO is broadly supported and vsynced, which suits a fixed-view demo.
    pub present_mode: wgpu::PresentMode,

    /// Required wgpu features.
    ///
    /// An empty set keeps the widest adapter compatibility.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// A hint; actual behavior depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
