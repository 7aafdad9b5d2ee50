use winit::dpi::PhysicalSize;

use super::{Gpu, SurfaceErrorAction};

/// Returns whether a surface of this size can be configured and drawn to.
///
/// Zero-area sizes occur while the window is minimized.
#[inline]
pub(crate) fn is_drawable(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if formats.is_empty() {
        return None;
    }

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if formats.contains(&f) {
                return Some(f);
            }
        }
    }

    Some(formats[0])
}

pub(crate) fn default_alpha_mode(
    alpha_modes: &[wgpu::CompositeAlphaMode],
) -> wgpu::CompositeAlphaMode {
    alpha_modes
        .first()
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Applies a resize to the surface configuration.
///
/// Returns `true` if the surface was reconfigured. Zero-area sizes are
/// recorded but not configured; the next non-zero resize restores drawing.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) -> bool {
    *size = new_size;
    if !is_drawable(new_size) {
        return false;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
    true
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if is_drawable(size) {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

/// Creates a depth texture matching `size` and returns its view.
///
/// Called at startup and again on every effective resize, so the depth
/// attachment extent always matches the color attachment.
pub(crate) fn create_depth_view(
    device: &wgpu::Device,
    size: PhysicalSize<u32>,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("hedron depth texture"),
        size: wgpu::Extent3d {
            width: size.width.max(1),
            height: size.height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: Gpu::DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    use wgpu::TextureFormat::{Bgra8Unorm, Bgra8UnormSrgb, Rgba8Unorm, Rgba8UnormSrgb};

    // ── format selection ──────────────────────────────────────────────────

    #[test]
    fn format_prefers_bgra_srgb() {
        let formats = [Bgra8Unorm, Rgba8UnormSrgb, Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(Bgra8UnormSrgb));
    }

    #[test]
    fn format_falls_back_to_rgba_srgb() {
        let formats = [Bgra8Unorm, Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(Rgba8UnormSrgb));
    }

    #[test]
    fn format_uses_first_when_no_srgb_available() {
        let formats = [Rgba8Unorm, Bgra8Unorm];
        assert_eq!(choose_surface_format(&formats, true), Some(Rgba8Unorm));
    }

    #[test]
    fn format_ignores_srgb_when_not_preferred() {
        let formats = [Bgra8Unorm, Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, false), Some(Bgra8Unorm));
    }

    #[test]
    fn format_empty_capability_list_is_none() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    // ── alpha mode ────────────────────────────────────────────────────────

    #[test]
    fn alpha_mode_takes_first_supported() {
        let modes = [
            wgpu::CompositeAlphaMode::Opaque,
            wgpu::CompositeAlphaMode::PreMultiplied,
        ];
        assert_eq!(default_alpha_mode(&modes), wgpu::CompositeAlphaMode::Opaque);
    }

    #[test]
    fn alpha_mode_defaults_to_auto() {
        assert_eq!(default_alpha_mode(&[]), wgpu::CompositeAlphaMode::Auto);
    }

    // ── drawable size ─────────────────────────────────────────────────────

    #[test]
    fn zero_area_sizes_are_not_drawable() {
        assert!(!is_drawable(PhysicalSize::new(0, 480)));
        assert!(!is_drawable(PhysicalSize::new(640, 0)));
        assert!(!is_drawable(PhysicalSize::new(0, 0)));
        assert!(is_drawable(PhysicalSize::new(1, 1)));
    }
}
