use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use hedron_engine::core::{App, AppControl, FrameCtx};
use hedron_engine::device::Gpu;

use crate::cube::CubeRenderer;

/// Demo application: one cube, one fixed viewpoint.
///
/// The renderer is created lazily on the first frame (the GPU device only
/// exists once the window is up). Creation failure is fatal: it is logged
/// and the run ends.
#[derive(Default)]
pub struct CubeApp {
    renderer: Option<CubeRenderer>,
}

impl App for CubeApp {
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = window_id;

        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => AppControl::Exit,
            _ => AppControl::Continue,
        }
    }

    fn on_resize(&mut self, gpu: &Gpu<'_>, new_size: PhysicalSize<u32>) {
        if let Some(renderer) = &self.renderer {
            renderer.resize(gpu.queue(), new_size.width, new_size.height);
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.renderer.is_none() {
            match CubeRenderer::new(ctx.gpu.device(), ctx.gpu.surface_format()) {
                Ok(renderer) => self.renderer = Some(renderer),
                Err(e) => {
                    log::error!("cube renderer initialization failed: {e:#}");
                    return AppControl::Exit;
                }
            }
        }

        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Continue;
        };

        ctx.render(|_rctx, target| {
            renderer.render(target);
        })
    }
}
