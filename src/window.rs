//! winit application driving the effect at display refresh.
//!
//! The app owns the window, the GPU state and the particle system. Every
//! redraw it records a frame through a [`LineCanvas`](crate::gpu) and
//! presents it; `d` toggles the debug grid, window resizes re-initialize the
//! system at the new dimensions.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::canvas::Canvas;
use crate::error::RunError;
use crate::gpu::GpuState;
use crate::system::ParticleSystem;
use crate::time::Time;

pub(crate) struct App {
    system: ParticleSystem,
    title: String,
    size: (u32, u32),
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    clock: Time,
    error: Option<RunError>,
}

impl App {
    pub(crate) fn new(system: ParticleSystem, title: String, width: u32, height: u32) -> Self {
        Self {
            system,
            title,
            size: (width, height),
            window: None,
            gpu: None,
            clock: Time::new(),
            error: None,
        }
    }

    /// The error that aborted the event loop, if any.
    pub(crate) fn take_error(&mut self) -> Option<RunError> {
        self.error.take()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(self.size.0, self.size.1));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.error = Some(RunError::Window(e));
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(window.clone())) {
            Ok(gpu) => {
                self.gpu = Some(gpu);
                self.window = Some(window);
            }
            Err(e) => {
                self.error = Some(RunError::Gpu(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                if physical_size.width > 0 && physical_size.height > 0 {
                    self.system.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::KeyD) => {
                            let on = self.system.toggle_debug();
                            log::info!("debug grid {}", if on { "on" } else { "off" });
                        }
                        PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                        _ => {}
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.clock.update();

                if let Some(gpu) = &mut self.gpu {
                    let mut canvas = gpu.begin_frame();
                    canvas.set_line_width(1.0);
                    self.system.render(&mut canvas);

                    match gpu.present(canvas) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu.reconfigure();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::warn!("surface error: {e:?}"),
                    }
                }

                if self.clock.frame() % 300 == 0 {
                    log::debug!("{:.1} fps", self.clock.fps());
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}
