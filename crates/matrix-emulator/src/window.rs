//! Isolated window management layer
//!
//! Based on softbuffer pattern: https://github.com/rust-windowing/softbuffer
//! All platform-specific code lives here; the rest of the crate only sees
//! [`Window::present`] and [`Window::pump`].

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window as WinitWindow, WindowAttributes, WindowId};

use crate::canvas::PixelCanvas;
use crate::config::EmulatorConfig;
use crate::EmulatorError;

/// Desktop window presenting the emulated LED matrix.
pub struct Window {
    event_loop: EventLoop<()>,
    window: Arc<WinitWindow>,
    surface: Surface<Arc<WinitWindow>, Arc<WinitWindow>>,
    scale: u32,
    close_requested: bool,
}

/// One-shot handler that creates the window inside `resumed`, where
/// winit 0.30 requires window creation to happen.
struct WindowCreator {
    attributes: Option<WindowAttributes>,
    window: Option<Arc<WinitWindow>>,
    surface: Option<Surface<Arc<WinitWindow>, Arc<WinitWindow>>>,
    error: Option<String>,
}

impl ApplicationHandler for WindowCreator {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.error.is_some() {
            return;
        }
        let Some(attributes) = self.attributes.take() else {
            return;
        };
        match event_loop.create_window(attributes) {
            Ok(window) => {
                let window = Arc::new(window);
                let context = match Context::new(window.clone()) {
                    Ok(context) => context,
                    Err(e) => {
                        self.error = Some(format!("softbuffer context: {e}"));
                        return;
                    }
                };
                match Surface::new(&context, window.clone()) {
                    Ok(surface) => {
                        self.window = Some(window);
                        self.surface = Some(surface);
                    }
                    Err(e) => self.error = Some(format!("softbuffer surface: {e}")),
                }
            }
            Err(e) => self.error = Some(format!("create_window: {e}")),
        }
    }

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, _: WindowEvent) {}
}

/// Handler used while pumping events between frames.
struct EventHandler {
    close_requested: bool,
}

impl ApplicationHandler for EventHandler {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.close_requested = true;
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                // Redraw happens via present() calls.
            }
            _ => {}
        }
    }
}

impl Window {
    /// Open a window sized for a `width`×`height` logical canvas at the
    /// configured upscaling factor.
    pub fn new(width: u32, height: u32, config: &EmulatorConfig) -> Result<Self, EmulatorError> {
        let mut event_loop = EventLoop::new()?;

        let scale = config.scale.max(1);
        let scaled_w = width * scale;
        let scaled_h = height * scale;

        let attributes = WindowAttributes::default()
            .with_title("LED Matrix Clock")
            .with_inner_size(winit::dpi::PhysicalSize::new(scaled_w, scaled_h))
            .with_resizable(false);

        let mut creator = WindowCreator {
            attributes: Some(attributes),
            window: None,
            surface: None,
            error: None,
        };

        // Pump once so `resumed` runs and the window gets created.
        let _ = event_loop.pump_app_events(Some(Duration::from_millis(1)), &mut creator);

        if let Some(error) = creator.error {
            return Err(EmulatorError::Window(error));
        }
        let (window, mut surface) = match (creator.window, creator.surface) {
            (Some(window), Some(surface)) => (window, surface),
            _ => {
                return Err(EmulatorError::Window(
                    "event loop produced no window".into(),
                ))
            }
        };

        // Fixed-size window: resize the surface once and never again.
        let (w, h) = match (NonZeroU32::new(scaled_w), NonZeroU32::new(scaled_h)) {
            (Some(w), Some(h)) => (w, h),
            _ => return Err(EmulatorError::Window("zero-sized window".into())),
        };
        surface
            .resize(w, h)
            .map_err(|e| EmulatorError::Surface(e.to_string()))?;

        tracing::debug!(width, height, scale, "emulator window created");

        Ok(Self {
            event_loop,
            window,
            surface,
            scale,
            close_requested: false,
        })
    }

    /// Process pending window events.
    ///
    /// Returns `false` once the user has requested a close.
    pub fn pump(&mut self) -> bool {
        let mut handler = EventHandler {
            close_requested: false,
        };
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut handler);
        if handler.close_requested || matches!(status, PumpStatus::Exit(_)) {
            self.close_requested = true;
        }
        !self.close_requested
    }

    /// Copy the canvas to the window surface, upscaled block-wise.
    pub fn present(&mut self, canvas: &PixelCanvas) -> Result<(), EmulatorError> {
        let width = canvas.width();
        let height = canvas.height();
        let scale = self.scale;
        let window_width = width * scale;

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| EmulatorError::Surface(e.to_string()))?;

        let pixels = canvas.pixels();
        if scale == 1 {
            buffer.copy_from_slice(pixels);
        } else {
            for y in 0..height {
                for x in 0..width {
                    let Some(&pixel) = pixels.get((y * width + x) as usize) else {
                        continue;
                    };
                    for dy in 0..scale {
                        let row = (y * scale + dy) * window_width + x * scale;
                        for dx in 0..scale {
                            if let Some(slot) = buffer.get_mut((row + dx) as usize) {
                                *slot = pixel;
                            }
                        }
                    }
                }
            }
        }

        buffer
            .present()
            .map_err(|e| EmulatorError::Present(e.to_string()))?;
        self.window.request_redraw();
        Ok(())
    }
}
