//! Window management
//!
//! Cross-platform window and video mode control via winit

use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event_loop::EventLoop,
    monitor::{MonitorHandle, VideoModeHandle},
    window::{Fullscreen, Window},
};

use skirmish_services::settings::Resolution;

use crate::display::GameDisplay;
use crate::video::{VideoBackend, VideoError, WindowMode};

pub struct WindowConfig {
    pub title: String,
    pub resolution: Resolution,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Skirmish".to_string(),
            resolution: Resolution::new(1024, 768),
        }
    }
}

/// Create window attributes from config.
///
/// The window always opens windowed; fullscreen is applied afterwards
/// through [`VideoBackend::set_mode`] so it goes through mode negotiation.
pub fn window_attributes(config: &WindowConfig) -> winit::window::WindowAttributes {
    Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(
            config.resolution.width,
            config.resolution.height,
        ))
}

/// Create the event loop the game window lives in.
///
/// In winit 0.30+, windows must be created inside the `resumed` event.
pub fn create_event_loop() -> Result<EventLoop<()>, winit::error::EventLoopError> {
    EventLoop::new()
}

fn depth_of(mode: &VideoModeHandle) -> u8 {
    u8::try_from(mode.bit_depth()).unwrap_or(u8::MAX)
}

/// Video backend driving a winit window
pub struct WinitVideo {
    window: Window,
    gamma: f32,
}

impl WinitVideo {
    pub fn new(window: Window) -> Self {
        Self { window, gamma: 1.0 }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Gamma the renderer should apply as a post-process; winit exposes no
    /// hardware ramp.
    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    fn monitor(&self) -> Option<MonitorHandle> {
        self.window
            .current_monitor()
            .or_else(|| self.window.primary_monitor())
    }

    /// Best exclusive mode of exactly `width`x`height`, preferring modes at
    /// least `bpp` deep, then deeper, then faster.
    fn find_mode(
        monitor: &MonitorHandle,
        width: u32,
        height: u32,
        bpp: u8,
    ) -> Option<VideoModeHandle> {
        monitor
            .video_modes()
            .filter(|m| m.size() == PhysicalSize::new(width, height))
            .max_by_key(|m| {
                (
                    depth_of(m) >= bpp,
                    m.bit_depth(),
                    m.refresh_rate_millihertz(),
                )
            })
    }
}

impl VideoBackend for WinitVideo {
    fn mode_possible(&self, width: u32, height: u32, bpp: u8, mode: WindowMode) -> Option<u8> {
        let monitor = self.monitor();
        match mode {
            WindowMode::Windowed => match monitor {
                Some(monitor) => {
                    let size = monitor.size();
                    (width <= size.width && height <= size.height).then_some(bpp)
                }
                // Some platforms (Wayland) never report monitors; trust the compositor
                None => Some(bpp),
            },
            WindowMode::Fullscreen => {
                let monitor = monitor?;
                Self::find_mode(&monitor, width, height, bpp).map(|m| depth_of(&m))
            }
        }
    }

    fn set_mode(
        &mut self,
        width: u32,
        height: u32,
        bpp: u8,
        mode: WindowMode,
    ) -> Result<(), VideoError> {
        match mode {
            WindowMode::Windowed => {
                self.window.set_fullscreen(None);
                let _ = self.window.request_inner_size(PhysicalSize::new(width, height));
            }
            WindowMode::Fullscreen => {
                let monitor = self.monitor().ok_or(VideoError::NoMonitor(mode))?;
                let video_mode = Self::find_mode(&monitor, width, height, bpp).ok_or(
                    VideoError::Unsupported {
                        width,
                        height,
                        bpp,
                        mode,
                    },
                )?;
                self.window
                    .set_fullscreen(Some(Fullscreen::Exclusive(video_mode)));
            }
        }
        tracing::info!("Video mode set to {}x{}x{} {}", width, height, bpp, mode);
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn set_gamma(&mut self, gamma: f32) {
        tracing::debug!("Gamma set to {:.2}", gamma);
        self.gamma = gamma;
    }
}

/// Game display backed by a real window
pub struct WindowDisplay {
    video: WinitVideo,
    turbo: bool,
    grid: bool,
    last_message: Option<String>,
}

impl WindowDisplay {
    pub fn new(window: Window) -> Self {
        Self {
            video: WinitVideo::new(window),
            turbo: false,
            grid: false,
            last_message: None,
        }
    }

    pub fn window(&self) -> &Window {
        self.video.window()
    }

    pub fn turbo(&self) -> bool {
        self.turbo
    }

    pub fn grid(&self) -> bool {
        self.grid
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }
}

impl GameDisplay for WindowDisplay {
    fn video(&mut self) -> &mut dyn VideoBackend {
        &mut self.video
    }

    fn redraw_everything(&mut self) {
        self.video.window().request_redraw();
    }

    fn set_turbo(&mut self, on: bool) {
        self.turbo = on;
    }

    fn set_grid(&mut self, on: bool) {
        self.grid = on;
        self.video.window().request_redraw();
    }

    fn show_message(&mut self, message: &str) {
        // No message box toolkit yet; surface it in the log
        tracing::warn!("{}", message);
        self.last_message = Some(message.to_string());
    }
}
