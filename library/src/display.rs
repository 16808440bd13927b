//! Display backend for an eframe viewport
//!
//! Mode switches requested by the settings window are queued as
//! [`DisplayRequest`]s and drained by the app, which turns them into
//! viewport commands on the next frame.

use wayrest_core::app::display::{COMMON_RESOLUTIONS, DisplayBackend, QUALITY_LEVELS, Resolution};

/// A pending change to the host viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayRequest {
    /// Resize the window and enter or leave fullscreen
    Mode {
        resolution: Resolution,
        fullscreen: bool,
    },
    /// Renderer quality level
    Quality(i32),
}

/// Display backend that queues mode switches for the viewport.
#[derive(Debug, Clone)]
pub struct ViewportDisplay {
    resolutions: Vec<Resolution>,
    quality_names: Vec<String>,
    texture_arrays: bool,
    quality_level: i32,
    pending: Vec<DisplayRequest>,
}

impl Default for ViewportDisplay {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ViewportDisplay {
    /// Offer the common resolutions that fit on a monitor of `monitor_size`
    /// (all of them when the size is unknown).
    pub fn new(monitor_size: Option<(f32, f32)>) -> Self {
        let mut resolutions: Vec<Resolution> = match monitor_size {
            Some((width, height)) => COMMON_RESOLUTIONS
                .iter()
                .copied()
                .filter(|r| r.width as f32 <= width && r.height as f32 <= height)
                .collect(),
            None => COMMON_RESOLUTIONS.to_vec(),
        };
        if resolutions.is_empty() {
            tracing::warn!("Monitor smaller than every known resolution, offering all of them");
            resolutions = COMMON_RESOLUTIONS.to_vec();
        }

        Self {
            resolutions,
            quality_names: QUALITY_LEVELS.iter().map(|name| name.to_string()).collect(),
            texture_arrays: true,
            quality_level: 0,
            pending: Vec::new(),
        }
    }

    /// Last quality level applied.
    pub fn quality_level(&self) -> i32 {
        self.quality_level
    }

    /// Take every request queued since the last call.
    pub fn drain_requests(&mut self) -> Vec<DisplayRequest> {
        std::mem::take(&mut self.pending)
    }
}

impl DisplayBackend for ViewportDisplay {
    fn resolutions(&self) -> Vec<Resolution> {
        self.resolutions.clone()
    }

    fn quality_names(&self) -> Vec<String> {
        self.quality_names.clone()
    }

    fn supports_texture_arrays(&self) -> bool {
        self.texture_arrays
    }

    fn set_resolution(&mut self, width: i32, height: i32, fullscreen: bool) {
        self.pending.push(DisplayRequest::Mode {
            resolution: Resolution::new(width, height),
            fullscreen,
        });
    }

    fn set_quality_level(&mut self, level: i32) {
        self.quality_level = level;
        self.pending.push(DisplayRequest::Quality(level));
    }
}
