//! Display mode collaborator
//!
//! The settings window lists resolutions and quality levels from a
//! [`DisplayBackend`] and asks it to switch modes when screen settings change.

use std::fmt;

/// A screen resolution in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: i32,
    pub height: i32,
}

impl Resolution {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Host display capabilities and mode switching.
pub trait DisplayBackend {
    /// Resolutions the display supports, in presentation order.
    fn resolutions(&self) -> Vec<Resolution>;

    /// Names of the available quality levels, lowest first.
    fn quality_names(&self) -> Vec<String>;

    /// Whether 2D texture arrays are available on this GPU.
    fn supports_texture_arrays(&self) -> bool;

    /// Switch the window to a new resolution and fullscreen state.
    fn set_resolution(&mut self, width: i32, height: i32, fullscreen: bool);

    /// Switch the renderer to a quality level (index into [`quality_names`](Self::quality_names)).
    fn set_quality_level(&mut self, level: i32);
}

/// Common desktop resolutions.
pub const COMMON_RESOLUTIONS: &[Resolution] = &[
    Resolution::new(640, 480),
    Resolution::new(800, 600),
    Resolution::new(1024, 768),
    Resolution::new(1280, 720),
    Resolution::new(1280, 1024),
    Resolution::new(1366, 768),
    Resolution::new(1600, 900),
    Resolution::new(1920, 1080),
    Resolution::new(2560, 1440),
    Resolution::new(3840, 2160),
];

/// Default quality level names, lowest first.
pub const QUALITY_LEVELS: &[&str] = &[
    "Fastest",
    "Fast",
    "Simple",
    "Good",
    "Beautiful",
    "Fantastic",
];

/// Index of `(width, height)` in `resolutions`, if present.
pub fn find_resolution(resolutions: &[Resolution], width: i32, height: i32) -> Option<usize> {
    resolutions
        .iter()
        .position(|r| r.width == width && r.height == height)
}
