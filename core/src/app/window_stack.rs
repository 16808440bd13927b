//! Host window stack
//!
//! Popup windows are pushed onto a stack owned by the host; only the top
//! window receives input. A window closes itself by popping the stack.

/// Window kinds the host knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    AdvancedSettings,
}

/// Push/pop interface the settings window uses to dismiss itself.
pub trait UiManager {
    fn push_window(&mut self, window: WindowKind);

    /// Remove the top window, returning it.
    fn pop_window(&mut self) -> Option<WindowKind>;

    fn top_window(&self) -> Option<WindowKind>;
}

/// Plain vector-backed window stack.
#[derive(Debug, Clone, Default)]
pub struct WindowStack {
    windows: Vec<WindowKind>,
}

impl WindowStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }
}

impl UiManager for WindowStack {
    fn push_window(&mut self, window: WindowKind) {
        tracing::debug!("Push window {:?}", window);
        self.windows.push(window);
    }

    fn pop_window(&mut self) -> Option<WindowKind> {
        let window = self.windows.pop();
        tracing::debug!("Pop window {:?}", window);
        window
    }

    fn top_window(&self) -> Option<WindowKind> {
        self.windows.last().copied()
    }
}
