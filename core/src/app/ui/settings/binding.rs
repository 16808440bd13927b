//! Bindings between controls and settings properties

use crate::app::store::SettingKey;

/// How a control's value is written back to the store on save.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BindingKind {
    /// Value of the control's natural type goes straight to `key`
    Direct(SettingKey),
    /// Text parsed as a float and clamped; unparseable text is ignored
    ClampedFloat { key: SettingKey, min: f32, max: f32 },
    /// Choice index stored as an [`InteractionModeIcon`] name
    IconMode(SettingKey),
    /// Resolution choice (screen change)
    Resolution,
    /// Fullscreen checkbox (screen change)
    Fullscreen,
    /// Quality level choice (screen change)
    QualityLevel,
}

impl BindingKind {
    /// Whether editing this control requires a display mode switch on save.
    pub fn is_screen_change(&self) -> bool {
        matches!(
            self,
            BindingKind::Resolution | BindingKind::Fullscreen | BindingKind::QualityLevel
        )
    }
}

/// Icon styles for the interaction mode indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionModeIcon {
    #[default]
    None,
    Minimal,
    Large,
    Classic,
    Colour,
    Monochrome,
}

impl InteractionModeIcon {
    /// Every style, in slider order.
    pub const ALL: [InteractionModeIcon; 6] = [
        InteractionModeIcon::None,
        InteractionModeIcon::Minimal,
        InteractionModeIcon::Large,
        InteractionModeIcon::Classic,
        InteractionModeIcon::Colour,
        InteractionModeIcon::Monochrome,
    ];

    /// Name stored in the settings file.
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionModeIcon::None => "none",
            InteractionModeIcon::Minimal => "minimal",
            InteractionModeIcon::Large => "large",
            InteractionModeIcon::Classic => "classic",
            InteractionModeIcon::Colour => "colour",
            InteractionModeIcon::Monochrome => "monochrome",
        }
    }

    /// Exact (case-sensitive) lookup by stored name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.as_str() == name)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Stored names, in slider order.
    pub fn names() -> [&'static str; 6] {
        Self::ALL.map(Self::as_str)
    }
}
