//! Common types for plugin descriptions.

use bitflags::bitflags;

/// Microname given to ports when the plugin supplies none.
pub const DEFAULT_PORT_MICRONAME: &str = "N/A";

/// Annotation emitted by [`PluginSink::mark_has_gui`](crate::PluginSink::mark_has_gui).
pub const SMALL_GUI_ANNOTATION: &str =
    "uiext:ui <http://calf.sourceforge.net/small_plugins/gui/gtk2-gui> ;";

/// Kind of a plugin port. Fixed when the port is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortKind {
    Audio,
    Event,
    Control,
}

impl PortKind {
    /// Signature character for this kind in the given direction.
    ///
    /// Inputs are lowercase, outputs uppercase.
    pub fn code(self, direction: PortDirection) -> char {
        let code = match self {
            Self::Audio => 'a',
            Self::Event => 'e',
            Self::Control => 'c',
        };
        match direction {
            PortDirection::Input => code,
            PortDirection::Output => code.to_ascii_uppercase(),
        }
    }

    /// Inverse of [`PortKind::code`].
    pub fn from_code(code: char) -> Option<(Self, PortDirection)> {
        let kind = match code.to_ascii_lowercase() {
            'a' => Self::Audio,
            'e' => Self::Event,
            'c' => Self::Control,
            _ => return None,
        };
        let direction = if code.is_ascii_uppercase() {
            PortDirection::Output
        } else {
            PortDirection::Input
        };
        Some((kind, direction))
    }
}

impl std::fmt::Display for PortKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Audio => write!(f, "audio"),
            Self::Event => write!(f, "event"),
            Self::Control => write!(f, "control"),
        }
    }
}

/// Port direction. Ports are inputs until told otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PortDirection {
    #[default]
    Input,
    Output,
}

impl PortDirection {
    pub fn is_output(self) -> bool {
        self == Self::Output
    }
}

/// Numeric range classification of a control port.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ControlRange {
    #[default]
    None,
    Linear { from: f64, to: f64 },
    Logarithmic { from: f64, to: f64 },
}

impl ControlRange {
    /// Bounds of the range, if one was given.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match *self {
            Self::None => None,
            Self::Linear { from, to } | Self::Logarithmic { from, to } => Some((from, to)),
        }
    }

    pub fn is_logarithmic(&self) -> bool {
        matches!(self, Self::Logarithmic { .. })
    }
}

bitflags! {
    /// Boolean attributes of a control port. Independent and additive.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ControlFlags: u8 {
        const TOGGLE = 1 << 0;
        const TRIGGER = 1 << 1;
        const INTEGER = 1 << 2;
    }
}

/// Plugin names as reported through `set_identity`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginIdentity {
    pub name: String,
    pub label: String,
    pub category: String,
    /// Empty means "derive from name/label elsewhere".
    pub microname: String,
}

impl PluginIdentity {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            category: category.into(),
            microname: String::new(),
        }
    }

    pub fn with_microname(mut self, microname: impl Into<String>) -> Self {
        self.microname = microname.into();
        self
    }
}
