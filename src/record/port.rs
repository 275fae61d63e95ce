//! Recorded per-port detail.

use crate::error::{DescribeError, Result};
use crate::sink::{ControlPortSink, PlainPortSink};
use crate::types::{ControlFlags, ControlRange, PortDirection, PortKind};
use smallvec::SmallVec;

/// Everything a plugin said about one port.
///
/// `input()` is left at its default no-op, so once a port is marked as an
/// output it stays one, the same as in a signature grabber.
#[derive(Debug, Clone, PartialEq)]
pub struct PortDescription {
    pub id: String,
    pub name: String,
    pub microname: String,
    pub kind: PortKind,
    pub direction: PortDirection,
    /// Only control ports carry a default value.
    pub default_value: Option<f64>,
    pub range: ControlRange,
    pub flags: ControlFlags,
    pub annotations: SmallVec<[String; 2]>,
}

impl PortDescription {
    pub fn new(
        kind: PortKind,
        id: impl Into<String>,
        name: impl Into<String>,
        microname: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            microname: microname.into(),
            kind,
            direction: PortDirection::Input,
            default_value: None,
            range: ControlRange::None,
            flags: ControlFlags::empty(),
            annotations: SmallVec::new(),
        }
    }

    pub fn control(
        id: impl Into<String>,
        name: impl Into<String>,
        default_value: f64,
        microname: impl Into<String>,
    ) -> Self {
        let mut port = Self::new(PortKind::Control, id, name, microname);
        port.default_value = Some(default_value);
        port
    }

    pub fn is_output(&self) -> bool {
        self.direction.is_output()
    }

    /// Check range bounds. Ports without a range always pass.
    pub fn validate(&self) -> Result<()> {
        let Some((from, to)) = self.range.bounds() else {
            return Ok(());
        };
        if !from.is_finite() || !to.is_finite() || from >= to {
            return Err(DescribeError::InvalidRange {
                port: self.id.clone(),
                from,
                to,
            });
        }
        if self.range.is_logarithmic() && from <= 0.0 {
            return Err(DescribeError::NonPositiveLogRange {
                port: self.id.clone(),
                from,
                to,
            });
        }
        Ok(())
    }
}

impl PlainPortSink for PortDescription {
    fn output(&mut self) -> &mut dyn PlainPortSink {
        self.direction = PortDirection::Output;
        self
    }

    fn annotate(&mut self, text: &str) -> &mut dyn PlainPortSink {
        self.annotations.push(text.to_string());
        self
    }
}

impl ControlPortSink for PortDescription {
    fn output(&mut self) -> &mut dyn ControlPortSink {
        self.direction = PortDirection::Output;
        self
    }

    fn linear_range(&mut self, from: f64, to: f64) -> &mut dyn ControlPortSink {
        self.range = ControlRange::Linear { from, to };
        self
    }

    fn logarithmic_range(&mut self, from: f64, to: f64) -> &mut dyn ControlPortSink {
        self.range = ControlRange::Logarithmic { from, to };
        self
    }

    fn toggle(&mut self) -> &mut dyn ControlPortSink {
        self.flags |= ControlFlags::TOGGLE;
        self
    }

    fn trigger(&mut self) -> &mut dyn ControlPortSink {
        self.flags |= ControlFlags::TRIGGER;
        self
    }

    fn integer(&mut self) -> &mut dyn ControlPortSink {
        self.flags |= ControlFlags::INTEGER;
        self
    }

    fn annotate(&mut self, text: &str) -> &mut dyn ControlPortSink {
        self.annotations.push(text.to_string());
        self
    }
}
