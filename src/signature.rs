//! Port signatures: one character per port, kind by letter, direction by case.
//!
//! A [`PortSignatureGrabber`] stands in for a real [`PluginSink`] and records
//! only the shape of the port list. `"aAec"` is an audio input, an audio
//! output, an event input and a control input, in declaration order.
//!
//! ## Caller contract
//!
//! `output()` flips the *last* declared port. It has to be chained straight
//! onto the `add_*_port` call it belongs to. A grabber describes one plugin
//! at a time; call [`PortSignatureGrabber::reset`] or use a fresh grabber for
//! the next one.

use crate::error::DescribeError;
use crate::sink::{ControlPortSink, Describe, PlainPortSink, PluginSink};
use crate::types::{PortDirection, PortKind};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// One port in a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortSlot {
    pub kind: PortKind,
    pub direction: PortDirection,
}

impl PortSlot {
    pub fn new(kind: PortKind, direction: PortDirection) -> Self {
        Self { kind, direction }
    }

    pub fn code(self) -> char {
        self.kind.code(self.direction)
    }
}

/// Ordered port kinds and directions of a plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PortSignature {
    slots: SmallVec<[PortSlot; 16]>,
}

impl PortSignature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an input port of the given kind.
    pub fn push(&mut self, kind: PortKind) {
        self.slots.push(PortSlot::new(kind, PortDirection::Input));
    }

    /// Turn the last port into an output. Returns false if there is none.
    pub fn mark_last_output(&mut self) -> bool {
        match self.slots.last_mut() {
            Some(slot) => {
                slot.direction = PortDirection::Output;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[PortSlot] {
        &self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = PortSlot> + '_ {
        self.slots.iter().copied()
    }

    /// Number of ports with the given kind and direction.
    pub fn count(&self, kind: PortKind, direction: PortDirection) -> usize {
        self.iter()
            .filter(|slot| slot.kind == kind && slot.direction == direction)
            .count()
    }
}

impl fmt::Display for PortSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.code())?;
        }
        Ok(())
    }
}

impl FromStr for PortSignature {
    type Err = DescribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|code| {
                PortKind::from_code(code)
                    .map(|(kind, direction)| PortSlot::new(kind, direction))
                    .ok_or(DescribeError::UnknownPortCode(code))
            })
            .collect()
    }
}

impl FromIterator<PortSlot> for PortSignature {
    fn from_iter<I: IntoIterator<Item = PortSlot>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

/// Handle to the one buffer a grabber and its port helpers write to.
#[derive(Debug, Clone, Default)]
struct SharedSignature(Rc<RefCell<PortSignature>>);

impl SharedSignature {
    fn push(&self, kind: PortKind) {
        log::trace!("signature port: {}", kind);
        self.0.borrow_mut().push(kind);
    }

    fn mark_last_output(&self) {
        if !self.0.borrow_mut().mark_last_output() {
            log::trace!("output() with no declared port, ignored");
        }
    }
}

#[derive(Debug)]
struct PlainTail {
    target: SharedSignature,
}

impl PlainPortSink for PlainTail {
    fn output(&mut self) -> &mut dyn PlainPortSink {
        self.target.mark_last_output();
        self
    }
}

#[derive(Debug)]
struct ControlTail {
    target: SharedSignature,
}

impl ControlPortSink for ControlTail {
    fn output(&mut self) -> &mut dyn ControlPortSink {
        self.target.mark_last_output();
        self
    }
}

/// Plugin sink that derives a [`PortSignature`] from port declarations.
///
/// Not reentrant: both port helpers write to the tail of the same buffer.
#[derive(Debug)]
pub struct PortSignatureGrabber {
    dest: SharedSignature,
    plain: PlainTail,
    control: ControlTail,
}

impl PortSignatureGrabber {
    pub fn new() -> Self {
        Self::with_signature(PortSignature::new())
    }

    /// Grabber with room for `ports` ports before the buffer reallocates.
    pub fn with_capacity(ports: usize) -> Self {
        let mut signature = PortSignature::new();
        signature.slots.reserve(ports);
        Self::with_signature(signature)
    }

    fn with_signature(signature: PortSignature) -> Self {
        let dest = SharedSignature(Rc::new(RefCell::new(signature)));
        Self {
            plain: PlainTail {
                target: dest.clone(),
            },
            control: ControlTail {
                target: dest.clone(),
            },
            dest,
        }
    }

    /// Signature collected so far.
    pub fn signature(&self) -> PortSignature {
        self.dest.0.borrow().clone()
    }

    pub fn into_signature(self) -> PortSignature {
        self.dest.0.take()
    }

    /// Clear the buffer so the grabber can describe another plugin.
    pub fn reset(&mut self) {
        self.dest.0.borrow_mut().clear();
    }
}

impl Default for PortSignatureGrabber {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginSink for PortSignatureGrabber {
    fn add_audio_port(
        &mut self,
        _id: &str,
        _name: &str,
        _microname: &str,
    ) -> &mut dyn PlainPortSink {
        self.dest.push(PortKind::Audio);
        &mut self.plain
    }

    fn add_event_port(
        &mut self,
        _id: &str,
        _name: &str,
        _microname: &str,
    ) -> &mut dyn PlainPortSink {
        self.dest.push(PortKind::Event);
        &mut self.plain
    }

    fn add_control_port(
        &mut self,
        _id: &str,
        _name: &str,
        _default_value: f64,
        _microname: &str,
    ) -> &mut dyn ControlPortSink {
        self.dest.push(PortKind::Control);
        &mut self.control
    }
}

/// Drive `plugin` through a fresh grabber and return its signature.
pub fn port_signature(plugin: &dyn Describe) -> PortSignature {
    let mut grabber = PortSignatureGrabber::new();
    plugin.describe(&mut grabber);
    grabber.finalize();
    grabber.into_signature()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_share_one_buffer() {
        let grabber = PortSignatureGrabber::new();
        assert!(Rc::ptr_eq(&grabber.dest.0, &grabber.plain.target.0));
        assert!(Rc::ptr_eq(&grabber.dest.0, &grabber.control.target.0));
    }

    #[test]
    fn test_output_flips_only_the_tail() {
        let mut grabber = PortSignatureGrabber::new();
        grabber.audio_port("in", "In");
        grabber.audio_port("out", "Out");
        grabber.plain.output();
        assert_eq!(grabber.signature().to_string(), "aA");

        grabber.control.output();
        assert_eq!(grabber.signature().to_string(), "aA");
    }

    #[test]
    fn test_output_on_empty_buffer_is_ignored() {
        let mut grabber = PortSignatureGrabber::new();
        grabber.plain.output();
        grabber.control.output();
        assert!(grabber.signature().is_empty());
    }

    #[test]
    fn test_with_capacity_starts_empty() {
        let grabber = PortSignatureGrabber::with_capacity(64);
        assert!(grabber.signature().is_empty());
        assert!(grabber.dest.0.borrow().slots.capacity() >= 64);
    }
}
