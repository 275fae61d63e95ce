//! In-memory recording of plugin descriptions.
//!
//! [`PluginDescription`] is a plugin sink that keeps everything it is told,
//! and [`PluginCatalog`] collects one per declared plugin. Renderers can read
//! a recorded description instead of implementing the sinks themselves.

mod catalog;
mod port;

pub use catalog::PluginCatalog;
pub use port::PortDescription;

use crate::error::{DescribeError, Result};
use crate::signature::{PortSignature, PortSlot};
use crate::sink::{ControlPortSink, PlainPortSink, PluginSink};
use crate::types::{PluginIdentity, PortKind, SMALL_GUI_ANNOTATION};
use std::collections::HashSet;

/// A recorded plugin description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginDescription {
    id: String,
    identity: Option<PluginIdentity>,
    ports: Vec<PortDescription>,
    annotations: Vec<String>,
    finalized: bool,
}

impl PluginDescription {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn identity(&self) -> Option<&PluginIdentity> {
        self.identity.as_ref()
    }

    /// Ports in declaration order.
    pub fn ports(&self) -> &[PortDescription] {
        &self.ports
    }

    pub fn port(&self, id: &str) -> Option<&PortDescription> {
        self.ports.iter().find(|p| p.id == id)
    }

    /// Plugin-level annotations in the order they were attached.
    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    pub fn has_gui(&self) -> bool {
        self.annotations.iter().any(|a| a == SMALL_GUI_ANNOTATION)
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Same signature a [`PortSignatureGrabber`](crate::PortSignatureGrabber)
    /// would produce for this plugin.
    pub fn signature(&self) -> PortSignature {
        self.ports
            .iter()
            .map(|p| PortSlot::new(p.kind, p.direction))
            .collect()
    }

    /// Check the description for completeness and sane ranges.
    ///
    /// Not part of the sink contract; only runs when asked.
    pub fn validate(&self) -> Result<()> {
        if self.identity.is_none() {
            return Err(DescribeError::MissingIdentity {
                plugin: self.id.clone(),
            });
        }
        let mut seen = HashSet::new();
        for port in &self.ports {
            if !seen.insert(port.id.as_str()) {
                return Err(DescribeError::DuplicatePortId {
                    plugin: self.id.clone(),
                    port: port.id.clone(),
                });
            }
            port.validate()?;
        }
        Ok(())
    }

    fn push_port(&mut self, port: PortDescription) -> &mut PortDescription {
        if self.finalized {
            log::warn!("Plugin {}: port {} declared after finalize", self.id, port.id);
        }
        log::trace!("Plugin {}: {} port {}", self.id, port.kind, port.id);
        let index = self.ports.len();
        self.ports.push(port);
        &mut self.ports[index]
    }
}

impl PluginSink for PluginDescription {
    fn set_identity(&mut self, identity: &PluginIdentity) {
        if self.identity.is_some() {
            log::warn!("Plugin {}: identity set twice, keeping the last one", self.id);
        }
        self.identity = Some(identity.clone());
    }

    fn add_audio_port(
        &mut self,
        id: &str,
        name: &str,
        microname: &str,
    ) -> &mut dyn PlainPortSink {
        self.push_port(PortDescription::new(PortKind::Audio, id, name, microname))
    }

    fn add_event_port(
        &mut self,
        id: &str,
        name: &str,
        microname: &str,
    ) -> &mut dyn PlainPortSink {
        self.push_port(PortDescription::new(PortKind::Event, id, name, microname))
    }

    fn add_control_port(
        &mut self,
        id: &str,
        name: &str,
        default_value: f64,
        microname: &str,
    ) -> &mut dyn ControlPortSink {
        self.push_port(PortDescription::control(id, name, default_value, microname))
    }

    fn annotate(&mut self, text: &str) {
        if self.finalized {
            log::warn!("Plugin {}: annotation added after finalize", self.id);
        }
        self.annotations.push(text.to_string());
    }

    fn finalize(&mut self) {
        self.finalized = true;
        log::debug!(
            "Plugin {} finalized: {} ports, signature \"{}\"",
            self.id,
            self.ports.len(),
            self.signature()
        );
        if let Err(e) = self.validate() {
            log::warn!("Plugin {}: {}", self.id, e);
        }
    }
}
