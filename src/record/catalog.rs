//! Recorded list of plugins.

use super::PluginDescription;
use crate::error::{DescribeError, Result};
use crate::signature::PortSignature;
use crate::sink::{PluginListSink, PluginSink};
use std::collections::HashSet;

/// Plugin list sink that keeps a [`PluginDescription`] per declared plugin.
///
/// Ids are neither ordered nor deduplicated; [`validate`](Self::validate)
/// reports duplicates when asked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginCatalog {
    plugins: Vec<PluginDescription>,
}

impl PluginCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plugins in declaration order.
    pub fn plugins(&self) -> &[PluginDescription] {
        &self.plugins
    }

    /// First plugin declared with `id`.
    pub fn get(&self, id: &str) -> Option<&PluginDescription> {
        self.plugins.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Port signature of every plugin, keyed by plugin id.
    pub fn signatures(&self) -> Vec<(&str, PortSignature)> {
        self.plugins
            .iter()
            .map(|p| (p.id(), p.signature()))
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for plugin in &self.plugins {
            if !seen.insert(plugin.id()) {
                return Err(DescribeError::DuplicatePluginId(plugin.id().to_string()));
            }
            plugin.validate()?;
        }
        Ok(())
    }
}

impl PluginListSink for PluginCatalog {
    fn declare_plugin(&mut self, id: &str) -> &mut dyn PluginSink {
        log::trace!("Declaring plugin {}", id);
        let index = self.plugins.len();
        self.plugins.push(PluginDescription::new(id));
        &mut self.plugins[index]
    }
}
