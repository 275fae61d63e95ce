//! Plugin-level sinks and the [`Describe`] seam for plugins.

use super::port::{ControlPortSink, PlainPortSink};
use crate::types::{PluginIdentity, DEFAULT_PORT_MICRONAME, SMALL_GUI_ANNOTATION};

/// A sink to send information about a plugin.
///
/// Port sinks handed out by the `add_*_port` methods stay owned by the
/// plugin sink; they are only meant to be used for the chained calls made
/// right after the declaration.
pub trait PluginSink {
    /// Set plugin names. Called at most once.
    fn set_identity(&mut self, _identity: &PluginIdentity) {}

    /// Add an audio port and return a sink for further description.
    fn add_audio_port(&mut self, id: &str, name: &str, microname: &str) -> &mut dyn PlainPortSink;

    /// Add an event port and return a sink for further description.
    fn add_event_port(&mut self, id: &str, name: &str, microname: &str) -> &mut dyn PlainPortSink;

    /// Add a control port with its default value.
    fn add_control_port(
        &mut self,
        id: &str,
        name: &str,
        default_value: f64,
        microname: &str,
    ) -> &mut dyn ControlPortSink;

    /// [`add_audio_port`](Self::add_audio_port) with the default microname.
    fn audio_port(&mut self, id: &str, name: &str) -> &mut dyn PlainPortSink {
        self.add_audio_port(id, name, DEFAULT_PORT_MICRONAME)
    }

    /// [`add_event_port`](Self::add_event_port) with the default microname.
    fn event_port(&mut self, id: &str, name: &str) -> &mut dyn PlainPortSink {
        self.add_event_port(id, name, DEFAULT_PORT_MICRONAME)
    }

    /// [`add_control_port`](Self::add_control_port) with the default microname.
    fn control_port(
        &mut self,
        id: &str,
        name: &str,
        default_value: f64,
    ) -> &mut dyn ControlPortSink {
        self.add_control_port(id, name, default_value, DEFAULT_PORT_MICRONAME)
    }

    /// Append free-form text at the plugin level.
    fn annotate(&mut self, _text: &str) {}

    /// Advertise the small companion GUI.
    fn mark_has_gui(&mut self) {
        self.annotate(SMALL_GUI_ANNOTATION);
    }

    /// Called after the plugin has reported all the information.
    fn finalize(&mut self) {}
}

/// A sink to send information about a list of plugins.
pub trait PluginListSink {
    /// Add an empty plugin and return the sink to be filled with information.
    fn declare_plugin(&mut self, id: &str) -> &mut dyn PluginSink;
}

/// Implemented by plugins that can report their own shape.
///
/// `describe` must declare ports in the order they should appear in any
/// signature or rendering, and should end with `finalize()`.
pub trait Describe {
    fn id(&self) -> &str;

    fn describe(&self, sink: &mut dyn PluginSink);
}

/// Declare and describe each plugin in turn.
pub fn describe_all<'a, I>(plugins: I, list: &mut dyn PluginListSink)
where
    I: IntoIterator<Item = &'a dyn Describe>,
{
    for plugin in plugins {
        let sink = list.declare_plugin(plugin.id());
        plugin.describe(sink);
    }
}
