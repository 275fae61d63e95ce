//! The description protocol.
//!
//! A plugin drives a [`PluginSink`]: names first, then one `add_*_port` call
//! per port with direction and attributes chained on the returned port sink,
//! then `finalize()`. Renderers implement the sinks; anything they don't
//! override is a no-op.

mod plugin;
mod port;

pub use plugin::{describe_all, Describe, PluginListSink, PluginSink};
pub use port::{AsControlPortSink, AsPlainPortSink, ControlPortSink, NullPort, PlainPortSink};
