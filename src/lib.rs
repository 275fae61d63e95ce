//! Self-describing port metadata for audio plugin collections.
//! Plugins report names, ports and per-port attributes through a chain of
//! sinks, so packaging tools can build descriptors without running them.
//!
//! ## Example
//!
//! ```ignore
//! use plugin_describe::{Describe, PluginIdentity, PluginSink, port_signature};
//!
//! struct Gain;
//!
//! impl Describe for Gain {
//!     fn id(&self) -> &str { "gain" }
//!
//!     fn describe(&self, sink: &mut dyn PluginSink) {
//!         sink.set_identity(&PluginIdentity::new("Gain", "gain", "AmplifierPlugin"));
//!         sink.audio_port("in", "In").input();
//!         sink.audio_port("out", "Out").output();
//!         sink.control_port("level", "Level", 1.0).input().linear_range(0.0, 2.0);
//!         sink.finalize();
//!     }
//! }
//!
//! assert_eq!(port_signature(&Gain).to_string(), "aAc");
//! ```
//!
//! ## Custom Renderers
//!
//! Implement [`PluginSink`] and the port sinks, overriding only the
//! attributes you render. Or drive a [`PluginDescription`] and read the
//! recorded result.

pub mod error;
pub mod record;
pub mod signature;
pub mod sink;
pub mod types;

pub use error::{DescribeError, Result};
pub use record::{PluginCatalog, PluginDescription, PortDescription};
pub use signature::{port_signature, PortSignature, PortSignatureGrabber, PortSlot};
pub use sink::{
    describe_all, AsControlPortSink, AsPlainPortSink, ControlPortSink, Describe, NullPort,
    PlainPortSink, PluginListSink, PluginSink,
};
pub use types::{
    ControlFlags, ControlRange, PluginIdentity, PortDirection, PortKind, DEFAULT_PORT_MICRONAME,
    SMALL_GUI_ANNOTATION,
};
