//! Error types for plugin description helpers.
//!
//! The sink protocol itself never fails. These errors only come out of the
//! opt-in helpers: signature parsing and validation of recorded descriptions.

use thiserror::Error;

/// Result type alias for description helpers.
pub type Result<T> = std::result::Result<T, DescribeError>;

/// Errors reported by signature parsing and description validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescribeError {
    /// A signature contains a character that encodes no port
    #[error("Unknown port code '{0}' in signature")]
    UnknownPortCode(char),

    /// A plugin was described without names
    #[error("Plugin {plugin} has no identity")]
    MissingIdentity { plugin: String },

    /// Two ports of one plugin share an id
    #[error("Plugin {plugin} declares port {port} more than once")]
    DuplicatePortId { plugin: String, port: String },

    /// Range bounds are not finite or not ascending
    #[error("Port {port} has invalid range [{from}, {to}]")]
    InvalidRange { port: String, from: f64, to: f64 },

    /// Logarithmic range must stay strictly above zero
    #[error("Port {port} has logarithmic range [{from}, {to}] touching zero")]
    NonPositiveLogRange { port: String, from: f64, to: f64 },

    /// Two plugins of one catalog share an id
    #[error("Plugin {0} is declared more than once")]
    DuplicatePluginId(String),
}
