//! Config module.
//! Provides the explicit pool configuration, XML loading, and validation.

pub mod types;
mod validate;
pub mod xml;

pub use types::{LogLevel, PoolConfig};
pub use xml::{load_config_from_xml, parse_config_xml};
