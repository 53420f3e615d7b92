//! Public API: value types, the reader and the method channel.

pub mod channel;
pub mod models;
pub mod reader;
pub mod transport;
