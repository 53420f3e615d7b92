//! Provider seam and signal classification.

pub(crate) mod network_manager;
pub(crate) mod provider;
pub(crate) mod signal;
