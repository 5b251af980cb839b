//! Application-level configuration.
//!
//! - [`RouterConfig`]: thresholds, window sizes and keyword set of the routing policy

pub mod router_config;

pub use router_config::{RetrievalFailurePolicy, RouterConfig};
