//! roic-middleware
//!
//! Connector wrappers composed with [`ConnectorBuilder`]. The only layer
//! shipped today is a TTL and size-bounded cache of raw statement fetches.

mod builder;
mod cache;

pub use crate::builder::ConnectorBuilder;
pub use crate::cache::{CacheMiddleware, CachingConnector};
