//! Builder for composing connectors with middleware layers.
//!
//! Layers form an onion around the raw connector. `layers` is stored
//! outermost-first (last added = outermost) and applied in reverse during
//! [`ConnectorBuilder::build`], so `[A, B]` yields `A(B(raw))`.

use std::sync::Arc;

use roic_core::{CacheConfig, Middleware, RoicConnector};

use crate::cache::CacheMiddleware;

const CACHE_LAYER: &str = "CachingMiddleware";

/// Generic middleware builder for composing a connector with layered wrappers.
pub struct ConnectorBuilder {
    raw: Arc<dyn RoicConnector>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
}

impl ConnectorBuilder {
    /// Create a new builder from a raw, unwrapped connector.
    #[must_use]
    pub fn new(raw: Arc<dyn RoicConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace the statement cache.
    ///
    /// The cache is kept innermost so every other layer sees cached results.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        self.layers.retain(|m| m.name() != CACHE_LAYER);
        self.layers.push(Box::new(CacheMiddleware::new(*cfg)));
        self
    }

    /// Remove the cache if present.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.layers.retain(|m| m.name() != CACHE_LAYER);
        self
    }

    /// Add an arbitrary middleware layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Layer names with their configuration, outermost first, followed by the
    /// raw connector.
    #[must_use]
    pub fn describe(&self) -> Vec<(String, serde_json::Value)> {
        let mut out: Vec<(String, serde_json::Value)> = self
            .layers
            .iter()
            .map(|l| (l.name().to_string(), l.config_json()))
            .collect();
        out.push((
            "RawConnector".to_string(),
            serde_json::json!({ "name": self.raw.name() }),
        ));
        out
    }

    /// Build the wrapped connector, applying layers innermost first.
    #[must_use]
    pub fn build(self) -> Arc<dyn RoicConnector> {
        let mut acc: Arc<dyn RoicConnector> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        acc
    }
}
