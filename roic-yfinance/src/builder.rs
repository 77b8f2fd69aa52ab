use std::sync::Arc;

use roic_core::connector::RoicConnector;
use roic_core::{CacheConfig, RoicError};
use roic_middleware::ConnectorBuilder as GenericConnectorBuilder;

use crate::YfConnector;

/// Builder type alias specialized for yfinance connectors.
pub type YfConnectorBuilder = GenericConnectorBuilder;

impl YfConnector {
    /// Returns an unconfigured builder with the default connector.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<YfConnectorBuilder, RoicError> {
        let raw: Arc<dyn RoicConnector> = Arc::new(Self::try_new_default()?);
        Ok(GenericConnectorBuilder::new(raw))
    }

    /// Returns a builder that caches raw statements with the default TTL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn cached() -> Result<YfConnectorBuilder, RoicError> {
        Ok(Self::new()?.with_cache(&CacheConfig::default()))
    }
}
