/// Generate a public statement-fetch method on `Roic` that walks the
/// registered connectors through `fetch_single`.
macro_rules! roic_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident,
        accessor: $accessor:ident,
        capability: $capability:expr,
        not_found: $not_found:expr,
        call: $call_name:ident
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(target = "roic::router", skip(self))
        )]
        ///
        /// # Errors
        /// Returns an error if no registered provider succeeds or none supports the capability.
        pub async fn $name(
            &self,
            symbol: &str,
        ) -> Result<roic_core::FinancialStatement, roic_core::RoicError> {
            self.fetch_single(symbol, $capability, $not_found, move |c, s| {
                if c.$accessor().is_none() {
                    return None;
                }
                Some(async move {
                    if let Some(p) = c.$accessor() {
                        p.$call_name(&s).await
                    } else {
                        Err(roic_core::RoicError::connector(
                            c.name(),
                            concat!("missing ", $capability, " capability during call"),
                        ))
                    }
                })
            })
            .await
        }
    };
}

pub(crate) use roic_router_method;
