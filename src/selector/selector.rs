use crate::address::{EndpointAddress, NormalizedUri, Protocol};
use crate::resolver::AddressResolver;
use crate::selector::errors::SelectionError;
use crate::selector::filter::filter_by_protocol;
use crate::selector::primary::{select_primary_uri, ReplicaIndexHint};

/// AddressSelector decides which replica endpoint(s) a request goes to, considering only the
/// endpoints reachable over its configured protocol.
///
/// It keeps no state between calls. Every operation resolves a fresh address snapshot through the
/// resolver and transforms it synchronously; the resolver's future is the only suspension point.
/// Resolver failures, cancellation included, reach the caller untouched.
pub struct AddressSelector<R: AddressResolver> {
    logger: slog::Logger,
    resolver: R,
    protocol: Protocol,
}

impl<R: AddressResolver> AddressSelector<R> {
    pub fn new(logger: slog::Logger, resolver: R, protocol: Protocol) -> Self {
        AddressSelector {
            logger: logger.new(slog::o!("Protocol" => protocol.to_string())),
            resolver,
            protocol,
        }
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Resolves the one endpoint a primary-only request should be sent to.
    pub async fn resolve_primary_uri(
        &self,
        request: &R::Request,
        force_refresh: bool,
    ) -> Result<NormalizedUri, SelectionError<R::Error>> {
        let addresses = self
            .resolver
            .resolve(request, force_refresh)
            .await
            .map_err(SelectionError::Resolver)?;
        let candidates = filter_by_protocol(&addresses, self.protocol);

        if request.default_replica_index().is_none() {
            self.warn_on_multiple_primaries(&candidates);
        }

        match select_primary_uri(request, &candidates) {
            Ok(uri) => {
                slog::debug!(
                    self.logger,
                    "Selected {} out of {} candidates ({} resolved)",
                    uri,
                    candidates.len(),
                    addresses.len()
                );
                Ok(uri)
            }
            Err(gone) => {
                slog::warn!(self.logger, "No eligible primary endpoint. {}", gone);
                Err(gone.into())
            }
        }
    }

    /// Resolves every endpoint of the partition, for fan-out reads. When `sort_ascending` is unset
    /// the resolver's order is kept. An empty result is not an error here.
    pub async fn resolve_all_uris(
        &self,
        request: &R::Request,
        sort_ascending: bool,
        force_refresh: bool,
    ) -> Result<Vec<NormalizedUri>, R::Error> {
        let addresses = self.resolver.resolve(request, force_refresh).await?;

        let mut uris: Vec<NormalizedUri> = filter_by_protocol(&addresses, self.protocol)
            .into_iter()
            .map(|address| address.physical_uri().clone())
            .collect();
        if sort_ascending {
            uris.sort();
        }

        slog::debug!(self.logger, "Resolved {} of {} endpoints", uris.len(), addresses.len());
        Ok(uris)
    }

    /// Resolves every non-primary endpoint, in resolver order. An empty result is not an error
    /// here.
    pub async fn resolve_secondary_uris(
        &self,
        request: &R::Request,
        force_refresh: bool,
    ) -> Result<Vec<NormalizedUri>, R::Error> {
        let addresses = self.resolver.resolve(request, force_refresh).await?;

        let uris: Vec<NormalizedUri> = filter_by_protocol(&addresses, self.protocol)
            .into_iter()
            .filter(|address| !address.is_primary())
            .map(|address| address.physical_uri().clone())
            .collect();

        slog::debug!(self.logger, "Resolved {} secondary endpoints", uris.len());
        Ok(uris)
    }

    /// Resolves the full address records, flags included, in resolver order.
    pub async fn resolve_addresses(
        &self,
        request: &R::Request,
        force_refresh: bool,
    ) -> Result<Vec<EndpointAddress>, R::Error> {
        let addresses = self.resolver.resolve(request, force_refresh).await?;

        Ok(filter_by_protocol(&addresses, self.protocol)
            .into_iter()
            .cloned()
            .collect())
    }

    fn warn_on_multiple_primaries(&self, candidates: &[&EndpointAddress]) {
        let primaries: Vec<&str> = candidates
            .iter()
            .filter(|address| address.is_primary())
            .map(|address| address.physical_uri().as_str())
            .collect();

        if primaries.len() > 1 {
            slog::warn!(
                self.logger,
                "{} endpoints are marked primary, using the first: {:?}",
                primaries.len(),
                primaries
            );
        }
    }
}
