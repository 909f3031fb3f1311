use crate::address::EndpointAddress;
use crate::selector::ReplicaIndexHint;

/// AddressResolver discovers the current replica addresses for the partition a request targets.
///
/// Implementations own caching and staleness. `force_refresh` asks them to bypass whatever they
/// have cached. They must be safe to call concurrently.
#[async_trait::async_trait]
pub trait AddressResolver: Send + Sync {
    type Request: ReplicaIndexHint + Send + Sync;
    type Error: std::error::Error + Send + Sync + 'static;

    async fn resolve(&self, request: &Self::Request, force_refresh: bool)
        -> Result<Vec<EndpointAddress>, Self::Error>;
}
