use crate::address::{EndpointAddress, NormalizedUri};
use crate::selector::errors::GoneError;
use std::borrow::Borrow;

/// The only thing primary selection needs to know about a request: whether the caller pinned it
/// to a specific replica.
pub trait ReplicaIndexHint {
    fn default_replica_index(&self) -> Option<usize>;
}

impl<T: ReplicaIndexHint + ?Sized> ReplicaIndexHint for &T {
    fn default_replica_index(&self) -> Option<usize> {
        (**self).default_replica_index()
    }
}

/// A bare request carrying just the replica index override.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SelectionRequest {
    pub default_replica_index: Option<usize>,
}

impl SelectionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replica_index(index: usize) -> Self {
        SelectionRequest {
            default_replica_index: Some(index),
        }
    }
}

impl ReplicaIndexHint for SelectionRequest {
    fn default_replica_index(&self) -> Option<usize> {
        self.default_replica_index
    }
}

/// Picks the endpoint a primary-only request should go to.
///
/// A replica index override on the request wins over the primary flag. If the override is out
/// of range there is no fallback to primary scanning. Without an override, the first
/// primary-flagged address wins, even if the resolver marked several.
///
/// This does no protocol filtering of its own; pass the addresses for one protocol.
pub fn select_primary_uri<Q, A>(request: &Q, addresses: &[A]) -> Result<NormalizedUri, GoneError>
where
    Q: ReplicaIndexHint + ?Sized,
    A: Borrow<EndpointAddress>,
{
    let selected: Option<&EndpointAddress> = match request.default_replica_index() {
        Some(index) => addresses.get(index).map(<A as Borrow<EndpointAddress>>::borrow),
        None => addresses
            .iter()
            .map(<A as Borrow<EndpointAddress>>::borrow)
            .find(|address| address.is_primary()),
    };

    match selected {
        Some(address) => Ok(address.physical_uri().clone()),
        None => Err(GoneError::new(
            addresses
                .iter()
                .map(|a| <A as Borrow<EndpointAddress>>::borrow(a).physical_uri().clone())
                .collect(),
        )),
    }
}
