use crate::address::NormalizedUri;

/// GoneError means no eligible endpoint could be selected from the resolved addresses; the
/// client's view of the partition is stale or empty.
///
/// Callers typically force a refresh of the resolver and try again, or fail the request.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error(
    "The requested resource is no longer available at the server. Returned addresses are {{{}}}",
    join_uris(.addresses)
)]
pub struct GoneError {
    addresses: Vec<NormalizedUri>,
}

impl GoneError {
    pub(crate) fn new(addresses: Vec<NormalizedUri>) -> Self {
        GoneError { addresses }
    }

    /// Every candidate that was considered, in the order they were encountered.
    pub fn addresses(&self) -> &[NormalizedUri] {
        &self.addresses
    }
}

fn join_uris(uris: &[NormalizedUri]) -> String {
    uris.iter().map(NormalizedUri::as_str).collect::<Vec<_>>().join(",")
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Gone(#[from] GoneError),

    // Passed through from the resolver untouched.
    #[error(transparent)]
    Resolver(E),
}

impl<E> SelectionError<E>
where
    E: std::error::Error + 'static,
{
    pub fn is_gone(&self) -> bool {
        matches!(self, SelectionError::Gone(_))
    }
}
