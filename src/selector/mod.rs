mod errors;
mod filter;
mod primary;
mod selector;

pub use errors::GoneError;
pub use errors::SelectionError;
pub use filter::filter_by_protocol;
pub use primary::select_primary_uri;
pub use primary::ReplicaIndexHint;
pub use primary::SelectionRequest;
pub use selector::AddressSelector;
