mod address;
mod api;
mod resolver;
mod selector;

pub use address::EndpointAddress;
pub use address::NormalizedUri;
pub use address::Protocol;
pub use address::ProtocolParseError;
pub use address::UriError;
pub use api::try_create_address_selector;
pub use api::AddressSelectorConfig;
pub use api::SelectorCreationError;
pub use api::SelectorOptions;
pub use resolver::AddressResolver;
pub use resolver::StaticAddressResolver;
pub use selector::filter_by_protocol;
pub use selector::select_primary_uri;
pub use selector::AddressSelector;
pub use selector::GoneError;
pub use selector::ReplicaIndexHint;
pub use selector::SelectionError;
pub use selector::SelectionRequest;
