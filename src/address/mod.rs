mod endpoint;
mod uri;

pub use endpoint::EndpointAddress;
pub use endpoint::Protocol;
pub use endpoint::ProtocolParseError;
pub use uri::NormalizedUri;
pub use uri::UriError;
