use crate::address::uri::{NormalizedUri, UriError};
use std::fmt;
use std::str::FromStr;

/// Protocol is the wire transport a replica endpoint is reachable over.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Protocol {
    /// HTTPS based protocol.
    Https,
    /// Proprietary binary protocol over TCP.
    Tcp,
}

impl Protocol {
    /// The URI scheme endpoints of this protocol are published under.
    pub fn scheme(&self) -> &'static str {
        match self {
            Protocol::Https => "https",
            Protocol::Tcp => "rntbd",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Protocol::Https => "HTTPS",
            Protocol::Tcp => "TCP",
        };
        f.write_str(name)
    }
}

// Accepts either the symbolic name or the scheme, in any case.
impl FromStr for Protocol {
    type Err = ProtocolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("https") {
            Ok(Protocol::Https)
        } else if s.eq_ignore_ascii_case("tcp") || s.eq_ignore_ascii_case("rntbd") {
            Ok(Protocol::Tcp)
        } else {
            Err(ProtocolParseError(s.to_string()))
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown protocol '{0}'")]
pub struct ProtocolParseError(String);

/// EndpointAddress is one candidate physical endpoint for a replica of a partition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EndpointAddress {
    physical_uri: NormalizedUri,
    is_primary: bool,
    is_public: bool,
    protocol: Protocol,
}

impl EndpointAddress {
    pub fn new(physical_uri: NormalizedUri, is_primary: bool, is_public: bool, protocol: Protocol) -> Self {
        EndpointAddress {
            physical_uri,
            is_primary,
            is_public,
            protocol,
        }
    }

    /// Convenience for resolvers holding raw URI text.
    pub fn try_new(
        physical_uri: &str,
        is_primary: bool,
        is_public: bool,
        protocol: Protocol,
    ) -> Result<Self, UriError> {
        Ok(Self::new(
            NormalizedUri::parse(physical_uri)?,
            is_primary,
            is_public,
            protocol,
        ))
    }

    pub fn physical_uri(&self) -> &NormalizedUri {
        &self.physical_uri
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }
}
