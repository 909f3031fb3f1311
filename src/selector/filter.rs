use crate::address::{EndpointAddress, Protocol};

/// Returns the addresses reachable over `protocol`, in the order the resolver returned them.
///
/// Only the protocol is inspected; primary/public flags play no part in filtering.
pub fn filter_by_protocol(addresses: &[EndpointAddress], protocol: Protocol) -> Vec<&EndpointAddress> {
    addresses.iter().filter(|address| address.protocol() == protocol).collect()
}
