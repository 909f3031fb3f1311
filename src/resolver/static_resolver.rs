use crate::address::EndpointAddress;
use crate::resolver::resolver::AddressResolver;
use crate::selector::SelectionRequest;
use std::convert::Infallible;

/// StaticAddressResolver always answers with the same fixed set of addresses. Refreshing is a
/// no-op. Handy for static deployments and for exercising a selector without a live service.
#[derive(Clone, Debug)]
pub struct StaticAddressResolver {
    addresses: Vec<EndpointAddress>,
}

impl StaticAddressResolver {
    pub fn new(addresses: Vec<EndpointAddress>) -> Self {
        StaticAddressResolver { addresses }
    }

    pub fn addresses(&self) -> &[EndpointAddress] {
        &self.addresses
    }
}

#[async_trait::async_trait]
impl AddressResolver for StaticAddressResolver {
    type Request = SelectionRequest;
    type Error = Infallible;

    async fn resolve(&self, _: &SelectionRequest, _: bool) -> Result<Vec<EndpointAddress>, Infallible> {
        Ok(self.addresses.clone())
    }
}
