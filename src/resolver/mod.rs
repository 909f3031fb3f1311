mod resolver;
mod static_resolver;
#[cfg(test)]
pub(crate) mod test_utils;

pub use resolver::AddressResolver;
pub use static_resolver::StaticAddressResolver;
