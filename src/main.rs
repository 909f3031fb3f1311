use replica_address::{
    try_create_address_selector, AddressSelectorConfig, EndpointAddress, Protocol, SelectionRequest,
    SelectorOptions, StaticAddressResolver,
};
use slog::Drain;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let logger = create_root_logger_for_stdout();

    for protocol in &["https", "rntbd"] {
        let selector = try_create_address_selector(AddressSelectorConfig {
            resolver: StaticAddressResolver::new(fake_partition_addresses()?),
            info_logger: logger.clone(),
            options: SelectorOptions {
                protocol: Some(protocol.to_string()),
            },
        })?;
        let request = SelectionRequest::new();

        let primary = selector.resolve_primary_uri(&request, false).await?;
        let all = selector.resolve_all_uris(&request, true, false).await?;
        let secondaries = selector.resolve_secondary_uris(&request, false).await?;

        println!("[{}] primary: {}", selector.protocol(), primary);
        println!("[{}] all: {:?}", selector.protocol(), all);
        println!("[{}] secondaries: {:?}", selector.protocol(), secondaries);
    }

    Ok(())
}

fn fake_partition_addresses() -> Result<Vec<EndpointAddress>, Box<dyn Error>> {
    Ok(vec![
        EndpointAddress::try_new(
            "rntbd://replica-1:14330/apps/demo/partitions/1/replicas/11",
            false,
            true,
            Protocol::Tcp,
        )?,
        EndpointAddress::try_new(
            "rntbd://replica-2:14330/apps/demo/partitions/1/replicas/12",
            true,
            true,
            Protocol::Tcp,
        )?,
        EndpointAddress::try_new(
            "https://replica-3:10250/apps/demo/partitions/1/replicas/13",
            false,
            true,
            Protocol::Https,
        )?,
        EndpointAddress::try_new(
            "https://replica-1:10250/apps/demo/partitions/1/replicas/11",
            false,
            true,
            Protocol::Https,
        )?,
        EndpointAddress::try_new(
            "https://replica-2:10250/apps/demo/partitions/1/replicas/12",
            true,
            true,
            Protocol::Https,
        )?,
    ])
}

fn create_root_logger_for_stdout() -> slog::Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).use_file_location().build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    slog::Logger::root(drain, slog::o!("App" => "replica-address-demo"))
}
