use crate::api::options::SelectorOptionsValidated;
use crate::resolver::AddressResolver;
use crate::selector::AddressSelector;
use crate::SelectorOptions;
use std::convert::TryFrom;

pub struct AddressSelectorConfig<R: AddressResolver> {
    pub resolver: R,
    pub info_logger: slog::Logger,
    pub options: SelectorOptions,
}

#[derive(Debug, thiserror::Error)]
pub enum SelectorCreationError {
    #[error("Illegal options for configuring selector: {0}")]
    IllegalSelectorOptions(String),
}

pub fn try_create_address_selector<R: AddressResolver>(
    config: AddressSelectorConfig<R>,
) -> Result<AddressSelector<R>, SelectorCreationError> {
    let options =
        SelectorOptionsValidated::try_from(config.options).map_err(SelectorCreationError::IllegalSelectorOptions)?;

    slog::info!(config.info_logger, "Creating address selector for {}", options.protocol);

    Ok(AddressSelector::new(config.info_logger, config.resolver, options.protocol))
}
