//! This mod holds the code for configuring and creating an `AddressSelector` from options.
mod options;
mod wiring;

pub use options::SelectorOptions;
pub use wiring::try_create_address_selector;
pub use wiring::AddressSelectorConfig;
pub use wiring::SelectorCreationError;
