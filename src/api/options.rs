use crate::address::Protocol;
use std::convert::TryFrom;

#[derive(Clone, Default)]
pub struct SelectorOptions {
    /// Symbolic protocol name (`https`, `tcp` or `rntbd`, any case). Defaults to HTTPS.
    pub protocol: Option<String>,
}

pub(super) struct SelectorOptionsValidated {
    pub protocol: Protocol,
}

impl TryFrom<SelectorOptions> for SelectorOptionsValidated {
    type Error = String;

    fn try_from(options: SelectorOptions) -> Result<Self, Self::Error> {
        let protocol = match options.protocol {
            Some(name) => name.parse::<Protocol>().map_err(|e| e.to_string())?,
            None => Protocol::Https,
        };

        Ok(SelectorOptionsValidated { protocol })
    }
}
