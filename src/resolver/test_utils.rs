use crate::address::EndpointAddress;
use crate::resolver::resolver::AddressResolver;
use crate::selector::SelectionRequest;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub(crate) enum MockResolverError {
    #[error("Address resolution unavailable: {0}")]
    Unavailable(String),
}

/// Answers every call with the same scripted result and remembers the `force_refresh` flag of
/// each call.
pub(crate) struct MockAddressResolver {
    result: Result<Vec<EndpointAddress>, MockResolverError>,
    delay: Option<Duration>,
    calls: Mutex<Vec<bool>>,
}

impl MockAddressResolver {
    pub(crate) fn returning(addresses: Vec<EndpointAddress>) -> Self {
        MockAddressResolver {
            result: Ok(addresses),
            delay: None,
            calls: Mutex::new(vec![]),
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        MockAddressResolver {
            result: Err(MockResolverError::Unavailable(message.to_string())),
            delay: None,
            calls: Mutex::new(vec![]),
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn force_refresh_calls(&self) -> Vec<bool> {
        self.calls.lock().expect("Mock resolver lock poisoned").clone()
    }
}

#[async_trait::async_trait]
impl AddressResolver for MockAddressResolver {
    type Request = SelectionRequest;
    type Error = MockResolverError;

    async fn resolve(
        &self,
        _: &SelectionRequest,
        force_refresh: bool,
    ) -> Result<Vec<EndpointAddress>, MockResolverError> {
        self.calls
            .lock()
            .expect("Mock resolver lock poisoned")
            .push(force_refresh);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.result.clone()
    }
}
