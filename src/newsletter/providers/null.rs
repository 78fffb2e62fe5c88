use crate::newsletter::{NewsletterError, NewsletterProvider, SubscribeRequest};
use async_trait::async_trait;
use tracing::info;

pub struct NullProvider;

impl NullProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsletterProvider for NullProvider {
    async fn subscribe(&self, request: SubscribeRequest) -> Result<(), NewsletterError> {
        // Log the subscription that would have been sent
        info!(
            "NULL NEWSLETTER PROVIDER - Would subscribe:\n\
             Email: {}\n\
             Source: {}\n\
             Status: {}\n\
             Groups: {:?}",
            request.email, request.fields.source, request.status, request.groups
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "Null Newsletter Provider (Logging Only)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_provider_subscribe() {
        let provider = NullProvider::new();
        let request = SubscribeRequest::new("client@example.com", "website");

        let result = provider.subscribe(request).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_null_provider_name() {
        let provider = NullProvider::new();
        assert_eq!(provider.name(), "Null Newsletter Provider (Logging Only)");
    }
}
