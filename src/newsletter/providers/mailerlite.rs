use crate::newsletter::{
    MailerLiteConfig, NewsletterError, NewsletterProvider, SubscribeRequest, is_valid_email,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use url::Url;

/// Delivers a prepared subscribe request to the MailerLite endpoint. Split
/// out as a trait so the provider's request construction can be tested
/// without network access.
#[async_trait]
pub trait SubscribeTransport: Send + Sync {
    async fn post_json(
        &self,
        endpoint: &Url,
        api_key: &str,
        body: String,
    ) -> Result<(), NewsletterError>;
}

/// Default transport: logs the outbound request instead of sending it.
/// This service has no outbound HTTP stack, so actual delivery is handled
/// by whatever deployment wires in a real transport.
pub struct LoggingTransport;

#[async_trait]
impl SubscribeTransport for LoggingTransport {
    async fn post_json(
        &self,
        endpoint: &Url,
        _api_key: &str,
        body: String,
    ) -> Result<(), NewsletterError> {
        info!("MailerLite subscribe request to {}: {}", endpoint, body);
        Ok(())
    }
}

pub struct MailerLiteProvider {
    config: MailerLiteConfig,
    endpoint: Url,
    transport: Arc<dyn SubscribeTransport>,
}

impl MailerLiteProvider {
    pub fn new(config: MailerLiteConfig) -> Result<Self, NewsletterError> {
        Self::with_transport(config, Arc::new(LoggingTransport))
    }

    pub fn with_transport(
        config: MailerLiteConfig,
        transport: Arc<dyn SubscribeTransport>,
    ) -> Result<Self, NewsletterError> {
        if config.api_key.is_empty() {
            return Err(NewsletterError::ConfigError(
                "MailerLite API key is empty".to_string(),
            ));
        }
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            NewsletterError::ConfigError(format!(
                "invalid MailerLite endpoint {}: {}",
                config.endpoint, e
            ))
        })?;

        Ok(Self {
            config,
            endpoint,
            transport,
        })
    }

    fn prepare(&self, mut request: SubscribeRequest) -> SubscribeRequest {
        if let Some(group) = &self.config.group_id {
            if !request.groups.iter().any(|g| g == group) {
                request = request.with_group(group.clone());
            }
        }
        request
    }
}

#[async_trait]
impl NewsletterProvider for MailerLiteProvider {
    async fn subscribe(&self, request: SubscribeRequest) -> Result<(), NewsletterError> {
        if !is_valid_email(&request.email) {
            return Err(NewsletterError::InvalidEmail(request.email));
        }

        let request = self.prepare(request);
        let body = serde_json::to_string(&request)?;
        self.transport
            .post_json(&self.endpoint, &self.config.api_key, body)
            .await
    }

    fn name(&self) -> &str {
        "MailerLite"
    }
}
