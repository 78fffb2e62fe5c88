pub mod config;
pub mod error;
pub mod providers;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait NewsletterProvider: Send + Sync {
    async fn subscribe(&self, request: SubscribeRequest) -> Result<(), NewsletterError>;
    fn name(&self) -> &str;
}

pub type DynNewsletterProvider = Arc<dyn NewsletterProvider>;

pub fn create_provider(config: &NewsletterConfig) -> Result<DynNewsletterProvider, NewsletterError> {
    match &config.provider {
        NewsletterProviderConfig::Null => Ok(Arc::new(providers::null::NullProvider::new())),
        NewsletterProviderConfig::Mailerlite(ml_config) => Ok(Arc::new(
            providers::mailerlite::MailerLiteProvider::new(ml_config.clone())?,
        )),
    }
}

/// Same shape check the signup form applies before submitting: one `@`,
/// a dot somewhere in the domain, no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
