use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewsletterConfig {
    /// Recorded on every subscriber so the studio can see which channel
    /// signed them up.
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(flatten)]
    pub provider: NewsletterProviderConfig,
}

fn default_source() -> String {
    "website".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum NewsletterProviderConfig {
    Null,
    Mailerlite(MailerLiteConfig),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailerLiteConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub api_key: String,
    /// Optional subscriber group to file new signups under.
    #[serde(default)]
    pub group_id: Option<String>,
}

fn default_endpoint() -> String {
    "https://connect.mailerlite.com/api/subscribers".to_string()
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            provider: NewsletterProviderConfig::Null,
        }
    }
}
