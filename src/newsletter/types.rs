use serde::{Deserialize, Serialize};

/// Subscriber payload in the wire shape the MailerLite API expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
    pub fields: SubscribeFields,
    pub status: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeFields {
    pub source: String,
}

impl SubscribeRequest {
    pub fn new(email: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            fields: SubscribeFields {
                source: source.into(),
            },
            status: "active".to_string(),
            groups: Vec::new(),
        }
    }

    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.groups.push(group_id.into());
        self
    }
}
