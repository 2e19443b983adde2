use folio_models::contact::ContactSubmission;
use serde::{Deserialize, Serialize};

/// One contact-form submission. Every field may be absent; absent fields are
/// rendered as empty values rather than rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmission {
    /// Full name of the sender
    pub name: Option<String>,
    /// Reply address of the sender
    pub email: Option<String>,
    /// One of the predefined topics, or the sentinel "Otro"
    pub subject: Option<String>,
    /// Free-text subject, used only when `subject` is "Otro"
    pub other_subject: Option<String>,
    /// Content of the message
    pub message: Option<String>,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            other_subject: value.other_subject,
            message: value.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiContactConfirmation {
    pub msg: &'static str,
}
