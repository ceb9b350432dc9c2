use serde::{Deserialize, Serialize};

pub const SUBMISSION_SUBJECT: &str = "Portfolio Contact Form Submission";

/// Body of `POST /api/contact`. Missing fields deserialize as empty so they
/// surface as a validation error rather than a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    /// Honeypot field; hidden from humans, filled in by bots.
    #[serde(default)]
    pub botcheck: Option<String>,
}

impl ContactRequest {
    pub fn is_bot(&self) -> bool {
        self.botcheck
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: "Message sent successfully!".to_string(),
        }
    }
}

/// A submission that passed validation, fields trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// JSON body the relay expects.
#[derive(Debug, Serialize)]
pub struct RelayPayload<'a> {
    pub access_key: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub subject: &'a str,
    pub from_name: &'a str,
}

impl<'a> RelayPayload<'a> {
    pub fn new(access_key: &'a str, submission: &'a Submission) -> Self {
        Self {
            access_key,
            name: &submission.name,
            email: &submission.email,
            message: &submission.message,
            subject: SUBMISSION_SUBJECT,
            from_name: &submission.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
