use thiserror::Error;

use crate::contact::models::{ContactRequest, Submission};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,
}

/// Trims the form fields and checks them. Blank-after-trim counts as missing.
pub fn validate_submission(req: &ContactRequest) -> Result<Submission, SubmissionError> {
    let name = req.name.trim();
    let email = req.email.trim();
    let message = req.message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(SubmissionError::MissingFields);
    }

    if !is_valid_email(email) {
        return Err(SubmissionError::InvalidEmail);
    }

    Ok(Submission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

/// `local@domain.tld` shape check: no whitespace, exactly one `@`, and a dot
/// in the domain with characters on both sides.
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

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
