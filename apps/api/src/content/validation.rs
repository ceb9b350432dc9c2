use crate::contact::validation::is_valid_email;
use crate::content::ContentError;
use crate::models::profile::Profile;

/// Checks the rules the type system cannot express.
pub fn validate_profile(profile: &Profile) -> Result<(), ContentError> {
    if !is_valid_email(&profile.contact.email) {
        return Err(ContentError::Invalid(format!(
            "contact.email '{}' is not a valid email address",
            profile.contact.email
        )));
    }
    Ok(())
}
