use email_address::EmailAddress;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,

    #[error("Password must be at most {MAX_PASSWORD_LENGTH} characters")]
    PasswordTooLong,
}

/// Trims, validates and lower-cases an email address.
pub fn normalize_email(email: &str) -> Result<String, CredentialError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(CredentialError::EmptyEmail);
    }

    if !EmailAddress::is_valid(email) {
        return Err(CredentialError::InvalidEmailFormat);
    }

    Ok(email.to_lowercase())
}

pub fn validate_password(password: &str) -> Result<(), CredentialError> {
    let length = password.chars().count();

    if length < MIN_PASSWORD_LENGTH {
        return Err(CredentialError::PasswordTooShort);
    }

    if length > MAX_PASSWORD_LENGTH {
        return Err(CredentialError::PasswordTooLong);
    }

    Ok(())
}
