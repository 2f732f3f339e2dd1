//! Validation logic for the auth forms.
//!
//! This module contains the validation functions used by the register and
//! verify pages, extracted from the components to enable easier testing.
//! Nothing here talks to the network; a form submits only once every check
//! has passed.

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// Field is required but empty
    Required,
    /// Email address is invalid (missing @ symbol)
    InvalidEmail,
    /// Password is too short (less than 8 characters)
    PasswordTooShort,
    /// Password confirmation doesn't match password
    PasswordsDoNotMatch,
    /// The terms checkbox was left unchecked
    TermsNotAccepted,
    /// The one-time code is not exactly 6 characters
    CodeLength,
}

impl ValidationError {
    /// Message shown next to the offending field.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required => "This field is required",
            Self::InvalidEmail => "Enter a valid email address",
            Self::PasswordTooShort => "Password must be at least 8 characters",
            Self::PasswordsDoNotMatch => "Passwords do not match",
            Self::TermsNotAccepted => "You must accept the terms to continue",
            Self::CodeLength => "Enter the 6-digit code",
        }
    }
}

/// Validates a display name.
///
/// # Validation rules
/// - Name must not be empty
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    Ok(())
}

/// Validates an email address.
///
/// # Validation rules
/// - Email must not be empty
/// - Email must contain an '@' symbol
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    if !trimmed.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates a password.
///
/// # Validation rules
/// - Password must not be empty
/// - Password must be at least 8 characters long
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    if password.len() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

/// Validates that the password confirmation matches the password.
///
/// # Validation rules
/// - Confirmation must not be empty
/// - Confirmation must match the password
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if confirm_password.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }

    Ok(())
}

/// Validates the terms checkbox.
pub fn validate_terms(accepted: bool) -> Result<(), ValidationError> {
    if accepted {
        Ok(())
    } else {
        Err(ValidationError::TermsNotAccepted)
    }
}

/// Validates a one-time email code.
///
/// # Validation rules
/// - Code must be exactly 6 characters; the server checks everything else
pub fn validate_otp(code: &str) -> Result<(), ValidationError> {
    if code.chars().count() != 6 {
        return Err(ValidationError::CodeLength);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("Dana").is_ok());
        assert!(validate_name("D").is_ok());
        assert!(validate_name("Dana Lee-Curtis").is_ok());
    }

    #[test]
    fn test_validate_name_invalid() {
        assert_eq!(validate_name(""), Err(ValidationError::Required));
        assert_eq!(validate_name("   "), Err(ValidationError::Required));
    }

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("test.user@domain.org").is_ok());
        assert!(validate_email("user.name+tag@example.com").is_ok());
        assert!(validate_email("a@b").is_ok()); // Minimal valid case
    }

    #[test]
    fn test_validate_email_invalid() {
        // Empty email
        assert_eq!(validate_email(""), Err(ValidationError::Required));

        // Whitespace only
        assert_eq!(validate_email("   "), Err(ValidationError::Required));

        // Missing @ symbol
        assert_eq!(
            validate_email("userexample.com"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("user.name"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_validate_email_edge_cases() {
        // Multiple @ symbols - our simple validation considers this valid
        assert!(validate_email("user@@example.com").is_ok());

        // @ at different positions
        assert!(validate_email("@example.com").is_ok());
        assert!(validate_email("user@").is_ok());
    }

    #[test]
    fn test_validate_password_valid() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("12345678").is_ok()); // Exactly 8 characters
        assert!(validate_password("MySecureP@ssw0rd!").is_ok());
    }

    #[test]
    fn test_validate_password_invalid() {
        // Empty password
        assert_eq!(validate_password(""), Err(ValidationError::Required));

        // Whitespace only
        assert_eq!(validate_password("   "), Err(ValidationError::Required));

        // Too short
        assert_eq!(
            validate_password("1234567"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_password("short"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_validate_confirm_password_valid() {
        assert!(validate_confirm_password("password123", "password123").is_ok());
        assert!(validate_confirm_password("pass word", "pass word").is_ok());
    }

    #[test]
    fn test_validate_confirm_password_invalid() {
        // Empty confirmation
        assert_eq!(
            validate_confirm_password("", "password123"),
            Err(ValidationError::Required)
        );

        // Non-matching passwords
        assert_eq!(
            validate_confirm_password("different", "password123"),
            Err(ValidationError::PasswordsDoNotMatch)
        );

        // Case sensitive comparison
        assert_eq!(
            validate_confirm_password("Password123", "password123"),
            Err(ValidationError::PasswordsDoNotMatch)
        );

        // Both empty should still be an error (confirmation is required)
        assert_eq!(
            validate_confirm_password("", ""),
            Err(ValidationError::Required)
        );
    }

    #[test]
    fn test_validate_terms() {
        assert!(validate_terms(true).is_ok());
        assert_eq!(validate_terms(false), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn test_validate_otp_length_is_the_only_gate() {
        assert!(validate_otp("123456").is_ok());

        // Length is the sole client-side check; wrong characters are the
        // server's call to reject.
        assert!(validate_otp("abcdef").is_ok());

        assert_eq!(validate_otp(""), Err(ValidationError::CodeLength));
        assert_eq!(validate_otp("12345"), Err(ValidationError::CodeLength));
        assert_eq!(validate_otp("1234567"), Err(ValidationError::CodeLength));
    }

    #[test]
    fn test_messages_are_field_level() {
        assert_eq!(
            ValidationError::Required.message(),
            "This field is required"
        );
        assert_eq!(
            ValidationError::CodeLength.message(),
            "Enter the 6-digit code"
        );
    }

    #[test]
    fn test_comprehensive_validation_workflow() {
        // Test a complete validation workflow with valid inputs
        let name = "Test User";
        let email = "test@example.com";
        let password = "password123";
        let confirm_password = "password123";

        assert!(validate_name(name).is_ok());
        assert!(validate_email(email).is_ok());
        assert!(validate_password(password).is_ok());
        assert!(validate_confirm_password(confirm_password, password).is_ok());
        assert!(validate_terms(true).is_ok());
    }
}
