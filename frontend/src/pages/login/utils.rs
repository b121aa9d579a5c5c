use crate::api::{ApiError, LoginRequest};

/// Trims the email and rejects empty fields before any request is made.
pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn welcome_message(name: &str) -> String {
    format!("Welcome back {}!", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            validate_credentials("  ", "secret").unwrap_err().error,
            "Email is required"
        );
        assert_eq!(
            validate_credentials("ali@example.com", "").unwrap_err().error,
            "Password is required"
        );
        assert_eq!(
            validate_credentials("", "secret").unwrap_err().code,
            "VALIDATION_ERROR"
        );
    }

    #[test]
    fn email_format_is_left_to_the_server() {
        let request = validate_credentials("ali", "1").unwrap();
        assert_eq!(request.email, "ali");
        assert_eq!(request.password, "1");
    }

    #[test]
    fn trims_email_but_not_password() {
        let request = validate_credentials(" ali@example.com ", " secret ").unwrap();
        assert_eq!(request.email, "ali@example.com");
        assert_eq!(request.password, " secret ");
    }

    #[test]
    fn welcome_uses_name() {
        assert_eq!(welcome_message("Ali"), "Welcome back Ali!");
    }
}
