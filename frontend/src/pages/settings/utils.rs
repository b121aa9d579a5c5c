use crate::api::{ApiError, ChangePasswordRequest};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordForm {
    pub old_password: String,
    pub new_password: String,
    pub confirmed_password: String,
}

impl PasswordForm {
    pub fn to_request(&self, user_id: Option<&str>) -> Result<ChangePasswordRequest, ApiError> {
        let user_id = user_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApiError::validation("You must be logged in to change your password"))?;
        if self.old_password.is_empty() {
            return Err(ApiError::validation("Old password is required"));
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::validation(
                "Password must be at least 6 characters long",
            ));
        }
        if self.new_password != self.confirmed_password {
            return Err(ApiError::validation("Passwords do not match"));
        }
        Ok(ChangePasswordRequest {
            user_id: user_id.to_string(),
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
            confirmed_password: self.confirmed_password.clone(),
        })
    }
}
