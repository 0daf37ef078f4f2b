//! Authentication payloads and the sign-in form rules.

use serde::{Deserialize, Serialize};

use crate::shared::validation::{is_gmail_address, ValidationErrors};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_NAME_LEN: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl UserInfo {
    /// Name shown in the header and used as the acting technician.
    pub fn display_name(&self) -> &str {
        match &self.full_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub user: Option<UserInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub success: bool,
    pub user: UserInfo,
}

// ============================================================================
// Form rules
// ============================================================================

pub fn email_error(email: &str) -> Option<&'static str> {
    if is_gmail_address(email) {
        None
    } else {
        Some("Please enter a valid Gmail address (@gmail.com)")
    }
}

pub fn password_error(password: &str) -> Option<&'static str> {
    if password.chars().count() >= MIN_PASSWORD_LEN {
        None
    } else {
        Some("Password must be at least 8 characters")
    }
}

pub fn name_error(name: &str) -> Option<&'static str> {
    if name.trim().chars().count() >= MIN_NAME_LEN {
        None
    } else {
        Some("Please enter your full name (at least 2 characters)")
    }
}

/// Live hint under the signup password field; `None` while empty.
pub fn password_hint(password: &str) -> Option<String> {
    let len = password.chars().count();
    match len {
        0 => None,
        n if n < MIN_PASSWORD_LEN => Some(format!(
            "{}/{} characters (minimum {} required)",
            n, MIN_PASSWORD_LEN, MIN_PASSWORD_LEN
        )),
        _ => Some("Strong password".to_string()),
    }
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(msg) = email_error(&self.email) {
            errors.push("email", msg);
        }
        if let Some(msg) = password_error(&self.password) {
            errors.push("password", msg);
        }
        errors.into_result()
    }
}

impl SignupRequest {
    pub fn new(full_name: &str, email: &str, password: &str) -> Self {
        Self {
            full_name: full_name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub fn validate(&self, confirm_password: &str) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(msg) = name_error(&self.full_name) {
            errors.push("full_name", msg);
        }
        if let Some(msg) = email_error(&self.email) {
            errors.push("email", msg);
        }
        if let Some(msg) = password_error(&self.password) {
            errors.push("password", msg);
        }
        if self.password != confirm_password {
            errors.push("confirm_password", "Passwords do not match");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        assert!(LoginRequest::new(" ravi@gmail.com ", "secret123").validate().is_ok());
        let errors = LoginRequest::new("ravi@yahoo.com", "short")
            .validate()
            .unwrap_err();
        assert!(errors.get("email").is_some());
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_signup_validation() {
        let req = SignupRequest::new(" A ", "ravi@gmail.com", "longenough");
        let errors = req.validate("different").unwrap_err();
        assert!(errors.get("full_name").is_some());
        assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));
        assert!(errors.get("email").is_none());

        let req = SignupRequest::new("Ravi Kumar", "ravi@gmail.com", "longenough");
        assert!(req.validate("longenough").is_ok());
    }

    #[test]
    fn test_password_hint() {
        assert_eq!(password_hint(""), None);
        assert_eq!(
            password_hint("abc").as_deref(),
            Some("3/8 characters (minimum 8 required)")
        );
        assert_eq!(password_hint("abcdefgh").as_deref(), Some("Strong password"));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserInfo {
            id: None,
            email: "tech@gmail.com".into(),
            full_name: Some(" ".into()),
        };
        assert_eq!(user.display_name(), "tech@gmail.com");
    }

    #[test]
    fn test_decode_login_response() {
        let body = serde_json::json!({
            "success": true,
            "token": "abc",
            "user": {"id": 1, "email": "a@gmail.com", "full_name": "Tech-01"}
        });
        let resp: LoginResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.user.display_name(), "Tech-01");
    }
}
