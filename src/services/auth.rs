//! Authentication service
//!
//! Login and the forgot-password flow talk to this port. The mock
//! accepts any well-formed credentials and uses the shared demo code
//! for reset verification.

use std::cell::RefCell;

use crate::error::CreatorlinkResult;

use super::identity::DEMO_CODE;

/// Verdict of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    InvalidCredentials,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Port for session authentication and password recovery
pub trait AuthService {
    /// Attempt a password login
    fn login(&self, email: &str, password: &str) -> CreatorlinkResult<LoginOutcome>;

    /// Send a password-reset code to an email address
    fn request_password_reset(&self, email: &str) -> CreatorlinkResult<()>;

    /// Verify a reset code previously sent to `email`
    fn verify_reset_code(&self, email: &str, code: &str) -> CreatorlinkResult<bool>;

    /// Set a new password after a verified reset
    fn reset_password(&self, email: &str, new_password: &str) -> CreatorlinkResult<()>;
}

/// Deterministic stand-in for the platform's auth backend
#[derive(Debug, Default)]
pub struct MockAuthService {
    reset_requests: RefCell<Vec<String>>,
}

impl MockAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emails a reset code was sent to, in order
    pub fn reset_requests(&self) -> Vec<String> {
        self.reset_requests.borrow().clone()
    }
}

impl AuthService for MockAuthService {
    fn login(&self, email: &str, password: &str) -> CreatorlinkResult<LoginOutcome> {
        if email.is_empty() || password.is_empty() {
            Ok(LoginOutcome::InvalidCredentials)
        } else {
            Ok(LoginOutcome::Success)
        }
    }

    fn request_password_reset(&self, email: &str) -> CreatorlinkResult<()> {
        self.reset_requests.borrow_mut().push(email.to_string());
        Ok(())
    }

    fn verify_reset_code(&self, _email: &str, code: &str) -> CreatorlinkResult<bool> {
        Ok(code == DEMO_CODE)
    }

    fn reset_password(&self, _email: &str, _new_password: &str) -> CreatorlinkResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_accepts_credentials() {
        let auth = MockAuthService::new();
        assert!(auth
            .login("casey@example.com", "hunter22!")
            .unwrap()
            .is_success());
        assert_eq!(
            auth.login("", "").unwrap(),
            LoginOutcome::InvalidCredentials
        );
    }

    #[test]
    fn test_reset_flow() {
        let auth = MockAuthService::new();
        auth.request_password_reset("casey@example.com").unwrap();
        assert_eq!(auth.reset_requests(), vec!["casey@example.com"]);

        assert!(auth
            .verify_reset_code("casey@example.com", DEMO_CODE)
            .unwrap());
        assert!(!auth.verify_reset_code("casey@example.com", "999999").unwrap());

        auth.reset_password("casey@example.com", "new-password-1")
            .unwrap();
    }
}
