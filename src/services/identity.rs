//! Identity and verification service
//!
//! The port the signup steps use for username availability and
//! email/phone code verification. The platform backend is not wired up
//! yet; [`MockIdentityService`] stands in with deterministic verdicts
//! so the flows are fully exercisable offline.

use std::cell::RefCell;

use crate::error::CreatorlinkResult;

/// Verdict of a username availability check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Taken,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Port for identity lookups and out-of-band code verification
pub trait IdentityService {
    /// Check whether a username is still free on the platform
    fn check_username(&self, username: &str) -> CreatorlinkResult<Availability>;

    /// Send a verification code to an email address
    fn send_email_code(&self, email: &str) -> CreatorlinkResult<()>;

    /// Verify a code previously sent to `email`
    fn verify_email_code(&self, email: &str, code: &str) -> CreatorlinkResult<bool>;

    /// Send a verification code to a phone number
    fn send_phone_code(&self, country_code: &str, number: &str) -> CreatorlinkResult<()>;

    /// Verify a code previously sent by SMS
    fn verify_phone_code(&self, code: &str) -> CreatorlinkResult<bool>;
}

/// Usernames the mock treats as already registered
pub const RESERVED_USERNAMES: &[&str] = &["admin", "support", "test", "user"];

/// The code every mock verification accepts
pub const DEMO_CODE: &str = "123456";

/// Deterministic stand-in for the platform backend
///
/// Records every send so tests can assert on delivery without timers.
#[derive(Debug, Default)]
pub struct MockIdentityService {
    sent_email_codes: RefCell<Vec<String>>,
    sent_phone_codes: RefCell<Vec<String>>,
}

impl MockIdentityService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emails a code was sent to, in order
    pub fn sent_email_codes(&self) -> Vec<String> {
        self.sent_email_codes.borrow().clone()
    }

    /// Phone numbers a code was sent to, in order
    pub fn sent_phone_codes(&self) -> Vec<String> {
        self.sent_phone_codes.borrow().clone()
    }
}

impl IdentityService for MockIdentityService {
    fn check_username(&self, username: &str) -> CreatorlinkResult<Availability> {
        let lowered = username.to_lowercase();
        if RESERVED_USERNAMES.contains(&lowered.as_str()) {
            Ok(Availability::Taken)
        } else {
            Ok(Availability::Available)
        }
    }

    fn send_email_code(&self, email: &str) -> CreatorlinkResult<()> {
        self.sent_email_codes.borrow_mut().push(email.to_string());
        Ok(())
    }

    fn verify_email_code(&self, _email: &str, code: &str) -> CreatorlinkResult<bool> {
        Ok(code == DEMO_CODE)
    }

    fn send_phone_code(&self, country_code: &str, number: &str) -> CreatorlinkResult<()> {
        self.sent_phone_codes
            .borrow_mut()
            .push(format!("{} {}", country_code, number));
        Ok(())
    }

    fn verify_phone_code(&self, code: &str) -> CreatorlinkResult<bool> {
        Ok(code == DEMO_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_usernames_are_taken() {
        let service = MockIdentityService::new();
        assert_eq!(
            service.check_username("admin").unwrap(),
            Availability::Taken
        );
        // Case insensitive
        assert_eq!(
            service.check_username("Support").unwrap(),
            Availability::Taken
        );
        assert!(service
            .check_username("casey_creates")
            .unwrap()
            .is_available());
    }

    #[test]
    fn test_email_code_round_trip() {
        let service = MockIdentityService::new();
        service.send_email_code("casey@example.com").unwrap();

        assert_eq!(service.sent_email_codes(), vec!["casey@example.com"]);
        assert!(service
            .verify_email_code("casey@example.com", DEMO_CODE)
            .unwrap());
        assert!(!service
            .verify_email_code("casey@example.com", "000000")
            .unwrap());
    }

    #[test]
    fn test_phone_code_round_trip() {
        let service = MockIdentityService::new();
        service.send_phone_code("+1", "555-867-5309").unwrap();

        assert_eq!(service.sent_phone_codes(), vec!["+1 555-867-5309"]);
        assert!(service.verify_phone_code(DEMO_CODE).unwrap());
        assert!(!service.verify_phone_code("654321").unwrap());
    }
}
