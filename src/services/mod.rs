//! Service layer for creatorlink
//!
//! Ports to the platform backend, injected into the screens that need
//! them. Every port has a deterministic mock implementation so the
//! whole client runs offline.

pub mod auth;
pub mod identity;
pub mod payment;

pub use auth::{AuthService, LoginOutcome, MockAuthService};
pub use identity::{Availability, IdentityService, MockIdentityService, DEMO_CODE};
pub use payment::{MockPaymentGateway, PaymentGateway, PaymentOutcome};

/// The bundle of ports handed to the TUI
pub struct Services {
    pub identity: Box<dyn IdentityService>,
    pub payments: Box<dyn PaymentGateway>,
    pub auth: Box<dyn AuthService>,
}

impl Services {
    /// Wire up the mock backends
    pub fn mock() -> Self {
        Self {
            identity: Box::new(MockIdentityService::new()),
            payments: Box::new(MockPaymentGateway::new()),
            auth: Box::new(MockAuthService::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_bundle_is_usable() {
        let services = Services::mock();
        assert!(services
            .identity
            .check_username("casey_creates")
            .unwrap()
            .is_available());
        assert!(services
            .auth
            .login("casey@example.com", "password123")
            .unwrap()
            .is_success());
    }
}
