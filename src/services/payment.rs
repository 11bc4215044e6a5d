//! Payment intake service
//!
//! The port the payment step hands a validated card to. Client-side
//! format checks happen before submission; the gateway still gets the
//! final word and may decline.

use crate::error::CreatorlinkResult;
use crate::models::PaymentCard;

/// Verdict from the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Accepted,
    Declined { reason: String },
}

impl PaymentOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Port for submitting a payment method
pub trait PaymentGateway {
    fn submit_payment_method(&self, card: &PaymentCard) -> CreatorlinkResult<PaymentOutcome>;
}

/// Card-number suffix the mock gateway declines, so the retry path
/// (card rejected, draft retained) can be exercised
pub const DECLINED_SUFFIX: &str = "0002";

/// Deterministic stand-in for the payment processor
#[derive(Debug, Default)]
pub struct MockPaymentGateway;

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentGateway for MockPaymentGateway {
    fn submit_payment_method(&self, card: &PaymentCard) -> CreatorlinkResult<PaymentOutcome> {
        if card.digits().ends_with(DECLINED_SUFFIX) {
            Ok(PaymentOutcome::Declined {
                reason: "Your card was declined by the issuer".to_string(),
            })
        } else {
            Ok(PaymentOutcome::Accepted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(number: &str) -> PaymentCard {
        PaymentCard {
            card_number: number.into(),
            expiry: "12/27".into(),
            cvv: "123".into(),
            name_on_card: "Casey Rivera".into(),
        }
    }

    #[test]
    fn test_accepts_ordinary_card() {
        let gateway = MockPaymentGateway::new();
        let outcome = gateway
            .submit_payment_method(&card("4242 4242 4242 4242"))
            .unwrap();
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_declines_designated_card() {
        let gateway = MockPaymentGateway::new();
        let outcome = gateway
            .submit_payment_method(&card("4000 0000 0000 0002"))
            .unwrap();
        assert!(matches!(outcome, PaymentOutcome::Declined { .. }));
    }
}
