//! Payment method step
//!
//! The final creator step. Card input is re-formatted as the user
//! types (grouping spaces, MM/YY slash), format-checked client-side,
//! and then submitted to the payment gateway, which may still decline.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{PaymentCard, SignupDraft};
use crate::services::{PaymentOutcome, Services};
use crate::tui::widgets::{Notification, NotificationQueue, TextInput};
use crate::wizard::Wizard;

use super::{edit_input, StepAction};

/// Which field is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentField {
    #[default]
    CardNumber,
    Expiry,
    Cvv,
    NameOnCard,
}

impl PaymentField {
    pub fn next(self) -> Self {
        match self {
            Self::CardNumber => Self::Expiry,
            Self::Expiry => Self::Cvv,
            Self::Cvv => Self::NameOnCard,
            Self::NameOnCard => Self::CardNumber,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::CardNumber => Self::NameOnCard,
            Self::Expiry => Self::CardNumber,
            Self::Cvv => Self::Expiry,
            Self::NameOnCard => Self::Cvv,
        }
    }
}

/// Form state for the payment step
#[derive(Debug, Clone)]
pub struct PaymentForm {
    pub focused: PaymentField,
    pub card_number: TextInput,
    pub expiry: TextInput,
    pub cvv: TextInput,
    pub name_on_card: TextInput,
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self {
            focused: PaymentField::CardNumber,
            card_number: TextInput::new()
                .label("Card Number")
                .placeholder("1234 5678 9012 3456"),
            expiry: TextInput::new().label("Expiry").placeholder("MM/YY"),
            cvv: TextInput::new().label("CVV").placeholder("123").masked().max_len(4),
            name_on_card: TextInput::new()
                .label("Name on Card")
                .placeholder("As printed on the card"),
        }
    }
}

impl PaymentForm {
    /// Seed from a previously entered card, e.g. after a decline
    pub fn from_draft(draft: &SignupDraft) -> Self {
        let mut form = Self::default();
        if let Some(card) = &draft.payment {
            form.card_number.set_value(&card.card_number);
            form.expiry.set_value(&card.expiry);
            form.cvv.set_value(&card.cvv);
            form.name_on_card.set_value(&card.name_on_card);
        }
        form
    }

    /// Build the card from the current inputs
    pub fn card(&self) -> PaymentCard {
        PaymentCard {
            card_number: self.card_number.value().to_string(),
            expiry: self.expiry.value().to_string(),
            cvv: self.cvv.value().to_string(),
            name_on_card: self.name_on_card.value().trim().to_string(),
        }
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focused {
            PaymentField::CardNumber => &mut self.card_number,
            PaymentField::Expiry => &mut self.expiry,
            PaymentField::Cvv => &mut self.cvv,
            PaymentField::NameOnCard => &mut self.name_on_card,
        }
    }
}

/// Render the step body
pub fn render(frame: &mut Frame, area: Rect, form: &PaymentForm) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Your payment details are encrypted and secure.",
            Style::default().fg(Color::Green),
        ))),
        Rect { height: 1, ..area },
    );

    let fields = [
        (&form.card_number, PaymentField::CardNumber),
        (&form.expiry, PaymentField::Expiry),
        (&form.cvv, PaymentField::Cvv),
        (&form.name_on_card, PaymentField::NameOnCard),
    ];
    for (i, (input, field)) in fields.iter().enumerate() {
        let y = area.y + 2 + (i as u16) * 2;
        if y >= area.y + area.height {
            break;
        }
        let mut widget = (*input).clone();
        widget.focused = form.focused == *field;
        frame.render_widget(&widget, Rect { y, height: 1, ..area });
    }
}

/// Handle a key for the payment step
pub fn handle_key(
    key: KeyEvent,
    form: &mut PaymentForm,
    wizard: &mut Wizard,
    services: &Services,
    notifications: &mut NotificationQueue,
) -> StepAction {
    match key.code {
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.focused = form.focused.prev();
            } else {
                form.focused = form.focused.next();
            }
            StepAction::Handled
        }
        KeyCode::BackTab => {
            form.focused = form.focused.prev();
            StepAction::Handled
        }
        KeyCode::Down => {
            form.focused = form.focused.next();
            StepAction::Handled
        }
        KeyCode::Up => {
            form.focused = form.focused.prev();
            StepAction::Handled
        }

        KeyCode::Enter => {
            let card = form.card();
            if let Err(err) = card.validate() {
                notifications.push(Notification::error(err.to_string()));
                return StepAction::Handled;
            }

            match services.payments.submit_payment_method(&card) {
                Ok(PaymentOutcome::Accepted) => {
                    wizard.update_draft(|d| d.payment = Some(card));
                    StepAction::Completed
                }
                Ok(PaymentOutcome::Declined { reason }) => {
                    // Keep the card in the draft so a retry starts from
                    // the entered data
                    wizard.update_draft(|d| d.payment = Some(card));
                    notifications
                        .push(Notification::error("Payment declined").with_description(reason));
                    StepAction::Handled
                }
                Err(err) => {
                    notifications.push(
                        Notification::error("Could not submit payment method")
                            .with_description(err.to_string()),
                    );
                    StepAction::Handled
                }
            }
        }

        _ => {
            let field = form.focused;
            let consumed = edit_input(key, form.focused_input());
            if !consumed {
                return StepAction::Ignored;
            }
            // Keep card number and expiry in display format as typed
            match field {
                PaymentField::CardNumber => {
                    let formatted = PaymentCard::format_card_number(form.card_number.value());
                    form.card_number.set_value(formatted);
                }
                PaymentField::Expiry => {
                    let formatted = PaymentCard::format_expiry(form.expiry.value());
                    form.expiry.set_value(formatted);
                }
                _ => {}
            }
            StepAction::Handled
        }
    }
}
