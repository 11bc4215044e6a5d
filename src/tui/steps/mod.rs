//! Wizard step views
//!
//! One module per step kind. Every module follows the same shape: a
//! form-state struct seeded from the draft when the step is entered, a
//! `render` function for the step body, and a `handle_key` function
//! that validates input, commits it to the draft, and reports what the
//! host should do next.

pub mod account;
pub mod choice;
pub mod freeform;
pub mod images;
pub mod multi_choice;
pub mod otp;
pub mod packages;
pub mod payment;
pub mod phone;
pub mod socials;
pub mod username;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Settings;
use crate::models::SignupDraft;
use crate::wizard::StepId;

use super::widgets::TextInput;

/// What a step's key handler asks the host to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// The key was not for this step
    Ignored,
    /// The key was consumed; stay on this step
    Handled,
    /// The step validated and committed its input and is done; the
    /// host marks it complete and moves on (or finishes the wizard)
    Completed,
}

/// View state for every step kind
///
/// Only the form for the current step is live; it is re-seeded from
/// the draft each time a step is entered, so back-navigation shows
/// what was previously committed.
pub struct StepForms {
    pub username: username::UsernameForm,
    pub account: account::AccountForm,
    pub verify_email: otp::OtpForm,
    pub freeform: freeform::FreeformForm,
    pub choice: choice::ChoiceForm,
    pub multi_choice: multi_choice::MultiChoiceForm,
    pub socials: socials::SocialsForm,
    pub images: images::ImagesForm,
    pub packages: packages::PackagesForm,
    pub phone: phone::PhoneForm,
    pub payment: payment::PaymentForm,
}

impl StepForms {
    pub fn new() -> Self {
        Self {
            username: username::UsernameForm::default(),
            account: account::AccountForm::default(),
            verify_email: otp::OtpForm::default(),
            freeform: freeform::FreeformForm::default(),
            choice: choice::ChoiceForm::default(),
            multi_choice: multi_choice::MultiChoiceForm::default(),
            socials: socials::SocialsForm::default(),
            images: images::ImagesForm::default(),
            packages: packages::PackagesForm::default(),
            phone: phone::PhoneForm::default(),
            payment: payment::PaymentForm::default(),
        }
    }

    /// Re-seed the form backing `step` from the draft
    pub fn seed(&mut self, step: StepId, draft: &SignupDraft, settings: &Settings) {
        match step {
            StepId::Username => self.username = username::UsernameForm::from_draft(draft),
            StepId::AccountDetails => self.account = account::AccountForm::from_draft(draft),
            StepId::VerifyEmail => self.verify_email = otp::OtpForm::new(),
            StepId::Location | StepId::Headline | StepId::Bio => {
                self.freeform = freeform::FreeformForm::from_draft(step, draft)
            }
            StepId::Gender
            | StepId::Industry
            | StepId::ContentVolume
            | StepId::CampaignBudget => self.choice = choice::ChoiceForm::from_draft(step, draft),
            StepId::ContentCategories | StepId::BrandCategories | StepId::TargetPlatforms => {
                self.multi_choice = multi_choice::MultiChoiceForm::new(step)
            }
            StepId::SocialProfiles => self.socials = socials::SocialsForm::default(),
            StepId::ContentImages => self.images = images::ImagesForm::default(),
            StepId::ContentPackages => self.packages = packages::PackagesForm::from_draft(draft),
            StepId::VerifyPhone => self.phone = phone::PhoneForm::from_draft(draft, settings),
            StepId::Payment => self.payment = payment::PaymentForm::from_draft(draft),
        }
    }
}

impl Default for StepForms {
    fn default() -> Self {
        Self::new()
    }
}

/// Route an editing key to a text input. Returns whether the key was
/// consumed; steps with extra per-key behavior handle it themselves.
pub(crate) fn edit_input(key: KeyEvent, input: &mut TextInput) -> bool {
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        _ => return false,
    }
    true
}
