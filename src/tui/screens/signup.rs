//! Signup wizard host
//!
//! Owns the wizard engine plus the per-step form state, renders the
//! step frame (title, progress, body, hints), and routes keys: global
//! wizard keys first (back, skip, skip-all), then the current step's
//! own handler. Step completion and the terminal hand-off are decided
//! here so every step view stays navigation-free.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::Settings;
use crate::services::Services;
use crate::tui::app::App;
use crate::tui::layout::{card_area, WizardLayout};
use crate::tui::steps::{
    account, choice, freeform, images, multi_choice, otp, packages, payment, phone, socials,
    username, StepAction, StepForms,
};
use crate::tui::widgets::{Notification, NotificationQueue, ProgressBar};
use crate::wizard::{Audience, StepId, Wizard};

/// One running signup: the engine plus the view state of its steps
pub struct SignupSession {
    pub wizard: Wizard,
    pub forms: StepForms,
}

impl SignupSession {
    pub fn new(audience: Audience) -> Self {
        Self {
            wizard: Wizard::new(audience),
            forms: StepForms::new(),
        }
    }

    /// Re-seed the current step's form from the draft; called after
    /// every navigation so back-navigation shows committed values
    pub fn seed_current_form(&mut self, settings: &Settings) {
        self.forms
            .seed(self.wizard.current_step().id, self.wizard.draft(), settings);
    }
}

/// What the key handler decided at the host level
enum HostAction {
    None,
    Reseed,
    Abandon,
    Finish,
}

/// Render the signup screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let Some(session) = app.signup.as_ref() else {
        return;
    };
    let wizard = &session.wizard;
    let step = wizard.current_step();

    let card = card_area(frame.area());
    let layout = WizardLayout::new(card);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                step.title,
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                step.description,
                Style::default().fg(Color::White),
            )),
        ]),
        layout.header,
    );

    let completed: Vec<bool> = (0..wizard.total_steps())
        .map(|i| wizard.is_step_complete(i))
        .collect();
    frame.render_widget(ProgressBar::new(wizard.progress(), completed), layout.progress);

    let draft = wizard.draft();
    match step.id {
        StepId::Username => username::render(frame, layout.body, &session.forms.username),
        StepId::AccountDetails => account::render(frame, layout.body, &session.forms.account),
        StepId::VerifyEmail => {
            otp::render(frame, layout.body, &session.forms.verify_email, &draft.email)
        }
        StepId::Location | StepId::Headline | StepId::Bio => {
            freeform::render(frame, layout.body, &session.forms.freeform)
        }
        StepId::Gender | StepId::Industry | StepId::ContentVolume | StepId::CampaignBudget => {
            choice::render(frame, layout.body, &session.forms.choice, draft)
        }
        StepId::ContentCategories | StepId::BrandCategories | StepId::TargetPlatforms => {
            multi_choice::render(frame, layout.body, &session.forms.multi_choice, draft)
        }
        StepId::SocialProfiles => socials::render(frame, layout.body, &session.forms.socials, draft),
        StepId::ContentImages => images::render(frame, layout.body, &session.forms.images, draft),
        StepId::ContentPackages => packages::render(frame, layout.body, &session.forms.packages),
        StepId::VerifyPhone => phone::render(frame, layout.body, &session.forms.phone),
        StepId::Payment => payment::render(frame, layout.body, &session.forms.payment),
    }

    if app.settings.show_key_hints {
        let mut hints = step_hints(step.id).to_string();
        if step.skippable {
            hints.push_str("  [Ctrl+S] Skip");
        }
        hints.push_str("  [F10] Skip all  [Esc] Back");
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hints,
                Style::default().fg(Color::DarkGray),
            ))),
            layout.hints,
        );
    }
}

fn step_hints(step: StepId) -> &'static str {
    match step {
        StepId::Username => "[Ctrl+K] Check availability  [Enter] Continue",
        StepId::AccountDetails => "[Tab] Next field  [Enter] Continue",
        StepId::VerifyEmail => "[Enter] Verify  [Ctrl+R] Resend",
        StepId::Location => "[Ctrl+N] Accept suggestion  [Enter] Continue",
        StepId::Headline | StepId::Bio => "[Enter] Continue",
        StepId::Gender | StepId::Industry | StepId::ContentVolume | StepId::CampaignBudget => {
            "[↑/↓] Move  [Space] Select  [Enter] Continue"
        }
        StepId::ContentCategories | StepId::BrandCategories | StepId::TargetPlatforms => {
            "[↑/↓] Move  [Space] Toggle  [Enter] Continue"
        }
        StepId::SocialProfiles => "[Tab] Field  [◀/▶] Change  [Ctrl+A] Add  [d] Remove  [Enter] Continue",
        StepId::ContentImages => "[u] Upload  [p] Profile picture  [d] Remove  [Enter] Continue",
        StepId::ContentPackages => "[Tab] Field  [Ctrl+N] Add  [Ctrl+D] Remove  [Enter] Continue",
        StepId::VerifyPhone => "[Enter] Send/Verify  [Ctrl+R] Resend",
        StepId::Payment => "[Tab] Next field  [Enter] Submit",
    }
}

/// Handle a key on the signup screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let host_action = {
        let Some(session) = app.signup.as_mut() else {
            return;
        };
        route_key(
            key,
            session,
            &app.services,
            &mut app.notifications,
        )
    };

    match host_action {
        HostAction::None => {}
        HostAction::Reseed => {
            if let Some(session) = app.signup.as_mut() {
                session.seed_current_form(&app.settings);
            }
        }
        HostAction::Abandon => app.abandon_signup(),
        HostAction::Finish => app.finish_signup(),
    }
}

fn route_key(
    key: KeyEvent,
    session: &mut SignupSession,
    services: &Services,
    notifications: &mut NotificationQueue,
) -> HostAction {
    let wizard = &mut session.wizard;

    // Global wizard keys take precedence over the step's own handling
    match key.code {
        KeyCode::Esc => {
            if wizard.current_index() == 0 {
                return HostAction::Abandon;
            }
            let target = wizard.current_index() - 1;
            wizard.go_to(target);
            return HostAction::Reseed;
        }

        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if wizard.skip_current() {
                return HostAction::Reseed;
            }
            notifications.push(Notification::warning("This step can't be skipped"));
            return HostAction::None;
        }

        KeyCode::F(10) => {
            wizard.skip_to_completion();
            notifications.push(
                Notification::info("Skipped ahead")
                    .with_description("Finish the last step to complete your profile"),
            );
            return HostAction::Reseed;
        }

        _ => {}
    }

    let forms = &mut session.forms;
    let action = match wizard.current_step().id {
        StepId::Username => {
            username::handle_key(key, &mut forms.username, wizard, services, notifications)
        }
        StepId::AccountDetails => {
            account::handle_key(key, &mut forms.account, wizard, services, notifications)
        }
        StepId::VerifyEmail => {
            otp::handle_key(key, &mut forms.verify_email, wizard, services, notifications)
        }
        StepId::Location | StepId::Headline | StepId::Bio => {
            freeform::handle_key(key, &mut forms.freeform, wizard, notifications)
        }
        StepId::Gender | StepId::Industry | StepId::ContentVolume | StepId::CampaignBudget => {
            choice::handle_key(key, &mut forms.choice, wizard, notifications)
        }
        StepId::ContentCategories | StepId::BrandCategories | StepId::TargetPlatforms => {
            multi_choice::handle_key(key, &mut forms.multi_choice, wizard, notifications)
        }
        StepId::SocialProfiles => {
            socials::handle_key(key, &mut forms.socials, wizard, notifications)
        }
        StepId::ContentImages => images::handle_key(key, &mut forms.images, wizard, notifications),
        StepId::ContentPackages => {
            packages::handle_key(key, &mut forms.packages, wizard, notifications)
        }
        StepId::VerifyPhone => {
            phone::handle_key(key, &mut forms.phone, wizard, services, notifications)
        }
        StepId::Payment => {
            payment::handle_key(key, &mut forms.payment, wizard, services, notifications)
        }
    };

    match action {
        StepAction::Completed => {
            let index = wizard.current_index();
            wizard.mark_step_complete(index);
            if wizard.at_last_step() {
                HostAction::Finish
            } else {
                wizard.advance();
                HostAction::Reseed
            }
        }
        StepAction::Handled | StepAction::Ignored => HostAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppPaths;
    use crate::services::{Services, DEMO_CODE};
    use crate::tui::app::Screen;
    use tempfile::TempDir;

    fn test_app(audience: Audience) -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = App::new(Services::mock(), Settings::default(), paths);
        app.start_signup(audience);
        (temp_dir, app)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    fn current_index(app: &App) -> usize {
        app.signup.as_ref().unwrap().wizard.current_index()
    }

    /// Walk the shared identity prefix: username, account details, email code
    fn complete_identity_steps(app: &mut App) {
        type_str(app, "casey_creates");
        handle_key(app, ctrl('k'));
        handle_key(app, key(KeyCode::Enter));
        assert_eq!(current_index(app), 1);

        type_str(app, "Casey Rivera");
        handle_key(app, key(KeyCode::Tab));
        type_str(app, "Casey Creates");
        handle_key(app, key(KeyCode::Tab));
        type_str(app, "casey@example.com");
        handle_key(app, key(KeyCode::Tab));
        type_str(app, "longenough1");
        handle_key(app, key(KeyCode::Enter));
        assert_eq!(current_index(app), 2);

        type_str(app, DEMO_CODE);
        handle_key(app, key(KeyCode::Enter));
        assert_eq!(current_index(app), 3);
    }

    #[test]
    fn test_esc_on_first_step_abandons() {
        let (_tmp, mut app) = test_app(Audience::Creator);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Landing);
        assert!(app.signup.is_none());
    }

    #[test]
    fn test_skip_refused_on_identity_step() {
        let (_tmp, mut app) = test_app(Audience::Creator);
        handle_key(&mut app, ctrl('s'));
        assert_eq!(current_index(&app), 0);
        assert_eq!(
            app.notifications.current().unwrap().title,
            "This step can't be skipped"
        );
    }

    #[test]
    fn test_skip_allowed_on_profile_step() {
        let (_tmp, mut app) = test_app(Audience::Creator);
        complete_identity_steps(&mut app);

        app.notifications.clear();
        handle_key(&mut app, ctrl('s'));
        assert_eq!(current_index(&app), 4);
        // Skipped, not completed
        assert!(!app.signup.as_ref().unwrap().wizard.is_step_complete(3));
    }

    #[test]
    fn test_skip_all_jumps_to_last_step() {
        let (_tmp, mut app) = test_app(Audience::Creator);
        handle_key(&mut app, key(KeyCode::F(10)));

        let session = app.signup.as_ref().unwrap();
        assert_eq!(session.wizard.current_index(), session.wizard.total_steps() - 1);
        assert!(session.wizard.all_steps_complete());
    }

    #[test]
    fn test_back_navigation_reseeds_committed_value() {
        let (_tmp, mut app) = test_app(Audience::Creator);
        complete_identity_steps(&mut app);

        // Go back to the account step; the committed email is shown
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(current_index(&app), 2);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(current_index(&app), 1);
        let form = &app.signup.as_ref().unwrap().forms.account;
        assert_eq!(form.email.value(), "casey@example.com");
    }

    #[test]
    fn test_business_flow_to_completion() {
        let (_tmp, mut app) = test_app(Audience::Business);
        complete_identity_steps(&mut app);

        // Industry
        handle_key(&mut app, key(KeyCode::Char(' ')));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(current_index(&app), 4);

        // Brand categories
        handle_key(&mut app, key(KeyCode::Char(' ')));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(current_index(&app), 5);

        // Target platforms
        handle_key(&mut app, key(KeyCode::Char(' ')));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(current_index(&app), 6);

        // Content volume
        handle_key(&mut app, key(KeyCode::Char(' ')));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(current_index(&app), 7);

        // Campaign budget is the terminal step
        handle_key(&mut app, key(KeyCode::Char(' ')));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.screen, Screen::Dashboard);
        assert!(app.signup.is_none());
        assert_eq!(app.dashboard.greeting_name, "Casey Creates");
    }
}
