//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling
//! events: the active screen, the injected service ports, persisted
//! settings, the toast queue, and the signup session when a wizard is
//! running.

use crate::config::{AppPaths, Settings};
use crate::services::Services;
use crate::wizard::Audience;

use super::screens::dashboard::DashboardState;
use super::screens::forgot_password::ForgotPasswordForm;
use super::screens::landing::LandingState;
use super::screens::login::LoginForm;
use super::screens::signup::SignupSession;
use super::widgets::{Notification, NotificationQueue};

/// Which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    Login,
    ForgotPassword,
    Signup,
    Dashboard,
}

/// Main application state
pub struct App {
    /// Injected backend ports
    pub services: Services,

    /// Persisted user settings
    pub settings: Settings,

    /// Paths configuration
    pub paths: AppPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active screen
    pub screen: Screen,

    /// Transient toast notifications
    pub notifications: NotificationQueue,

    /// Landing screen state
    pub landing: LandingState,

    /// Login form state
    pub login: LoginForm,

    /// Forgot-password flow state
    pub forgot: ForgotPasswordForm,

    /// Dashboard state
    pub dashboard: DashboardState,

    /// The running signup session, if any
    pub signup: Option<SignupSession>,
}

impl App {
    /// Create a new App instance
    pub fn new(services: Services, settings: Settings, paths: AppPaths) -> Self {
        let login = LoginForm::with_remembered_email(&settings.last_email);
        Self {
            services,
            settings,
            paths,
            should_quit: false,
            screen: Screen::default(),
            notifications: NotificationQueue::new(),
            landing: LandingState::default(),
            login,
            forgot: ForgotPasswordForm::default(),
            dashboard: DashboardState::default(),
            signup: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Push a toast
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Switch to another screen
    pub fn go_to(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// Begin a fresh signup session for the given audience
    pub fn start_signup(&mut self, audience: Audience) {
        let mut session = SignupSession::new(audience);
        session.seed_current_form(&self.settings);
        self.signup = Some(session);
        self.screen = Screen::Signup;
    }

    /// Leave the wizard without finishing; the session is discarded
    pub fn abandon_signup(&mut self) {
        self.signup = None;
        self.screen = Screen::Landing;
    }

    /// Terminal transition: capture the dashboard summary, destroy the
    /// session, and hand off
    pub fn finish_signup(&mut self) {
        if let Some(session) = self.signup.take() {
            self.dashboard = DashboardState::from_draft(session.wizard.audience(), session.wizard.draft());
        }
        self.screen = Screen::Dashboard;
        self.notify(
            Notification::success("Registration complete!")
                .with_description("Your profile has been set up successfully."),
        );
    }

    /// Persist settings, downgrading failures to a toast
    pub fn save_settings(&mut self) {
        if let Err(err) = self.settings.save(&self.paths) {
            self.notifications.push(
                Notification::warning("Could not save settings").with_description(err.to_string()),
            );
        }
    }
}
