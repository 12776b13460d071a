//! Process-wide launcher state
//!
//! One [`AppContext`] is built from the parsed command line and shared as
//! `Rc<AppContext>` by every GTK signal handler. The window reference and
//! the credential state live here instead of in module-level globals.

use std::cell::RefCell;

use libadwaita as adw;

use crate::args::Config;

/// Login credentials for the remote kTBS, usable exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// No usable credentials were supplied on the command line.
    Absent,
    Available { username: String, password: String },
    /// Already injected into an authentication challenge; never replayed.
    Consumed,
}

impl Credentials {
    /// Builds the initial state. Credentials are usable only when a
    /// username and a non-empty password were both supplied.
    fn new(username: Option<String>, password: Option<String>) -> Self {
        match (username, password) {
            (Some(username), Some(password)) if !password.is_empty() => {
                Self::Available { username, password }
            }
            _ => Self::Absent,
        }
    }

    /// One-shot `Available -> Consumed` transition. Any other state is left
    /// untouched and yields `None`.
    pub fn take(&mut self) -> Option<(String, String)> {
        match std::mem::replace(self, Self::Consumed) {
            Self::Available { username, password } => Some((username, password)),
            other => {
                *self = other;
                None
            }
        }
    }
}

/// Launcher state shared by all event handlers for the process lifetime.
pub struct AppContext {
    pub config: Config,
    pub credentials: RefCell<Credentials>,
    /// The single main window, if one is currently open.
    pub window: RefCell<Option<adw::ApplicationWindow>>,
}

impl AppContext {
    /// Moves the password out of the parsed options into the credential
    /// state, so the long-lived configuration record no longer carries it.
    pub fn new(mut config: Config) -> Self {
        let credentials = Credentials::new(config.username.clone(), config.password.take());
        Self {
            config,
            credentials: RefCell::new(credentials),
            window: RefCell::new(None),
        }
    }

    /// Consumes the stored credentials, if still available.
    pub fn take_credentials(&self) -> Option<(String, String)> {
        self.credentials.borrow_mut().take()
    }
}
