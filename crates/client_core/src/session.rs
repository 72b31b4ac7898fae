//! Signed-out / signed-in state machine.

use shared::{
    domain::{Screen, Username},
    protocol::greeting_for,
};

/// The screen is derived from the signed-in user, so `Home` without a user
/// cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    signed_in_user: Option<Username>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, username: Username) {
        self.signed_in_user = Some(username);
    }

    pub fn log_out(&mut self) {
        self.signed_in_user = None;
    }

    pub fn current_user(&self) -> Option<&Username> {
        self.signed_in_user.as_ref()
    }

    pub fn screen(&self) -> Screen {
        match self.signed_in_user {
            Some(_) => Screen::Home,
            None => Screen::SignIn,
        }
    }

    pub fn greeting(&self) -> String {
        greeting_for(self.current_user())
    }
}
