//! Explicit per-session context: auth token and signed-in user.
//!
//! Created at login, handed to whatever needs it, and cleared on logout.
//! Interested parties subscribe to user changes instead of re-reading it.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug)]
pub struct SessionContext {
    token: Option<String>,
    user: watch::Sender<Option<User>>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        let (user, _) = watch::channel(None);
        Self { token: None, user }
    }

    pub fn login(&mut self, token: impl Into<String>, user: Option<User>) {
        self.token = Some(token.into());
        if let Some(u) = &user {
            info!(user_id = %u.id, "session started");
        }
        self.user.send_replace(user);
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.user.send_replace(None);
        info!("session cleared");
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Value for the `Authorization` header, if signed in.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.user.subscribe()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::anonymous()
    }
}
