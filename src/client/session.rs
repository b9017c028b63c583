/**
 * Client Session
 *
 * Holds the token and redacted user returned by register/login, and keeps
 * them in a JSON file so a restart stays signed in. A session file that
 * cannot be parsed is deleted and treated as signed out.
 */

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::client::error::ClientError;
use crate::client::views::{self, Access, View};
use crate::shared::{AuthResponse, PublicUser, Role};

/// Signed-in state on the client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSession {
    token: Option<String>,
    user: Option<PublicUser>,
}

impl ClientSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signed in only when both the token and the user are known
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&PublicUser> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        if self.is_authenticated() {
            self.user.as_ref().map(|u| u.role)
        } else {
            None
        }
    }

    /// `Bearer <token>` when signed in
    pub fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }

    /// Store the result of a successful register or login
    pub fn sign_in(&mut self, response: AuthResponse) {
        self.token = Some(response.token);
        self.user = Some(response.user);
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// Gate a view for the current session
    pub fn resolve(&self, view: View) -> Access {
        views::resolve(self.role(), view)
    }

    /// Load a saved session
    ///
    /// A missing file gives a signed-out session. An unreadable or corrupt
    /// file is removed and also gives a signed-out session.
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("Failed to read session file {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<ClientSession>(&contents) {
            Ok(session) if session.is_authenticated() => session,
            Ok(_) => Self::default(),
            Err(e) => {
                tracing::warn!("Discarding corrupt session file {}: {}", path.display(), e);
                if let Err(e) = std::fs::remove_file(path) {
                    tracing::warn!("Failed to remove session file: {}", e);
                }
                Self::default()
            }
        }
    }

    /// Write the session; a signed-out session removes the file
    pub fn save(&self, path: &Path) -> Result<(), ClientError> {
        if !self.is_authenticated() {
            return match std::fs::remove_file(path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            };
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
