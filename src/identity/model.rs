use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::next_timestamp_id;

pub type UserId = i64;

/// A registered account. Created once, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    /// Argon2 PHC string; the plain secret is never stored.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            id: next_timestamp_id(),
            email,
            name,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Projection handed to the session: no secret material.
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// The signed-in user as seen by the rest of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub email: String,
    pub name: String,
}

/// Current session.
///
/// Authentication is derived from the presence of a user, so the two can
/// never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    user: Option<SessionUser>,
}

impl Session {
    pub fn signed_in(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl From<Option<SessionUser>> for Session {
    fn from(user: Option<SessionUser>) -> Self {
        Self { user }
    }
}
