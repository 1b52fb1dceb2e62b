//! State for the identity slice.

use crate::slice::SliceState;

use super::model::{Session, SessionUser, User};

/// Progress of one identity operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdentityState {
    pub users: Vec<User>,
    pub session: Session,
    pub register: OperationStatus,
    pub login: OperationStatus,
    /// Last domain rejection, kept until explicitly cleared.
    pub error: Option<String>,
}

impl SliceState for IdentityState {}

impl IdentityState {
    /// Initial state from persisted fragments.
    pub fn restore(users: Vec<User>, current: Option<SessionUser>) -> Self {
        Self {
            users,
            session: Session::from(current),
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.session.user()
    }

    pub fn is_loading(&self) -> bool {
        self.register == OperationStatus::Pending || self.login == OperationStatus::Pending
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }
}
