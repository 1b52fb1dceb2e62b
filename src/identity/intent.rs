//! Mutations for the identity slice.

use crate::slice::Mutation;

use super::model::{SessionUser, User};

#[derive(Debug, Clone)]
pub enum IdentityMutation {
    RegisterStart,
    /// Append a new account. Rejected at commit if the email is already taken.
    RegisterSuccess(User),
    RegisterFailure(String),

    LoginStart,
    LoginSuccess(SessionUser),
    LoginFailure(String),

    Logout,
    /// Drop the pending error message (the form was left).
    ClearError,
}

impl Mutation for IdentityMutation {}
