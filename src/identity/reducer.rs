//! Reducer for the identity slice.

use crate::slice::Reducer;

use super::intent::IdentityMutation;
use super::model::Session;
use super::state::{IdentityState, OperationStatus};
use super::USER_EXISTS;

pub struct IdentityReducer;

impl Reducer for IdentityReducer {
    type State = IdentityState;
    type Mutation = IdentityMutation;

    fn reduce(mut state: Self::State, mutation: Self::Mutation) -> Self::State {
        match mutation {
            IdentityMutation::RegisterStart => {
                state.register = OperationStatus::Pending;
                state.error = None;
            }
            IdentityMutation::RegisterSuccess(user) => {
                if state.find_by_email(&user.email).is_some() {
                    state.register = OperationStatus::Failed;
                    state.error = Some(USER_EXISTS.to_string());
                } else {
                    state.users.push(user);
                    state.register = OperationStatus::Succeeded;
                    state.error = None;
                }
            }
            IdentityMutation::RegisterFailure(message) => {
                state.register = OperationStatus::Failed;
                state.error = Some(message);
            }
            IdentityMutation::LoginStart => {
                state.login = OperationStatus::Pending;
                state.error = None;
            }
            IdentityMutation::LoginSuccess(user) => {
                state.login = OperationStatus::Succeeded;
                state.session = Session::signed_in(user);
                state.error = None;
            }
            IdentityMutation::LoginFailure(message) => {
                state.login = OperationStatus::Failed;
                state.error = Some(message);
            }
            IdentityMutation::Logout => {
                state.session = Session::anonymous();
                state.login = OperationStatus::Idle;
                state.error = None;
            }
            IdentityMutation::ClearError => state.error = None,
        }
        state
    }
}
