//! Register/login side effects.
//!
//! Each operation dispatches its start message immediately, then finishes on
//! a tokio task after the configured delay. Argon2 work runs on the blocking
//! pool.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::store::{Action, Store};

use super::forms::{LoginRequest, RegisterRequest};
use super::intent::IdentityMutation;
use super::model::User;
use super::password::SecretHasher;
use super::{INVALID_CREDENTIALS, REGISTRATION_FAILED, USER_EXISTS};

const DECOY_SECRET: &str = "decoy-secret";

#[derive(Clone)]
pub struct IdentityHandler {
    store: Store,
    delay: Duration,
    hasher: SecretHasher,
    /// Hash checked when the email is unknown, so both paths cost one verify.
    decoy: Arc<OnceLock<String>>,
}

impl IdentityHandler {
    pub fn new(store: Store, delay: Duration, hasher: SecretHasher) -> Self {
        Self {
            store,
            delay,
            hasher,
            decoy: Arc::new(OnceLock::new()),
        }
    }

    /// Create an account and sign it in.
    pub fn register(&self, request: RegisterRequest) -> JoinHandle<()> {
        self.store.dispatch(IdentityMutation::RegisterStart);
        let handler = self.clone();
        tokio::spawn(async move { handler.finish_register(request).await })
    }

    pub fn login(&self, request: LoginRequest) -> JoinHandle<()> {
        self.store.dispatch(IdentityMutation::LoginStart);
        let handler = self.clone();
        tokio::spawn(async move { handler.finish_login(request).await })
    }

    pub fn logout(&self) {
        if let Some(user) = self.store.select(|s| s.identity.current_user().cloned()) {
            tracing::info!(user_id = user.id, "Signed out");
        }
        self.store.dispatch(IdentityMutation::Logout);
    }

    pub fn clear_error(&self) {
        self.store.dispatch(IdentityMutation::ClearError);
    }

    async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn email_taken(&self, email: &str) -> bool {
        self.store
            .select(|s| s.identity.find_by_email(email).is_some())
    }

    async fn finish_register(self, request: RegisterRequest) {
        self.wait().await;

        if self.email_taken(&request.email) {
            self.store
                .dispatch(IdentityMutation::RegisterFailure(USER_EXISTS.to_string()));
            return;
        }

        let hasher = self.hasher.clone();
        let secret = request.password;
        let hashed = tokio::task::spawn_blocking(move || hasher.hash(&secret)).await;
        let password_hash = match hashed {
            Ok(Ok(hash)) => hash,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Could not hash secret");
                self.store
                    .dispatch(IdentityMutation::RegisterFailure(REGISTRATION_FAILED.to_string()));
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Hashing task failed");
                self.store
                    .dispatch(IdentityMutation::RegisterFailure(REGISTRATION_FAILED.to_string()));
                return;
            }
        };

        let user = User::new(request.email, request.name, password_hash);
        let session = user.session_user();
        // Another registration may have committed the same email while we hashed.
        self.store.dispatch_with(move |state| {
            if state.identity.find_by_email(&user.email).is_some() {
                return vec![IdentityMutation::RegisterFailure(USER_EXISTS.to_string()).into()];
            }
            tracing::info!(user_id = user.id, "Registered");
            vec![
                Action::from(IdentityMutation::RegisterSuccess(user)),
                Action::from(IdentityMutation::LoginSuccess(session)),
            ]
        });
    }

    async fn finish_login(self, request: LoginRequest) {
        self.wait().await;

        let account = self
            .store
            .select(|s| s.identity.find_by_email(&request.email).cloned());

        let hasher = self.hasher.clone();
        let stored = account.as_ref().map(|a| a.password_hash.clone());
        let decoy = Arc::clone(&self.decoy);
        let secret = request.password;
        let verified = tokio::task::spawn_blocking(move || match stored {
            Some(stored) => hasher.verify(&secret, &stored),
            None => {
                let decoy = decoy.get_or_init(|| hasher.hash(DECOY_SECRET).unwrap_or_default());
                hasher.verify_unknown(&secret, decoy)
            }
        })
        .await
        .unwrap_or(false);

        let account = match account {
            Some(account) if verified => account,
            _ => {
                self.store
                    .dispatch(IdentityMutation::LoginFailure(INVALID_CREDENTIALS.to_string()));
                return;
            }
        };

        tracing::info!(user_id = account.id, "Signed in");
        self.store
            .dispatch(IdentityMutation::LoginSuccess(account.session_user()));
    }
}
