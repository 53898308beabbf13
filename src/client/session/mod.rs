//! Client-side session state.
//!
//! [`SessionContext`] is the single owner of the API client credential, the persisted token
//! and the in-memory [`Session`]. Every transition (restore, login, register, logout) updates
//! all three together so a persisted token never exists without a matching session.

pub mod claims;
pub mod storage;

#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;

use crate::client::{
    api::ApiClient,
    error::{ClaimsError, Error},
    guard::AuthState,
    session::{
        claims::{parse_identity, Identity, TokenIdentity},
        storage::{SessionStorage, DISPLAY_NAME_KEY, TOKEN_KEY},
    },
};

/// Display name used when none was persisted alongside a restored token
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Who is currently using the app
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub display_name: String,
    /// `None` only when a freshly issued token could not be decoded
    pub user_id: Option<i64>,
    pub is_babysitter: bool,
}

pub struct SessionContext<T, S> {
    api: ApiClient<T>,
    storage: S,
    session: Option<Session>,
}

impl<T, S: SessionStorage> SessionContext<T, S> {
    /// Creates an anonymous context, call [`restore`](Self::restore) to pick up a persisted token.
    ///
    /// Any credential already set on `api` is cleared so the context starts consistent.
    pub fn new(mut api: ApiClient<T>, storage: S) -> Self {
        api.set_credential(None);

        Self {
            api,
            storage,
            session: None,
        }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn auth_state(&self) -> AuthState {
        match self.session {
            Some(_) => AuthState::Authenticated,
            None => AuthState::Anonymous,
        }
    }

    /// Rebuild the session from the persisted token on startup.
    ///
    /// A token that cannot be decoded or has expired is discarded rather than reported, the
    /// user simply starts out logged out.
    pub fn restore(&mut self) -> AuthState {
        self.restore_at(Utc::now())
    }

    pub fn restore_at(&mut self, now: DateTime<Utc>) -> AuthState {
        let token = self.storage.get(TOKEN_KEY);

        match parse_identity(token.as_deref()) {
            TokenIdentity::Absent => self.discard(),
            TokenIdentity::Unparseable(err) => {
                tracing::warn!("Discarding persisted token: {}", err);

                self.discard();
            }
            TokenIdentity::Valid(identity) if identity.is_expired_at(now) => {
                tracing::debug!(user_id = identity.user_id, "Discarding expired token");

                self.discard();
            }
            TokenIdentity::Valid(identity) => {
                // Valid implies a non-empty token was read
                let token = token.unwrap_or_default().trim().to_string();
                let display_name = self
                    .storage
                    .get(DISPLAY_NAME_KEY)
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

                tracing::debug!(user_id = identity.user_id, "Restored session");

                self.api.set_credential(Some(token.clone()));
                self.session = Some(Session {
                    token,
                    display_name,
                    user_id: Some(identity.user_id),
                    is_babysitter: identity.is_babysitter.unwrap_or(false),
                });
            }
        }

        self.auth_state()
    }

    /// Start a session from a token returned by `POST /login`.
    ///
    /// An empty token leaves the context anonymous and returns [`ClaimsError::EmptyToken`].
    pub fn login(&mut self, token: String, display_name: String) -> Result<&Session, Error> {
        self.sign_in(token, display_name, false)
    }

    /// Start a session from a token returned by `POST /register`.
    ///
    /// `is_babysitter` is the value submitted in the form and only applies when the token
    /// itself has no role claim.
    pub fn register(
        &mut self,
        token: String,
        display_name: String,
        is_babysitter: bool,
    ) -> Result<&Session, Error> {
        self.sign_in(token, display_name, is_babysitter)
    }

    /// End the session, clearing persisted state and the credential.
    pub fn logout(&mut self) {
        if let Some(session) = &self.session {
            tracing::debug!(user_id = ?session.user_id, "Logging out");
        }

        self.discard();
    }

    fn sign_in(
        &mut self,
        token: String,
        display_name: String,
        is_babysitter: bool,
    ) -> Result<&Session, Error> {
        let identity: Option<Identity> = match parse_identity(Some(&token)) {
            TokenIdentity::Valid(identity) => Some(identity),
            TokenIdentity::Unparseable(err) => {
                // The API accepted the credentials, the session still works until reload
                tracing::warn!("Signed in with a token that could not be decoded: {}", err);
                None
            }
            TokenIdentity::Absent => {
                tracing::warn!("Refusing to sign in without a token");

                self.discard();
                return Err(ClaimsError::EmptyToken.into());
            }
        };

        self.persist(TOKEN_KEY, &token);
        self.persist(DISPLAY_NAME_KEY, &display_name);
        self.api.set_credential(Some(token.clone()));

        tracing::debug!(
            user_id = ?identity.as_ref().map(|identity| identity.user_id),
            "Signed in"
        );

        Ok(self.session.insert(Session {
            token,
            display_name,
            user_id: identity.as_ref().map(|identity| identity.user_id),
            is_babysitter: identity
                .and_then(|identity| identity.is_babysitter)
                .unwrap_or(is_babysitter),
        }))
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(err) = self.storage.set(key, value) {
            tracing::warn!("Session will not survive a reload: {}", err);
        }
    }

    fn discard(&mut self) {
        for key in [TOKEN_KEY, DISPLAY_NAME_KEY] {
            if let Err(err) = self.storage.remove(key) {
                tracing::warn!("Failed to clear persisted session: {}", err);
            }
        }

        self.api.set_credential(None);
        self.session = None;
    }
}
