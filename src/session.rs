use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{Context, Result};

use crate::model::{AuthState, UserClaims};
use crate::store::ProfileStore;
use crate::token;

/// The refresh cycle failed and the session has been cleared.
#[derive(Debug, thiserror::Error)]
#[error("session expired (sign in again with `rline login`)")]
pub struct SessionExpired;

/// Shared session handle. Callers of the request client hold a reference to
/// this; there is no ambient singleton.
pub struct Session {
    state: RwLock<AuthState>,
    refresh_gate: Mutex<()>,
    store: ProfileStore,
}

impl Session {
    /// Build a session from the persisted token, if any. A token that no
    /// longer decodes is removed and the session starts logged out.
    pub fn bootstrap(store: ProfileStore) -> Result<Self> {
        let mut state = AuthState::default();
        if let Some(saved) = store.read_token()? {
            match token::decode_claims(&saved) {
                Ok(claims) => {
                    state.token = saved;
                    state.user = Some(claims);
                }
                Err(_) => {
                    store.clear_token().context("remove undecodable token")?;
                }
            }
        }
        Ok(Self {
            state: RwLock::new(state),
            refresh_gate: Mutex::new(()),
            store,
        })
    }

    pub fn token(&self) -> String {
        self.read().token.clone()
    }

    pub fn user(&self) -> Option<UserClaims> {
        self.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.read().token.is_empty()
    }

    /// Replace token and user together and persist the token. Readers never
    /// observe one side updated without the other.
    pub fn set_authenticated(&self, token: String, claims: UserClaims) -> Result<()> {
        let mut state = self.write();
        self.store.set_token(&token).context("persist token")?;
        state.token = token;
        state.user = Some(claims);
        Ok(())
    }

    /// Clear token, user, and the persisted credential. Idempotent.
    pub fn logout(&self) -> Result<()> {
        let mut state = self.write();
        state.token = String::new();
        state.user = None;
        drop(state);
        self.store.clear_token().context("remove persisted token")
    }

    /// Serializes refresh attempts on this session. Holders must re-read the
    /// token after acquisition; see `RemoteClient::refresh_session`.
    pub(crate) fn refresh_gate(&self) -> MutexGuard<'_, ()> {
        self.refresh_gate.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn read(&self) -> RwLockReadGuard<'_, AuthState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, AuthState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "tests/session/bootstrap_tests.rs"]
mod tests;
