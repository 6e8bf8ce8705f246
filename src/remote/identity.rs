//! Registration, sign-in, and account lookup.

use anyhow::{Context, Result};

use crate::model::UserClaims;
use crate::session::Session;
use crate::token;

use super::*;

impl RemoteClient {
    /// `POST /login` with form credentials. On success the session is
    /// updated and the token persisted.
    pub fn login(&self, session: &Session, username: &str, password: &str) -> Result<UserClaims> {
        let resp = self
            .client
            .post(self.url("/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .context("login")?;

        let v: serde_json::Value = resp.json().context("parse login response")?;
        let Some(tok) = v.get("token").and_then(|x| x.as_str()) else {
            anyhow::bail!(login_failure_message(&v));
        };

        let claims = token::decode_claims(tok).context("decode login token")?;
        session.set_authenticated(tok.to_string(), claims.clone())?;
        Ok(claims)
    }

    pub fn register(
        &self,
        username: &str,
        password: &str,
        confirmed_password: &str,
        email: &str,
    ) -> Result<()> {
        let resp = self
            .client
            .post(self.url("/register"))
            .form(&[
                ("username", username),
                ("password", password),
                ("confirmedPassword", confirmed_password),
                ("email", email),
            ])
            .send()
            .context("register")?;

        let v: serde_json::Value = resp.json().context("parse register response")?;
        if v.get("pass").and_then(|x| x.as_bool()).unwrap_or(false) {
            return Ok(());
        }
        anyhow::bail!(register_failure_message(&v))
    }

    pub fn user_by_username(&self, username: &str) -> Result<Profile> {
        let resp = self
            .client
            .get(self.url(&format!("/users/username/{}", username)))
            .send()
            .context("look up user")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("user {} not found", username);
        }

        let out: ProfileEnvelope = self
            .expect_ok(resp, "look up user")?
            .json()
            .context("parse user")?;
        Ok(out.user)
    }
}

fn login_failure_message(v: &serde_json::Value) -> String {
    http_client::api_message(v).unwrap_or_else(|| "login rejected".to_string())
}

fn register_failure_message(v: &serde_json::Value) -> String {
    http_client::api_message(v).unwrap_or_else(|| "registration rejected".to_string())
}

#[cfg(test)]
#[path = "../tests/remote/identity/failure_message_tests.rs"]
mod tests;
