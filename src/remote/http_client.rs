//! Authenticated-request pipeline: attach the bearer token, detect 401/403,
//! run one coalesced refresh cycle, retry the original request once, and
//! clear the session when the refresh itself fails.

use anyhow::{Context, Result};
use reqwest::blocking::{RequestBuilder, Response};
use reqwest::{Method, StatusCode};

use crate::session::{Session, SessionExpired};
use crate::token;

use super::RemoteClient;

/// A caller's request, kept long enough to retry once after a refresh.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    body: RequestBody,
}

#[derive(Clone, Debug)]
enum RequestBody {
    Empty,
    Form(Vec<(String, String)>),
    Json(serde_json::Value),
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn form(mut self, fields: &[(&str, &str)]) -> Self {
        self.body = RequestBody::Form(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }

    fn build(
        &self,
        client: &reqwest::blocking::Client,
        base_url: &str,
        token: &str,
    ) -> RequestBuilder {
        let mut rb = client.request(self.method.clone(), format!("{}{}", base_url, self.path));
        for (name, value) in &self.headers {
            // The bearer header belongs to the pipeline; caller headers win
            // for every other key.
            if name.eq_ignore_ascii_case("authorization") {
                continue;
            }
            rb = rb.header(name.as_str(), value.as_str());
        }
        rb = rb.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
        match &self.body {
            RequestBody::Empty => rb,
            RequestBody::Form(fields) => rb.form(fields),
            RequestBody::Json(value) => rb.json(value),
        }
    }
}

pub(super) fn auth_rejected(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

/// Server error bodies carry a `message` (sometimes `error`) field.
pub(super) fn api_message(v: &serde_json::Value) -> Option<String> {
    for key in ["message", "error"] {
        if let Some(s) = v.get(key).and_then(|x| x.as_str()) {
            return Some(s.to_string());
        }
    }
    None
}

impl RemoteClient {
    /// Issue `req` with the session's bearer token. On 401/403 the session is
    /// refreshed once and the request retried once; the retry's response is
    /// returned whatever its status. Only failure of the refresh step itself
    /// is an error, and it leaves the session logged out.
    pub fn send(&self, req: &ApiRequest, session: &Session) -> Result<Response> {
        let token = session.token();
        let resp = req
            .build(&self.client, &self.base_url, &token)
            .send()
            .with_context(|| format!("{} {}", req.method, req.path))?;

        if !auth_rejected(resp.status()) {
            return Ok(resp);
        }

        let fresh = self.refresh_session(session, &token)?;
        req.build(&self.client, &self.base_url, &fresh)
            .send()
            .with_context(|| format!("retry {} {}", req.method, req.path))
    }

    /// One refresh cycle, coalesced per session: the caller that holds the
    /// gate and still sees `stale` as the current token performs the network
    /// refresh; concurrent callers reuse the replacement token instead of
    /// issuing their own refresh.
    fn refresh_session(&self, session: &Session, stale: &str) -> Result<String> {
        let _gate = session.refresh_gate();

        let current = session.token();
        if current != stale && !current.is_empty() {
            return Ok(current);
        }

        let refreshed = self.call_refresh().and_then(|tok| {
            let claims = token::decode_claims(&tok).context("decode refreshed token")?;
            Ok((tok, claims))
        });

        match refreshed {
            Ok((tok, claims)) => {
                session.set_authenticated(tok.clone(), claims)?;
                Ok(tok)
            }
            Err(_) => {
                session
                    .logout()
                    .context("clear session after failed refresh")?;
                Err(SessionExpired.into())
            }
        }
    }

    /// `POST /refresh` rides on the HTTP-only refresh cookie; no bearer
    /// header is sent.
    fn call_refresh(&self) -> Result<String> {
        let resp = self
            .client
            .post(self.url("/refresh"))
            .send()
            .context("refresh")?
            .error_for_status()
            .context("refresh status")?;
        let out: super::TokenResponse = resp.json().context("parse refresh response")?;
        Ok(out.token)
    }

    /// Map a non-2xx response from an API operation to an error carrying the
    /// server's message when it sent one.
    pub(super) fn expect_ok(&self, resp: Response, label: &str) -> Result<Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status();
        let message = resp
            .json::<serde_json::Value>()
            .ok()
            .as_ref()
            .and_then(api_message);
        match message {
            Some(msg) => anyhow::bail!("{}: {}", label, msg),
            None => anyhow::bail!("{} failed with status {}", label, status),
        }
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
#[path = "../tests/remote/http_client/request_tests.rs"]
mod tests;
