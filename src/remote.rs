use anyhow::{Context, Result};

use crate::model::ApiConfig;
use crate::session::Session;

mod http_client;
pub use self::http_client::ApiRequest;

mod types;
pub use self::types::*;
mod identity;
mod posts;
mod social;

pub struct RemoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(api: ApiConfig) -> Result<Self> {
        // The cookie store carries the HTTP-only refresh cookie the server
        // sets at login.
        let client = reqwest::blocking::Client::builder()
            .user_agent("rline")
            .cookie_store(true)
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: api.base_url,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn require_user(session: &Session) -> Result<crate::model::UserClaims> {
    session
        .user()
        .ok_or_else(|| anyhow::anyhow!("not signed in (run `rline login`)"))
}
