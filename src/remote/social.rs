//! Follow relationships.

use anyhow::{Context, Result};

use crate::session::Session;

use super::*;

impl RemoteClient {
    pub fn follow(&self, session: &Session, user_id: &str) -> Result<()> {
        let _ = require_user(session)?;
        let req = ApiRequest::post("/follow").form(&[("userId", user_id)]);
        let resp = self.send(&req, session)?;
        let _ = self.expect_ok(resp, "follow")?;
        Ok(())
    }

    pub fn unfollow(&self, session: &Session, user_id: &str) -> Result<()> {
        let _ = require_user(session)?;
        let req = ApiRequest::post("/unfollow").form(&[("userId", user_id)]);
        let resp = self.send(&req, session)?;
        let _ = self.expect_ok(resp, "unfollow")?;
        Ok(())
    }

    pub fn is_following(&self, session: &Session, user_id: &str) -> Result<bool> {
        let req = ApiRequest::get(format!("/follow/status/{}", user_id));
        let resp = self.send(&req, session)?;
        let out: FollowStatus = self
            .expect_ok(resp, "follow status")?
            .json()
            .context("parse follow status")?;
        Ok(out.is_following)
    }

    /// Counts are public profile data.
    pub fn follow_counts(&self, user_id: &str) -> Result<FollowCounts> {
        let resp = self
            .client
            .get(self.url(&format!("/follow/counts/{}", user_id)))
            .send()
            .context("follow counts")?;
        let out: FollowCounts = self
            .expect_ok(resp, "follow counts")?
            .json()
            .context("parse follow counts")?;
        Ok(out)
    }
}
