//! Post feed, publishing, likes, and comments.

use anyhow::{Context, Result};

use crate::session::Session;

use super::*;

impl RemoteClient {
    /// `GET /posts` is public; no bearer token involved.
    pub fn list_posts(&self) -> Result<Vec<Post>> {
        let resp = self
            .client
            .get(self.url("/posts"))
            .send()
            .context("list posts")?;
        let posts: Vec<Post> = self
            .expect_ok(resp, "list posts")?
            .json()
            .context("parse posts")?;
        Ok(posts)
    }

    pub fn get_post(&self, post_id: &str) -> Result<Post> {
        let resp = self
            .client
            .post(self.url("/post"))
            .form(&[("postId", post_id)])
            .send()
            .context("get post")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("post {} not found", post_id);
        }

        let out: PostEnvelope = self
            .expect_ok(resp, "get post")?
            .json()
            .context("parse post")?;
        Ok(out.post)
    }

    pub fn create_post(&self, session: &Session, title: &str, content: &str) -> Result<()> {
        let user = require_user(session)?;
        let req = ApiRequest::post("/posts").form(&[
            ("title", title),
            ("content", content),
            ("userId", &user.id),
        ]);
        let resp = self.send(&req, session)?;
        let _ = self.expect_ok(resp, "create post")?;
        Ok(())
    }

    pub fn like_post(&self, session: &Session, post_id: &str) -> Result<()> {
        let user = require_user(session)?;
        let req =
            ApiRequest::post("/posts/like").form(&[("userId", &user.id), ("postId", post_id)]);
        let resp = self.send(&req, session)?;
        let _ = self.expect_ok(resp, "like post")?;
        Ok(())
    }

    /// The like id comes from the signed-in token's claims, the client's only
    /// view of its own likes.
    pub fn unlike_post(&self, session: &Session, post_id: &str) -> Result<()> {
        let user = require_user(session)?;
        let like = user
            .likes
            .iter()
            .find(|l| l.post_id == post_id)
            .ok_or_else(|| anyhow::anyhow!("no recorded like for post {}", post_id))?;
        let req = ApiRequest::post("/posts/dislike").form(&[
            ("userId", &user.id),
            ("postId", post_id),
            ("likeId", &like.id),
        ]);
        let resp = self.send(&req, session)?;
        let _ = self.expect_ok(resp, "unlike post")?;
        Ok(())
    }

    pub fn comment(&self, session: &Session, post_id: &str, content: &str) -> Result<()> {
        let user = require_user(session)?;
        let req = ApiRequest::post("/comment").form(&[
            ("userId", &user.id),
            ("postId", post_id),
            ("content", content),
        ]);
        let resp = self.send(&req, session)?;
        let _ = self.expect_ok(resp, "comment")?;
        Ok(())
    }
}
