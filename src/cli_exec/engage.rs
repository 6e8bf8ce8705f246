use anyhow::Result;

use crate::{open_profile, require_api};

pub(super) fn like(post_id: &str) -> Result<()> {
    let (store, session) = open_profile()?;
    let client = require_api(&store)?;
    client.like_post(&session, post_id)?;
    println!("Liked {}", post_id);
    Ok(())
}

pub(super) fn unlike(post_id: &str) -> Result<()> {
    let (store, session) = open_profile()?;
    let client = require_api(&store)?;
    client.unlike_post(&session, post_id)?;
    println!("Unliked {}", post_id);
    Ok(())
}

pub(super) fn comment(post_id: &str, content: &str) -> Result<()> {
    let (store, session) = open_profile()?;
    let client = require_api(&store)?;
    client.comment(&session, post_id, content)?;
    println!("Comment added to {}", post_id);
    Ok(())
}

pub(super) fn follow(user_id: &str) -> Result<()> {
    let (store, session) = open_profile()?;
    let client = require_api(&store)?;
    client.follow(&session, user_id)?;
    println!("Following {}", user_id);
    Ok(())
}

pub(super) fn unfollow(user_id: &str) -> Result<()> {
    let (store, session) = open_profile()?;
    let client = require_api(&store)?;
    client.unfollow(&session, user_id)?;
    println!("Unfollowed {}", user_id);
    Ok(())
}
