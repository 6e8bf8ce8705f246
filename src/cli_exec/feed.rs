use anyhow::{Context, Result};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use rline::remote::Post;

use crate::{open_profile, require_api};

pub(super) fn feed(json: bool) -> Result<()> {
    let (store, _session) = open_profile()?;
    let client = require_api(&store)?;
    let posts = client.list_posts()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&posts).context("serialize feed json")?
        );
        return Ok(());
    }

    if posts.is_empty() {
        println!("No posts yet");
        return Ok(());
    }
    for post in posts {
        print_post_line(&post);
    }
    Ok(())
}

pub(super) fn show(post_id: &str, json: bool) -> Result<()> {
    let (store, _session) = open_profile()?;
    let client = require_api(&store)?;
    let post = client.get_post(post_id)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&post).context("serialize post json")?
        );
        return Ok(());
    }

    print_post_line(&post);
    if !post.content.is_empty() {
        println!();
        println!("{}", post.content);
    }
    if !post.comments.is_empty() {
        println!();
        println!("comments:");
        for comment in &post.comments {
            println!(
                "  {} ({}): {}",
                comment.author.username,
                render_timestamp(&comment.created_at),
                comment.content
            );
        }
    }
    Ok(())
}

pub(super) fn publish(title: Option<&str>, content: &str) -> Result<()> {
    let (store, session) = open_profile()?;
    let client = require_api(&store)?;
    client.create_post(&session, title.unwrap_or_default(), content)?;
    println!("Post published");
    Ok(())
}

pub(super) fn profile(username: &str, json: bool) -> Result<()> {
    let (store, _session) = open_profile()?;
    let client = require_api(&store)?;
    let user = client.user_by_username(username)?;
    let counts = client.follow_counts(&user.id)?;

    if json {
        let out = serde_json::json!({ "user": user, "follows": counts });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("serialize profile json")?
        );
        return Ok(());
    }

    println!("user: {}", user.username);
    println!("id: {}", user.id);
    if let Some(email) = &user.email {
        println!("email: {}", email);
    }
    println!("followers: {}", counts.followers);
    println!("following: {}", counts.following);
    Ok(())
}

fn print_post_line(post: &Post) {
    let title = post.title.as_deref().filter(|t| !t.is_empty());
    println!(
        "{}  {}  {}  ({} likes, {} comments)",
        post.id,
        render_timestamp(&post.created_at),
        title.unwrap_or(&post.content),
        post.likes,
        post.comments.len()
    );
    println!("  by {}", post.author.username);
}

/// Server timestamps are RFC 3339; anything else is shown as-is.
fn render_timestamp(raw: &str) -> String {
    match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(ts) => format!("{} {:02}:{:02}", ts.date(), ts.hour(), ts.minute()),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
#[path = "../tests/cli_exec/feed_tests.rs"]
mod tests;
