use anyhow::{Context, Result};

use crate::{ApiCommands, open_profile, require_api};

pub(super) fn handle_api_command(command: ApiCommands) -> Result<()> {
    let store = rline::store::ProfileStore::open_default()?;
    match command {
        ApiCommands::Show { json } => {
            let cfg = store.read_config()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&cfg.api).context("serialize api json")?
                );
            } else if let Some(api) = cfg.api {
                println!("url: {}", api.base_url);
            } else {
                println!("No API endpoint configured");
            }
        }
        ApiCommands::Set { url } => {
            let mut cfg = store.read_config()?;
            cfg.api = Some(rline::model::ApiConfig {
                base_url: url.trim_end_matches('/').to_string(),
            });
            store.write_config(&cfg)?;
            println!("API endpoint configured");
        }
    }
    Ok(())
}

pub(super) fn register(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: Option<&str>,
) -> Result<()> {
    let (store, _session) = open_profile()?;
    let client = require_api(&store)?;
    let confirmed = confirm_password.unwrap_or(password);
    client.register(username, password, confirmed, email)?;
    println!("Account created; sign in with `rline login {}`", username);
    Ok(())
}

pub(super) fn login(username: &str, password: &str) -> Result<()> {
    let (store, session) = open_profile()?;
    let client = require_api(&store)?;
    let claims = client.login(&session, username, password)?;
    println!("Signed in as {}", claims.username);
    Ok(())
}

pub(super) fn logout() -> Result<()> {
    let (_store, session) = open_profile()?;
    session.logout()?;
    println!("Signed out");
    Ok(())
}

pub(super) fn whoami(json: bool) -> Result<()> {
    let (_store, session) = open_profile()?;
    let user = session.user();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&user).context("serialize whoami json")?
        );
        return Ok(());
    }
    match user {
        Some(user) => {
            println!("user: {}", user.username);
            println!("id: {}", user.id);
            if let Some(email) = user.email {
                println!("email: {}", email);
            }
            println!("likes: {}", user.likes.len());
        }
        None => println!("Not signed in"),
    }
    Ok(())
}
