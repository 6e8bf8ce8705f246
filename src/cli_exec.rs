use anyhow::Result;

use crate::Commands;

mod engage;
mod feed;
mod identity;

pub(crate) fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Api { command } => identity::handle_api_command(command),
        Commands::Register {
            username,
            email,
            password,
            confirm_password,
        } => identity::register(&username, &email, &password, confirm_password.as_deref()),
        Commands::Login { username, password } => identity::login(&username, &password),
        Commands::Logout => identity::logout(),
        Commands::Whoami { json } => identity::whoami(json),
        Commands::Feed { json } => feed::feed(json),
        Commands::Show { post_id, json } => feed::show(&post_id, json),
        Commands::Publish { content, title } => feed::publish(title.as_deref(), &content),
        Commands::Profile { username, json } => feed::profile(&username, json),
        Commands::Like { post_id } => engage::like(&post_id),
        Commands::Unlike { post_id } => engage::unlike(&post_id),
        Commands::Comment { post_id, content } => engage::comment(&post_id, &content),
        Commands::Follow { user_id } => engage::follow(&user_id),
        Commands::Unfollow { user_id } => engage::unfollow(&user_id),
    }
}
