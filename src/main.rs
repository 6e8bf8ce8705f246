use anyhow::Result;
use clap::Subcommand;

use rline::remote::RemoteClient;
use rline::session::Session;
use rline::store::ProfileStore;

mod cli_exec;
mod cli_runtime;

#[derive(Subcommand)]
enum Commands {
    /// Configure or show the API endpoint
    Api {
        #[command(subcommand)]
        command: ApiCommands,
    },

    /// Create an account
    Register {
        username: String,
        email: String,
        #[arg(long)]
        password: String,
        /// Defaults to the password when omitted
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// Sign in and persist the session token
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Sign out and clear the persisted token
    Logout,

    /// Show the signed-in user
    Whoami {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List the public post feed
    Feed {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single post with its comments
    Show {
        post_id: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Publish a post
    Publish {
        content: String,
        /// Optional post title
        #[arg(short = 't', long)]
        title: Option<String>,
    },

    /// Like a post
    Like { post_id: String },

    /// Remove a like
    Unlike { post_id: String },

    /// Comment on a post
    Comment { post_id: String, content: String },

    /// Follow a user
    Follow { user_id: String },

    /// Unfollow a user
    Unfollow { user_id: String },

    /// Show a user's profile
    Profile {
        username: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ApiCommands {
    /// Show the configured API base URL
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Set the API base URL
    Set { url: String },
}

pub(crate) fn open_profile() -> Result<(ProfileStore, Session)> {
    let store = ProfileStore::open_default()?;
    let session = Session::bootstrap(store.clone())?;
    Ok((store, session))
}

pub(crate) fn require_api(store: &ProfileStore) -> Result<RemoteClient> {
    let cfg = store.read_config()?;
    let Some(api) = cfg.api else {
        anyhow::bail!("no API endpoint configured (run `rline api set <url>`)");
    };
    RemoteClient::new(api)
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}
