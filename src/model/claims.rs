use serde::{Deserialize, Serialize};

/// User claims decoded from the bearer token payload. The token is the only
/// source of truth for these; they are never edited independently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    pub id: String,
    pub username: String,

    #[serde(default)]
    pub email: Option<String>,

    // The server names this claim `like`.
    #[serde(default, rename = "like")]
    pub likes: Vec<LikeClaim>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeClaim {
    pub id: String,

    #[serde(rename = "postId")]
    pub post_id: String,
}

/// In-memory session state. Invariant: when `token` is non-empty, `user`
/// holds the claims decoded from it; the two fields change together.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: String,
    pub user: Option<UserClaims>,
}
