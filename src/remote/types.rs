//! DTOs for rline API requests/responses.

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Post {
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    pub content: String,
    pub author: Author,

    #[serde(rename = "createdAt")]
    pub created_at: String,

    #[serde(default, rename = "postStatus")]
    pub post_status: Option<String>,

    #[serde(default)]
    pub likes: i64,

    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Author {
    pub username: String,

    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,

    #[serde(rename = "createdAt")]
    pub created_at: String,

    pub author: Author,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub id: String,
    pub username: String,

    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FollowCounts {
    #[serde(rename = "followersCount")]
    pub followers: i64,

    #[serde(rename = "followingCount")]
    pub following: i64,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct TokenResponse {
    pub(super) token: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct PostEnvelope {
    pub(super) post: Post,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct ProfileEnvelope {
    pub(super) user: Profile,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct FollowStatus {
    #[serde(rename = "isFollowing")]
    pub(super) is_following: bool,
}
