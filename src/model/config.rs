use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub version: u32,

    #[serde(default)]
    pub api: Option<ApiConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProfileState {
    pub version: u32,

    /// The bearer token, the one durable client-side credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rline_token: Option<String>,
}
