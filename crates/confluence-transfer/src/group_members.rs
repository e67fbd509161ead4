use serde::{Deserialize, Serialize};

/// Paged membership listing for a group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupMembersResponse {
    #[serde(rename = "results", default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub start: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "totalSize", default)]
    pub total_size: i64,
}

/// Request body for adding a user to a group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountIdRecord {
    #[serde(rename = "accountId", default, skip_serializing_if = "String::is_empty")]
    pub account_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "type", default)]
    pub member_type: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub user_key: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub account_type: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub public_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub time_zone: String,
    #[serde(default)]
    pub is_external_collaborator: bool,
    #[serde(default)]
    pub profile_picture: Option<ProfilePicture>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePicture {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub width: i64,
    #[serde(default)]
    pub height: i64,
    #[serde(default)]
    pub is_default: bool,
}
