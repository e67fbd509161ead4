use serde::{Deserialize, Serialize};

/// A Confluence user group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Group {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub group_type: String,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<GroupLinks>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupLinks {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub base: String,
    #[serde(rename = "webui", default, skip_serializing_if = "String::is_empty")]
    pub web_ui: String,
}
