use serde::{Deserialize, Serialize};

use crate::FlexInt;

/// A Confluence space.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Space {
    #[serde(default, skip_serializing_if = "FlexInt::is_unset")]
    pub id: FlexInt,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<SpaceLinks>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpaceLinks {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub base: String,
    #[serde(rename = "webui", default, skip_serializing_if = "String::is_empty")]
    pub web_ui: String,
}
