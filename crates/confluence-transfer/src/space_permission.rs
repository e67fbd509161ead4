use serde::{Deserialize, Serialize};

use crate::FlexInt;

/// One granted permission, as sent to and returned by the creation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpacePermission {
    #[serde(default, skip_serializing_if = "FlexInt::is_unset")]
    pub id: FlexInt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<SpacePermissionLinks>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub subject_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub identifier: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpacePermissionLinks {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub base: String,
    #[serde(rename = "webui", default, skip_serializing_if = "String::is_empty")]
    pub web_ui: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub context: String,
    #[serde(rename = "self", default, skip_serializing_if = "String::is_empty")]
    pub self_link: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub collection: String,
}

/// The `?expand=permissions` view of a space: every permission currently
/// attached, with its subjects. Used only for reconciliation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarySpacePermissions {
    #[serde(default)]
    pub id: FlexInt,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub space_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub permissions: Vec<SavedPermission>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPermission {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub subjects: SavedPermissionSubjects,
    #[serde(default)]
    pub operation: SavedPermissionOperation,
    #[serde(default)]
    pub anonymous_access: bool,
    #[serde(default)]
    pub unlicensed_access: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedPermissionSubjects {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SavedPermissionUsers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<SavedPermissionGroup>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedPermissionUsers {
    #[serde(default)]
    pub results: Vec<SavedPermissionUser>,
    #[serde(default)]
    pub size: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPermissionUser {
    #[serde(rename = "type", default)]
    pub subject_type: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedPermissionGroup {
    #[serde(default)]
    pub results: Vec<SavedPermissionGroupResult>,
    #[serde(default)]
    pub size: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedPermissionGroupResult {
    #[serde(rename = "type", default)]
    pub subject_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedPermissionOperation {
    #[serde(default)]
    pub operation: String,
    #[serde(rename = "targetType", default)]
    pub target_type: String,
}
