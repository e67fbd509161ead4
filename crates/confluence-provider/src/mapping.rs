//! Space permission mapping.
//!
//! Expands declared `verb:target` operation strings into individual
//! permission creation requests for one group, and reconciles the remote
//! summary listing back into the composite identifier the host tracks.

use std::collections::BTreeMap;

use confluence_transfer::{Operation, SpacePermission, Subject, SummarySpacePermissions};

use crate::error::{ProviderError, Result};

/// Permissions the API accepts. Not every verb applies to every target, so
/// membership is checked against this table rather than recombining parts.
pub const VALID_PERMISSIONS: &[&str] = &[
    "create:page",
    "create:blogpost",
    "create:comment",
    "create:attachment",
    "read:space",
    "delete:space",
    "delete:page",
    "delete:blogpost",
    "delete:comment",
    "delete:attachment",
    "export:space",
    "administer:space",
    "archive:page",
    "restrict_content:space",
];

const READ_SPACE: &str = "read:space";

pub fn is_valid_permission(operation: &str) -> bool {
    VALID_PERMISSIONS.contains(&operation)
}

/// Validate and expand operation strings into creation requests for `group`.
///
/// `read:space` is moved to the front when it appears alongside other
/// operations: the API treats read as the base permission, and granting
/// others before it behaves unreliably. The relative order of everything
/// else is preserved. Validation happens before anything is reordered, so a
/// bad entry fails the whole set with no side effects.
pub fn expand_operations(operations: &[String], group: &str) -> Result<Vec<SpacePermission>> {
    for operation in operations {
        parse_operation(operation)?;
        if !is_valid_permission(operation) {
            return Err(ProviderError::UnknownOperation(operation.clone()));
        }
    }

    let ordered = read_space_first(operations);
    Ok(ordered
        .iter()
        .map(|operation| {
            // Validated above, so the split cannot fail here.
            let (key, target) = operation.split_once(':').unwrap_or_default();
            SpacePermission {
                subject: Some(Subject {
                    subject_type: "group".to_string(),
                    identifier: group.to_string(),
                }),
                operation: Some(Operation {
                    key: key.to_string(),
                    target: target.to_string(),
                }),
                ..Default::default()
            }
        })
        .collect())
}

fn parse_operation(operation: &str) -> Result<(&str, &str)> {
    let mut parts = operation.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(target), None) if !key.is_empty() && !target.is_empty() => {
            Ok((key, target))
        }
        _ => Err(ProviderError::InvalidOperationFormat(operation.to_string())),
    }
}

fn read_space_first(operations: &[String]) -> Vec<String> {
    let needs_reorder = operations.len() > 1
        && operations[0] != READ_SPACE
        && operations.iter().any(|operation| operation == READ_SPACE);
    if !needs_reorder {
        return operations.to_vec();
    }

    let mut reordered = Vec::with_capacity(operations.len());
    reordered.push(READ_SPACE.to_string());
    reordered.extend(
        operations
            .iter()
            .filter(|operation| *operation != READ_SPACE)
            .cloned(),
    );
    reordered
}

/// Join permission ids into the stable host-visible identifier.
///
/// Ids sort as strings, not numerically, so the identifier is reproducible
/// from any creation order; `"10"` sorts before `"9"`.
pub fn composite_id(ids: &[String]) -> String {
    let mut ids = ids.to_vec();
    ids.sort();
    ids.join(":")
}

/// Ids of every listed permission granted to `group`.
pub fn permission_ids_for_group(summary: &SummarySpacePermissions, group: &str) -> Vec<String> {
    let mut ids = Vec::new();
    for permission in &summary.permissions {
        let Some(groups) = &permission.subjects.group else {
            continue;
        };
        if groups.results.iter().any(|entry| entry.name == group) {
            ids.push(permission.id.to_string());
        }
    }
    ids
}

/// Map of `verb:target` to permission id for `group`, covering the same
/// listing entries as [`permission_ids_for_group`].
pub fn operation_ids_for_group(
    summary: &SummarySpacePermissions,
    group: &str,
) -> BTreeMap<String, String> {
    let mut operation_ids = BTreeMap::new();
    for permission in &summary.permissions {
        let Some(groups) = &permission.subjects.group else {
            continue;
        };
        if groups.results.iter().any(|entry| entry.name == group) {
            let key = format!(
                "{}:{}",
                permission.operation.operation, permission.operation.target_type
            );
            operation_ids.insert(key, permission.id.to_string());
        }
    }
    operation_ids
}
