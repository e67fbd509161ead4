//! Space permission mapping resource.
//!
//! The host-visible identifier is the sorted join of every permission id the
//! mapping created. Read recomputes that identifier from the live summary
//! listing, so state heals itself after out-of-band drift. Delete is
//! best-effort: it removes the intersection of the stored id set and the ids
//! still attached to the group, logging (not failing on) individual errors.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use confluence_client::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::lifecycle::{ManagedResource, ReadOutcome};
use crate::mapping;

/// Declared permission set for one group on one space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacePermissionConfig {
    pub key: String,
    pub operations: Vec<String>,
    pub group: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpacePermissionState {
    /// Composite identifier: sorted permission ids joined with `:`.
    pub id: String,
    pub key: String,
    pub group: String,
    #[serde(default)]
    pub operations: Vec<String>,
    /// `verb:target` to permission id, as last observed.
    #[serde(default)]
    pub operation_ids: BTreeMap<String, String>,
}

pub struct SpacePermissionResource {
    client: Arc<Client>,
}

impl SpacePermissionResource {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ManagedResource for SpacePermissionResource {
    type Desired = SpacePermissionConfig;
    type State = SpacePermissionState;

    fn type_name(&self) -> &'static str {
        "confluence_space_permission"
    }

    async fn create(&self, desired: &SpacePermissionConfig) -> Result<SpacePermissionState> {
        let requests = mapping::expand_operations(&desired.operations, &desired.group)?;
        let requested = requests.len();

        let mut created_ids = Vec::with_capacity(requested);
        let mut operation_ids = BTreeMap::new();
        for request in &requests {
            let response = match self
                .client
                .create_space_permission(&desired.key, request)
                .await
            {
                Ok(response) => response,
                // Fail fast. Nothing is rolled back: permissions created so
                // far exist remotely and the next refresh reconciles them.
                Err(source) => {
                    return Err(ProviderError::PartialApply {
                        created: created_ids.len(),
                        requested,
                        source,
                    });
                }
            };
            let id = response.id.to_string();
            if let Some(operation) = &request.operation {
                operation_ids.insert(format!("{}:{}", operation.key, operation.target), id.clone());
            }
            created_ids.push(id);
        }

        Ok(SpacePermissionState {
            id: mapping::composite_id(&created_ids),
            key: desired.key.clone(),
            group: desired.group.clone(),
            operations: desired.operations.clone(),
            operation_ids,
        })
    }

    /// The listing is authoritative: whatever ids the group holds remotely
    /// become the new composite identifier, replacing the stored one.
    async fn read(&self, prior: &SpacePermissionState) -> Result<ReadOutcome<SpacePermissionState>> {
        let summary = match self.client.get_space_permissions(&prior.key).await {
            Ok(summary) => summary,
            Err(err) if err.is_not_found() => return Ok(ReadOutcome::Gone),
            Err(err) => return Err(err.into()),
        };

        let ids = mapping::permission_ids_for_group(&summary, &prior.group);
        let mut state = prior.clone();
        state.id = mapping::composite_id(&ids);
        state.operation_ids = mapping::operation_ids_for_group(&summary, &prior.group);
        Ok(ReadOutcome::Current(state))
    }

    async fn update(
        &self,
        _prior: &SpacePermissionState,
        _desired: &SpacePermissionConfig,
    ) -> Result<SpacePermissionState> {
        Err(ProviderError::UnsupportedUpdate {
            type_name: self.type_name(),
        })
    }

    async fn delete(&self, state: &SpacePermissionState) -> Result<()> {
        let summary = match self.client.get_space_permissions(&state.key).await {
            Ok(summary) => summary,
            Err(err) if err.is_not_found() => {
                tracing::debug!(space = %state.key, "space already gone, nothing to delete");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let live = mapping::permission_ids_for_group(&summary, &state.group);
        for id in state.id.split(':').filter(|id| !id.is_empty()) {
            if !live.iter().any(|live_id| live_id == id) {
                tracing::debug!(space = %state.key, id, "permission no longer attached, skipping");
                continue;
            }
            if let Err(err) = self.client.delete_space_permission(&state.key, id).await {
                tracing::warn!(
                    space = %state.key,
                    id,
                    error = %err,
                    "failed to delete space permission"
                );
            }
        }
        Ok(())
    }

    /// Passthrough: only the identifier is known at import time; the first
    /// refresh fills in the rest from the listing.
    async fn import(&self, id: &str) -> Result<SpacePermissionState> {
        Ok(SpacePermissionState {
            id: id.to_string(),
            ..Default::default()
        })
    }
}
