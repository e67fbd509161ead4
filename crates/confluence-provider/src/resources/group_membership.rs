//! Group membership resource.

use std::sync::Arc;

use async_trait::async_trait;
use confluence_client::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::lifecycle::{ManagedResource, ReadOutcome};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMembershipConfig {
    pub group_id: String,
    pub account_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupMembershipState {
    /// Group id and account id concatenated.
    pub id: String,
    pub group_id: String,
    pub account_id: String,
}

pub struct GroupMembershipResource {
    client: Arc<Client>,
}

impl GroupMembershipResource {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn membership_id(group_id: &str, account_id: &str) -> String {
        format!("{group_id}{account_id}")
    }
}

#[async_trait]
impl ManagedResource for GroupMembershipResource {
    type Desired = GroupMembershipConfig;
    type State = GroupMembershipState;

    fn type_name(&self) -> &'static str {
        "confluence_group_membership"
    }

    async fn create(&self, desired: &GroupMembershipConfig) -> Result<GroupMembershipState> {
        self.client
            .add_group_member(&desired.group_id, &desired.account_id)
            .await?;
        Ok(GroupMembershipState {
            id: Self::membership_id(&desired.group_id, &desired.account_id),
            group_id: desired.group_id.clone(),
            account_id: desired.account_id.clone(),
        })
    }

    async fn read(&self, prior: &GroupMembershipState) -> Result<ReadOutcome<GroupMembershipState>> {
        let response = match self.client.get_group_members(&prior.group_id).await {
            Ok(response) => response,
            Err(err) if err.is_not_found() => return Ok(ReadOutcome::Gone),
            Err(err) => return Err(err.into()),
        };

        let present = response
            .members
            .iter()
            .any(|member| member.account_id == prior.account_id);
        if !present {
            return Ok(ReadOutcome::Gone);
        }

        Ok(ReadOutcome::Current(GroupMembershipState {
            id: Self::membership_id(&prior.group_id, &prior.account_id),
            group_id: prior.group_id.clone(),
            account_id: prior.account_id.clone(),
        }))
    }

    async fn update(
        &self,
        _prior: &GroupMembershipState,
        _desired: &GroupMembershipConfig,
    ) -> Result<GroupMembershipState> {
        Err(ProviderError::UnsupportedUpdate {
            type_name: self.type_name(),
        })
    }

    async fn delete(&self, state: &GroupMembershipState) -> Result<()> {
        self.client.remove_group_member(&state.group_id).await?;
        Ok(())
    }

    /// Passthrough: the concatenated id carries no separator, so the parts
    /// cannot be recovered here; the host supplies them from configuration.
    async fn import(&self, id: &str) -> Result<GroupMembershipState> {
        Ok(GroupMembershipState {
            id: id.to_string(),
            ..Default::default()
        })
    }
}
