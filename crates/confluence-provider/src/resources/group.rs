//! Group resource.

use std::sync::Arc;

use async_trait::async_trait;
use confluence_client::Client;
use confluence_transfer::Group;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lifecycle::{ManagedResource, ReadOutcome};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupState {
    pub id: String,
    pub name: String,
}

pub struct GroupResource {
    client: Arc<Client>,
}

impl GroupResource {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn request_body(id: &str, name: &str) -> Group {
        Group {
            id: id.to_string(),
            name: name.to_string(),
            group_type: "group".to_string(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl ManagedResource for GroupResource {
    type Desired = GroupConfig;
    type State = GroupState;

    fn type_name(&self) -> &'static str {
        "confluence_group"
    }

    async fn create(&self, desired: &GroupConfig) -> Result<GroupState> {
        let response = self
            .client
            .create_group(&Self::request_body("", &desired.name))
            .await?;
        Ok(GroupState {
            id: response.id,
            name: desired.name.clone(),
        })
    }

    async fn read(&self, prior: &GroupState) -> Result<ReadOutcome<GroupState>> {
        let response = match self.client.get_group(&prior.id).await {
            Ok(response) => response,
            Err(err) if err.is_not_found() => return Ok(ReadOutcome::Gone),
            Err(err) => return Err(err.into()),
        };
        Ok(ReadOutcome::Current(GroupState {
            id: prior.id.clone(),
            name: response.name,
        }))
    }

    /// Emulated: the API has no group update endpoint, so the group is
    /// deleted and recreated under a new id. Not atomic.
    async fn update(&self, prior: &GroupState, desired: &GroupConfig) -> Result<GroupState> {
        let response = self
            .client
            .update_group(&Self::request_body(&prior.id, &desired.name))
            .await?;
        Ok(GroupState {
            id: response.id,
            name: desired.name.clone(),
        })
    }

    async fn delete(&self, state: &GroupState) -> Result<()> {
        self.client.delete_group(&state.id).await?;
        Ok(())
    }

    async fn import(&self, id: &str) -> Result<GroupState> {
        let response = self.client.get_group(id).await?;
        Ok(GroupState {
            id: id.to_string(),
            name: response.name,
        })
    }
}
