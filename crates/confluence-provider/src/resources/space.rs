//! Space resource.

use std::sync::Arc;

use async_trait::async_trait;
use confluence_client::Client;
use confluence_transfer::Space;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lifecycle::{ManagedResource, ReadOutcome};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceConfig {
    pub key: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpaceState {
    pub id: String,
    pub key: String,
    pub name: String,
    /// User-facing URL, resolved against the public site.
    #[serde(default)]
    pub url: String,
}

pub struct SpaceResource {
    client: Arc<Client>,
}

impl SpaceResource {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn state_from(&self, response: Space) -> SpaceState {
        let url = response
            .links
            .as_ref()
            .filter(|links| !links.web_ui.is_empty())
            .map(|links| format!("{}{}", self.client.public_base_url(), links.web_ui))
            .unwrap_or_default();
        SpaceState {
            id: response.id.to_string(),
            key: response.key,
            name: response.name,
            url,
        }
    }
}

#[async_trait]
impl ManagedResource for SpaceResource {
    type Desired = SpaceConfig;
    type State = SpaceState;

    fn type_name(&self) -> &'static str {
        "confluence_space"
    }

    async fn create(&self, desired: &SpaceConfig) -> Result<SpaceState> {
        let body = Space {
            key: desired.key.clone(),
            name: desired.name.clone(),
            ..Default::default()
        };
        let response = self.client.create_space(&body).await?;
        Ok(self.state_from(response))
    }

    async fn read(&self, prior: &SpaceState) -> Result<ReadOutcome<SpaceState>> {
        let response = match self.client.get_space(&prior.key).await {
            Ok(response) => response,
            Err(err) if err.is_not_found() => return Ok(ReadOutcome::Gone),
            Err(err) => return Err(err.into()),
        };
        Ok(ReadOutcome::Current(self.state_from(response)))
    }

    async fn update(&self, _prior: &SpaceState, desired: &SpaceConfig) -> Result<SpaceState> {
        let body = Space {
            key: desired.key.clone(),
            name: desired.name.clone(),
            ..Default::default()
        };
        let response = self.client.update_space(&body).await?;
        Ok(self.state_from(response))
    }

    async fn delete(&self, state: &SpaceState) -> Result<()> {
        self.client.delete_space(&state.key).await?;
        Ok(())
    }

    async fn import(&self, key: &str) -> Result<SpaceState> {
        let response = self.client.get_space(key).await?;
        Ok(self.state_from(response))
    }
}
