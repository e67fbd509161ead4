//! Provider bootstrap: configuration in, registered adapters out.

use std::sync::Arc;

use confluence_client::{Client, ClientConfig};

use crate::datasource::{GroupDataSource, GroupMembershipDataSource};
use crate::registry::ResourceRegistry;
use crate::resources::{
    GroupMembershipResource, GroupResource, SpacePermissionResource, SpaceResource,
};

/// Wires one [`Client`] into every resource adapter and data source.
///
/// The client is constructed once and shared read-only; adapters receive it
/// by explicit injection rather than through any dynamic casting.
pub struct ConfluenceProvider {
    client: Arc<Client>,
}

impl ConfluenceProvider {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Arc::new(Client::new(config)),
        }
    }

    /// Bootstrap from `CONFLUENCE_*` env vars or a `confluence.toml` file.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(&ClientConfig::load()?))
    }

    pub fn client(&self) -> Arc<Client> {
        self.client.clone()
    }

    pub fn registry(&self) -> ResourceRegistry {
        let mut registry = ResourceRegistry::new();
        registry.register(GroupResource::new(self.client.clone()));
        registry.register(SpaceResource::new(self.client.clone()));
        registry.register(SpacePermissionResource::new(self.client.clone()));
        registry.register(GroupMembershipResource::new(self.client.clone()));
        registry.register_data_source(GroupMembershipDataSource::new(self.client.clone()));
        registry.register_data_source(GroupDataSource::new(self.client.clone()));
        registry
    }
}
