//! Read-only lookups.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use confluence_client::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::lifecycle::DataSource;

fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Members of a group, keyed by email.
pub struct GroupMembershipDataSource {
    client: Arc<Client>,
}

impl GroupMembershipDataSource {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GroupMembershipQuery {
    group_id: String,
}

#[async_trait]
impl DataSource for GroupMembershipDataSource {
    fn type_name(&self) -> &'static str {
        "confluence_group_membership"
    }

    async fn read(&self, config: Value) -> Result<Value> {
        let query: GroupMembershipQuery = serde_json::from_value(config)?;
        let response = self.client.get_group_members(&query.group_id).await?;

        let mut members = BTreeMap::new();
        for member in response.members {
            members.insert(member.email, member.account_id);
        }

        tracing::trace!(group_id = %query.group_id, count = members.len(), "read group members");
        Ok(json!({
            "id": sha256_hex(&query.group_id),
            "group_id": query.group_id,
            "group_members": members,
        }))
    }
}

/// Group lookup by name.
pub struct GroupDataSource {
    client: Arc<Client>,
}

impl GroupDataSource {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GroupQuery {
    name: String,
}

#[async_trait]
impl DataSource for GroupDataSource {
    fn type_name(&self) -> &'static str {
        "confluence_group"
    }

    async fn read(&self, config: Value) -> Result<Value> {
        let query: GroupQuery = serde_json::from_value(config)?;
        let group = self.client.get_group_by_name(&query.name).await?;
        Ok(json!({
            "id": group.id,
            "name": group.name,
        }))
    }
}
