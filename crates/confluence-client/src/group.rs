//! Group and group membership endpoints.

use confluence_transfer::{AccountIdRecord, Group, GroupMembersResponse};

use crate::error::Result;
use crate::http::Client;

impl Client {
    pub async fn create_group(&self, group: &Group) -> Result<Group> {
        self.post("/rest/api/group", group).await
    }

    pub async fn get_group(&self, id: &str) -> Result<Group> {
        self.get(&format!("/rest/api/group/by-id?id={id}")).await
    }

    pub async fn get_group_by_name(&self, name: &str) -> Result<Group> {
        self.get(&format!("/rest/api/group/by-name?name={name}"))
            .await
    }

    /// There is no group update endpoint; emulate with delete-then-create.
    /// Not atomic: a failure between the two calls leaves the group absent
    /// until the next apply.
    pub async fn update_group(&self, group: &Group) -> Result<Group> {
        self.delete_group(&group.id).await?;
        self.create_group(group).await
    }

    pub async fn delete_group(&self, id: &str) -> Result<()> {
        match self.delete(&format!("/rest/api/group/by-id?id={id}")).await {
            // The group delete endpoint answers 202 where the rest of the
            // API answers 204.
            Err(err) if err.is_status(202) => Ok(()),
            other => other,
        }
    }

    pub async fn get_group_members(&self, group_id: &str) -> Result<GroupMembersResponse> {
        self.get(&format!("/rest/api/group/{group_id}/membersByGroupId"))
            .await
    }

    pub async fn add_group_member(&self, group_id: &str, account_id: &str) -> Result<Group> {
        let body = AccountIdRecord {
            account_id: account_id.to_string(),
        };
        self.post(&format!("/rest/api/group/userByGroupId?groupId={group_id}"), &body)
            .await
    }

    pub async fn remove_group_member(&self, group_id: &str) -> Result<()> {
        self.delete(&format!("/rest/api/group/userByGroupId?groupId={group_id}"))
            .await
    }
}
