//! Space permission endpoints.

use confluence_transfer::{SpacePermission, SummarySpacePermissions};

use crate::error::Result;
use crate::http::Client;

impl Client {
    pub async fn create_space_permission(
        &self,
        space_key: &str,
        permission: &SpacePermission,
    ) -> Result<SpacePermission> {
        self.post(&format!("/rest/api/space/{space_key}/permission"), permission)
            .await
    }

    /// The expanded summary listing of every permission on the space.
    pub async fn get_space_permissions(&self, space_key: &str) -> Result<SummarySpacePermissions> {
        self.get(&format!("/rest/api/space/{space_key}?expand=permissions"))
            .await
    }

    pub async fn delete_space_permission(&self, space_key: &str, id: &str) -> Result<()> {
        match self
            .delete(&format!("/rest/api/space/{space_key}/permission/{id}"))
            .await
        {
            // The permission delete endpoint answers 202 where the rest of
            // the API answers 204.
            Err(err) if err.is_status(202) => Ok(()),
            other => other,
        }
    }
}
