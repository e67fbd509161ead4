//! Space endpoints.

use confluence_transfer::Space;

use crate::error::Result;
use crate::http::Client;

impl Client {
    pub async fn create_space(&self, space: &Space) -> Result<Space> {
        self.post("/rest/api/space", space).await
    }

    pub async fn get_space(&self, key: &str) -> Result<Space> {
        self.get(&format!("/rest/api/space/{key}")).await
    }

    pub async fn update_space(&self, space: &Space) -> Result<Space> {
        self.put(&format!("/rest/api/space/{}", space.key), space)
            .await
    }

    pub async fn delete_space(&self, key: &str) -> Result<()> {
        self.delete(&format!("/rest/api/space/{key}")).await
    }
}
