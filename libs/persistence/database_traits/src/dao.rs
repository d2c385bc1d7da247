use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

/// Write-capable access for entities that expose mutation endpoints.
#[async_trait]
pub trait GenericDao {
    type Model: Send + Sync + 'static;
    type CreateRequest: Send + Sync + 'static;
    type UpdateRequest: Send + Sync + 'static;
    type Error: Send + 'static;
    type ID: Serialize + DeserializeOwned + Send + Sync + 'static;

    async fn find_by_id(&self, id: Self::ID) -> Result<Self::Model, Self::Error>;

    async fn create(
        &self, req: Self::CreateRequest,
    ) -> Result<Self::Model, Self::Error>;

    async fn update(
        &self, id: Self::ID, req: Self::UpdateRequest,
    ) -> Result<Self::Model, Self::Error>;

    async fn delete(&self, id: Self::ID) -> Result<(), Self::Error>;
}
