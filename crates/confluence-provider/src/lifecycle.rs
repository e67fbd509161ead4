//! Resource lifecycle contract between the provider and its host.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// Outcome of a refresh: either the current remote state, or a signal that
/// the remote entity no longer exists and the local identifier must be
/// cleared so the host plans a re-create instead of an in-place update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome<S> {
    Current(S),
    Gone,
}

impl<S> ReadOutcome<S> {
    pub fn into_option(self) -> Option<S> {
        match self {
            Self::Current(state) => Some(state),
            Self::Gone => None,
        }
    }
}

/// One managed Confluence entity type.
///
/// All operations are sequential within one invocation; any parallelism
/// across independent resources belongs to the host.
#[async_trait]
pub trait ManagedResource: Send + Sync {
    /// Declared configuration, as the host supplies it.
    type Desired: Serialize + DeserializeOwned + Send + Sync;
    /// Persisted state, including the host-visible identifier.
    type State: Serialize + DeserializeOwned + Send + Sync;

    fn type_name(&self) -> &'static str;

    async fn create(&self, desired: &Self::Desired) -> Result<Self::State>;

    async fn read(&self, prior: &Self::State) -> Result<ReadOutcome<Self::State>>;

    async fn update(&self, prior: &Self::State, desired: &Self::Desired) -> Result<Self::State>;

    async fn delete(&self, state: &Self::State) -> Result<()>;

    async fn import(&self, id: &str) -> Result<Self::State>;
}

/// Read-only lookup exposed to the host alongside managed resources.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn type_name(&self) -> &'static str;

    async fn read(&self, config: Value) -> Result<Value>;
}

/// Object-safe view of a [`ManagedResource`] with JSON values at the
/// boundary, so heterogeneous resource types can share one registry.
#[async_trait]
pub trait ErasedResource: Send + Sync {
    fn type_name(&self) -> &'static str;

    async fn create(&self, desired: Value) -> Result<Value>;

    /// `None` is the erased form of [`ReadOutcome::Gone`].
    async fn read(&self, prior: Value) -> Result<Option<Value>>;

    async fn update(&self, prior: Value, desired: Value) -> Result<Value>;

    async fn delete(&self, state: Value) -> Result<()>;

    async fn import(&self, id: &str) -> Result<Value>;
}

#[async_trait]
impl<R: ManagedResource> ErasedResource for R {
    fn type_name(&self) -> &'static str {
        ManagedResource::type_name(self)
    }

    async fn create(&self, desired: Value) -> Result<Value> {
        let desired: R::Desired = serde_json::from_value(desired)?;
        let state = ManagedResource::create(self, &desired).await?;
        Ok(serde_json::to_value(state)?)
    }

    async fn read(&self, prior: Value) -> Result<Option<Value>> {
        let prior: R::State = serde_json::from_value(prior)?;
        match ManagedResource::read(self, &prior).await? {
            ReadOutcome::Current(state) => Ok(Some(serde_json::to_value(state)?)),
            ReadOutcome::Gone => Ok(None),
        }
    }

    async fn update(&self, prior: Value, desired: Value) -> Result<Value> {
        let prior: R::State = serde_json::from_value(prior)?;
        let desired: R::Desired = serde_json::from_value(desired)?;
        let state = ManagedResource::update(self, &prior, &desired).await?;
        Ok(serde_json::to_value(state)?)
    }

    async fn delete(&self, state: Value) -> Result<()> {
        let state: R::State = serde_json::from_value(state)?;
        ManagedResource::delete(self, &state).await
    }

    async fn import(&self, id: &str) -> Result<Value> {
        let state = ManagedResource::import(self, id).await?;
        Ok(serde_json::to_value(state)?)
    }
}
