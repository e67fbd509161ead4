//! Declarative resource lifecycle adapters for Confluence.
//!
//! Each adapter maps one Confluence entity (group, space, space permission
//! mapping, group membership) onto the create/read/update/delete contract a
//! declarative host drives. The permission mapping engine in [`mapping`]
//! handles the one genuinely stateful piece: expanding declared
//! `verb:target` strings into ordered creation calls and reconciling the
//! remote listing back into a stable composite identifier.

pub mod datasource;
pub mod error;
pub mod lifecycle;
pub mod mapping;
pub mod provider;
pub mod registry;
pub mod resources;

pub use error::{ProviderError, Result};
pub use lifecycle::{DataSource, ErasedResource, ManagedResource, ReadOutcome};
pub use provider::ConfluenceProvider;
pub use registry::ResourceRegistry;
