//! One lifecycle adapter per managed Confluence entity type.

mod group;
mod group_membership;
mod space;
mod space_permission;

pub use group::{GroupConfig, GroupResource, GroupState};
pub use group_membership::{GroupMembershipConfig, GroupMembershipResource, GroupMembershipState};
pub use space::{SpaceConfig, SpaceResource, SpaceState};
pub use space_permission::{SpacePermissionConfig, SpacePermissionResource, SpacePermissionState};
