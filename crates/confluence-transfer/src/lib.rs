//! Typed representations of the Confluence REST wire formats.
//!
//! These are plain data holders: field names and optionality mirror what the
//! API actually sends, including its habit of returning numeric ids as either
//! JSON numbers or numeric strings (see [`FlexInt`]).

mod flex_int;
mod group;
mod group_members;
mod space;
mod space_permission;

pub use flex_int::FlexInt;
pub use group::{Group, GroupLinks};
pub use group_members::{AccountIdRecord, GroupMembersResponse, Member, ProfilePicture};
pub use space::{Space, SpaceLinks};
pub use space_permission::{
    Operation, SavedPermission, SavedPermissionGroup, SavedPermissionGroupResult,
    SavedPermissionOperation, SavedPermissionSubjects, SavedPermissionUser, SavedPermissionUsers,
    SpacePermission, SpacePermissionLinks, Subject, SummarySpacePermissions,
};
