//! Ports implemented by the infrastructure crates

mod cache;
mod repositories;
mod storage;

pub use cache::UserCache;
pub use repositories::{Entity, InvitationWriter, RepoResult, Repository};
pub use storage::Storage;
