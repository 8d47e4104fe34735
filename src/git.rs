//! Git operations and repository management.

pub mod changes;
pub mod repository;

pub use changes::ChangeSet;
pub use repository::GitRepository;
