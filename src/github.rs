//! GitHub corpus source: remote identity and REST access to merged PRs.

pub mod client;
pub mod remote;

pub use client::{GitHubClient, PrSource, DEFAULT_API_URL};
pub use remote::RepoId;
