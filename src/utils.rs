//! Utility functions and helpers.

pub mod preflight;
pub mod settings;

pub use preflight::{api_base_url, check_git_repository, github_token};
pub use settings::{get_env_var, get_env_vars, Settings};
