//! Preflight validation checks for early failure detection
//!
//! Commands call these before touching the network so that a missing
//! repository or credential fails fast with a clear message.

use anyhow::{Context, Result};

use crate::error::PrStyleError;
use crate::github::DEFAULT_API_URL;
use crate::utils::settings::get_env_vars;

/// Variables consulted, in order, for the GitHub access token.
pub const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Variable overriding the GitHub REST base URL.
pub const API_URL_VAR: &str = "GITHUB_API_URL";

/// Validate we're in a valid git repository
pub fn check_git_repository() -> Result<()> {
    crate::git::GitRepository::open().context(
        "Not in a git repository. Please run this command from within a git repository.",
    )?;
    Ok(())
}

/// Resolve the GitHub access token from the environment or settings file
pub fn github_token() -> std::result::Result<String, PrStyleError> {
    require_token(get_env_vars(&TOKEN_VARS))
}

/// Maps a token lookup to the token, or a `Config` error when nothing usable was found
fn require_token(lookup: Result<String>) -> std::result::Result<String, PrStyleError> {
    lookup
        .ok()
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| PrStyleError::Config("GITHUB_TOKEN environment variable is required".into()))
}

/// Resolve the GitHub REST base URL, defaulting to the public API
pub fn api_base_url() -> String {
    get_env_vars(&[API_URL_VAR]).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_vars_prefer_github_token() {
        assert_eq!(TOKEN_VARS[0], "GITHUB_TOKEN");
    }

    #[test]
    fn missing_token_is_config_error() {
        let err = require_token(Err(anyhow::anyhow!("None of the environment variables found")))
            .unwrap_err();

        assert!(matches!(err, PrStyleError::Config(_)));
        assert_eq!(err.to_string(), "GITHUB_TOKEN environment variable is required");
    }

    #[test]
    fn blank_token_is_config_error() {
        assert!(matches!(
            require_token(Ok("  ".to_string())),
            Err(PrStyleError::Config(_))
        ));
    }

    #[test]
    fn found_token_is_returned() {
        assert_eq!(require_token(Ok("ghp_abc".to_string())).unwrap(), "ghp_abc");
    }
}
