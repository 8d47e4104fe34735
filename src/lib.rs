//! # pr-style
//!
//! Learns how a team writes pull requests from its merged PR history and
//! drafts new PR titles and descriptions that follow the same conventions.
//!
//! ## Quick Start
//!
//! ```rust
//! use pr_style::data::PrRecord;
//! use pr_style::style::{render, StyleExtractor};
//!
//! let prs = vec![PrRecord::new(1, "feat: add export", "## Summary\nAdds export")];
//! let profile = StyleExtractor::extract(&prs, "acme", "widgets").unwrap();
//! assert!(render(&profile).contains("acme/widgets"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod actions;
pub mod cli;
pub mod data;
pub mod error;
pub mod git;
pub mod github;
#[cfg(feature = "mcp")]
pub mod mcp;
pub mod prompt;
pub mod style;
pub mod utils;

pub use crate::cli::Cli;
pub use crate::error::{PrStyleError, Result};

/// The current version of pr-style.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
