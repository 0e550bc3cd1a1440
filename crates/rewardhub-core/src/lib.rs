//! RewardHub Core Library
//!
//! Page identifiers, server configuration and errors shared by the web
//! server and the CLI.

pub mod config;
pub mod error;
pub mod page;

pub use config::{ConfigOverrides, ServerConfig};
pub use error::{RewardHubError, RewardHubResult};
pub use page::Page;
