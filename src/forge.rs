//! Interface to Git forge platforms.
//!
//! Provides token-based authentication and paginated listing of pull
//! requests and tags through a common trait.

/// Configuration, authentication and HTTP policy for forge platforms.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Pagination driver that turns forge pages into bucketing inputs.
pub mod manager;

/// Page requests and forge-neutral records.
pub mod request;

/// Common traits for forge platform abstraction.
pub mod traits;
