//! Configuration for Git forge platform connections.
use secrecy::SecretString;
use std::time::Duration;

use crate::{PrNotesError, Result, forge::request::PrState};

/// Default REST API root for github.com.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Default and maximum page size for paginated queries.
pub const DEFAULT_PAGE_SIZE: u8 = 100;
/// Default ceiling on the number of pages fetched per listing.
pub const DEFAULT_MAX_PAGES: u32 = 10;
/// Time allowed to establish a connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
/// Time allowed for a whole request, including reading the body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
/// Additional attempts after a transport failure or 5xx response.
pub const MAX_RETRIES: u32 = 2;
/// Back-off unit, multiplied by the attempt number.
pub const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Remote repository connection configuration.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// REST API root (e.g., "https://api.github.com").
    pub api_url: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl RemoteConfig {
    /// `owner/repo`, for log messages.
    pub fn path(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// How much to fetch from the forge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Pull request lifecycle filter.
    pub state: PrState,
    /// Items per page, between 1 and [`DEFAULT_PAGE_SIZE`].
    pub per_page: u8,
    /// Maximum number of pages to fetch per listing.
    pub max_pages: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            state: PrState::All,
            per_page: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl FetchOptions {
    /// Validate fetch options. Page sizes above the forge maximum are
    /// clamped.
    pub fn new(state: PrState, per_page: u32, max_pages: u32) -> Result<Self> {
        if per_page == 0 {
            return Err(PrNotesError::invalid_config(
                "per_page must be at least 1",
            ));
        }

        if max_pages == 0 {
            return Err(PrNotesError::invalid_config(
                "max_pages must be at least 1",
            ));
        }

        let per_page = match u8::try_from(per_page) {
            Ok(size) if size <= DEFAULT_PAGE_SIZE => size,
            _ => {
                log::warn!(
                    "per_page {per_page} exceeds forge maximum: using {DEFAULT_PAGE_SIZE}"
                );
                DEFAULT_PAGE_SIZE
            }
        };

        Ok(Self {
            state,
            per_page,
            max_pages,
        })
    }
}
