//! Access to the activities REST API.
//!
//! The board depends on the `ActivityApi` trait only; `HttpActivityApi` is
//! the reqwest implementation used by the binary.

mod http;

use async_trait::async_trait;

use crate::{domain::ActivityCollection, error::ApiError};

pub use http::HttpActivityApi;

/// Activities API trait
///
/// Mutating calls return the server's success message, or an
/// `ApiError::Server` carrying the server's detail text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityApi: Send + Sync {
    /// `GET /activities`
    async fn list_activities(&self) -> Result<ActivityCollection, ApiError>;

    /// `POST /activities/{activity}/signup?email={email}`
    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError>;

    /// `DELETE /activities/{activity}/signup?email={email}`
    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError>;
}
