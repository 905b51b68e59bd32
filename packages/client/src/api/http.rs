//! reqwest implementation of `ActivityApi`.

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url};

use activity_board_shared::dto::{ActivitiesResponse, ErrorResponse, MessageResponse};

use crate::{
    domain::ActivityCollection,
    error::{ApiError, ClientError},
};

use super::ActivityApi;

/// HTTP client for the activities API
#[derive(Debug, Clone)]
pub struct HttpActivityApi {
    client: Client,
    base_url: Url,
}

impl HttpActivityApi {
    /// Create a client for the API rooted at `base_url` (e.g. `http://127.0.0.1:8000`).
    ///
    /// No request timeout is configured.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder().build()?;

        Ok(Self { client, base_url })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn activities_url(&self) -> Url {
        self.endpoint(&["activities"])
    }

    fn signup_url(&self, activity: &str) -> Url {
        self.endpoint(&["activities", activity, "signup"])
    }

    /// Send a signup-style mutation and decode its `{message}` / `{detail}` body.
    async fn mutate(&self, method: Method, activity: &str, email: &str) -> Result<String, ApiError> {
        let url = self.signup_url(activity);
        tracing::debug!("{} {} email={}", method, url, email);

        let response = self
            .client
            .request(method, url)
            .query(&[("email", email)])
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let result: MessageResponse = serde_json::from_str(&body)?;
            return Ok(result.message);
        }

        // Any JSON value is accepted here; only a string `detail` is surfaced.
        let value: serde_json::Value = serde_json::from_str(&body)?;
        let result: ErrorResponse = serde_json::from_value(value).unwrap_or_default();
        Err(ApiError::Server {
            status: status.as_u16(),
            detail: result.detail_text().map(str::to_string),
        })
    }
}

#[async_trait]
impl ActivityApi for HttpActivityApi {
    async fn list_activities(&self) -> Result<ActivityCollection, ApiError> {
        let url = self.activities_url();
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.detail_text().map(str::to_string));
            return Err(ApiError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        let activities: ActivitiesResponse = serde_json::from_str(&body)?;
        Ok(activities.into())
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        self.mutate(Method::POST, activity, email).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        self.mutate(Method::DELETE, activity, email).await
    }
}
