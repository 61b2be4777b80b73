use async_trait::async_trait;
use serde_json::Value;
use shared::{api::activity::MessageResponse, models::activity::Activities};
use tracing::debug;
use urlencoding::encode;

use crate::error::ApiError;

/// What the signup endpoint answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupReply {
    Accepted(MessageResponse),
    Rejected { status: u16, detail: Option<String> },
}

#[async_trait]
pub trait ActivitiesApi: Send + Sync + 'static {
    async fn activities(&self) -> Result<Activities, ApiError>;

    async fn signup(&self, activity: &str, email: &str) -> Result<SignupReply, ApiError>;
}

pub fn signup_path(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        encode(activity),
        encode(email)
    )
}

pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpApi::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        HttpApi {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ActivitiesApi for HttpApi {
    async fn activities(&self) -> Result<Activities, ApiError> {
        let url = self.url("/activities");
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<SignupReply, ApiError> {
        let url = self.url(&signup_path(activity, email));
        debug!("POST {}", url);

        let response = self.client.post(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(SignupReply::Accepted(serde_json::from_slice(&body)?));
        }

        // Only a non-empty string counts as a detail; anything else falls
        // back to the generic message.
        let body: Value = serde_json::from_slice(&body)?;
        let detail = body
            .get("detail")
            .and_then(Value::as_str)
            .filter(|detail| !detail.is_empty())
            .map(str::to_string);

        Ok(SignupReply::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}
