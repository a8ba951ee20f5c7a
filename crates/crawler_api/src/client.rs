use std::time::Duration;

use crate::records::{JobRecord, ReportRequest, SearchRequest};
use crate::types::{ApiError, FailureKind};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base URL of the scraping backend, without a trailing path.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Seam over the two backend operations. No retries and no local recovery;
/// failures propagate to the caller.
#[async_trait::async_trait]
pub trait JobsApi: Send + Sync {
    /// Sends the query URL to the search endpoint and decodes the postings.
    async fn submit_url_for_jobs(&self, url: &str) -> Result<Vec<JobRecord>, ApiError>;

    /// Sends the recipient and the visible posting ids to the reporting
    /// endpoint. The backend's acknowledgment body is not examined.
    async fn submit_email_report(&self, email: &str, job_ids: &[u64]) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobsApi {
    client: reqwest::Client,
    settings: ClientSettings,
}

impl ReqwestJobsApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, settings })
    }

    fn endpoint(&self, path: &str) -> Result<url::Url, ApiError> {
        let base = url::Url::parse(&self.settings.base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidBaseUrl, err.to_string()))?;
        base.join(path)
            .map_err(|err| ApiError::new(FailureKind::InvalidBaseUrl, err.to_string()))
    }

    async fn post_checked(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<reqwest::Response, ApiError> {
        let response = self
            .client
            .post(self.endpoint(path)?)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl JobsApi for ReqwestJobsApi {
    async fn submit_url_for_jobs(&self, url: &str) -> Result<Vec<JobRecord>, ApiError> {
        let response = self.post_checked("/trabalhos", &SearchRequest { url }).await?;
        response
            .json::<Vec<JobRecord>>()
            .await
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
    }

    async fn submit_email_report(&self, email: &str, job_ids: &[u64]) -> Result<(), ApiError> {
        let request = ReportRequest {
            email,
            lista: job_ids,
        };
        self.post_checked("/email", &request).await?;
        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
