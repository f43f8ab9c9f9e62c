use reqwest::{Client, Response, StatusCode};
use shared_types::{AppConfig, AppError, Case, CaseUpdate, CurrentUserRole, UPDATE_FAILURE_MESSAGE};

use crate::backend::CaseBackend;

/// reqwest-backed client for the CGM REST API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl PartialEq for HttpBackend {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/cases?id={id}` with the id percent-encoded.
    pub fn case_url(&self, id: &str) -> String {
        format!("{}/api/cases?id={}", self.base_url, urlencoding::encode(id))
    }

    pub fn role_url(&self) -> String {
        format!("{}/api/current-user-role", self.base_url)
    }
}

fn reason(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}

async fn read_body(response: Response) -> String {
    response.text().await.unwrap_or_default()
}

impl CaseBackend for HttpBackend {
    #[tracing::instrument(skip(self))]
    async fn fetch_case(&self, id: &str) -> Result<Case, AppError> {
        let response = self
            .client
            .get(self.case_url(id))
            .send()
            .await
            .map_err(|e| AppError::network(format!("Failed to fetch case: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "case fetch rejected");
            return Err(AppError::from_status(
                status.as_u16(),
                format!("Failed to fetch case: {}", reason(status)),
            ));
        }

        response
            .json::<Case>()
            .await
            .map_err(|e| AppError::decode(format!("Failed to fetch case: {e}")))
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_case(&self, id: &str, update: &CaseUpdate) -> Result<Case, AppError> {
        let response = self
            .client
            .put(self.case_url(id))
            .json(update)
            .send()
            .await
            .map_err(|e| AppError::network(format!("{UPDATE_FAILURE_MESSAGE} {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = read_body(response).await;
            let err = AppError::from_response_body(status.as_u16(), &body, UPDATE_FAILURE_MESSAGE);
            tracing::warn!(status = status.as_u16(), error = %err.message, "case update rejected");
            return Err(err);
        }

        let case = response
            .json::<Case>()
            .await
            .map_err(|e| AppError::decode(format!("{UPDATE_FAILURE_MESSAGE} {e}")))?;
        tracing::info!("case updated");
        Ok(case)
    }

    #[tracing::instrument(skip(self))]
    async fn current_user_role(&self) -> Result<CurrentUserRole, AppError> {
        let response = self
            .client
            .get(self.role_url())
            .send()
            .await
            .map_err(|e| AppError::network(format!("Failed to fetch user role: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::from_status(
                status.as_u16(),
                format!("Failed to fetch user role: {}", reason(status)),
            ));
        }

        response
            .json::<CurrentUserRole>()
            .await
            .map_err(|e| AppError::decode(format!("Failed to fetch user role: {e}")))
    }
}
