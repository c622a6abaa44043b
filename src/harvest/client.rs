use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::harvest::types::{BudgetReport, Profile, TimeEntryPage};

const DEFAULT_BASE_URL: &str = "https://api.harvestapp.com";
const USER_AGENT: &str = "Harvest Project Tracker (support@example.com)";

/// Thin client for the Harvest v2 REST API.
///
/// One attempt per call, no retries, no backoff. A non-2xx answer is logged
/// with its status and body, then returned as `AppError::Upstream` carrying
/// the original status code.
#[derive(Clone)]
pub struct HarvestClient {
    http: Client,
    base_url: String,
    token: String,
    account_id: String,
}

impl HarvestClient {
    pub fn new(base_url: impl Into<String>, token: String, account_id: String) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            http,
            base_url: base_url.into(),
            token,
            account_id,
        }
    }

    /// Read credentials from the environment. Absence is not an error here;
    /// an empty token simply comes back as a 401 from Harvest.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("HARVEST_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let token = std::env::var("HARVEST_API_TOKEN").unwrap_or_default();
        let account_id = std::env::var("HARVEST_ACCOUNT_ID").unwrap_or_default();
        Self::new(base_url, token, account_id)
    }

    /// The authenticated user's own profile.
    pub async fn profile(&self) -> Result<Profile, AppError> {
        self.get_json("/api/v2/users/me.json").await
    }

    /// Budgeted vs. spent hours for active projects.
    pub async fn budget_report(&self) -> Result<BudgetReport, AppError> {
        self.get_json("/api/v2/reports/project_budget?is_active=true")
            .await
    }

    /// Recent time entries (first page).
    pub async fn time_entries(&self) -> Result<TimeEntryPage, AppError> {
        self.get_json("/api/v2/time_entries").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header("Harvest-Account-ID", &self.account_id)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!(
                "Harvest API response: {} {} — {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown"),
                body
            );
            let status = actix_web::http::StatusCode::from_u16(status.as_u16())
                .expect("reqwest status codes are always valid");
            return Err(AppError::Upstream { status, body });
        }

        Ok(response.json::<T>().await?)
    }
}
