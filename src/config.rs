/// Process-level configuration for the dashboard itself.
///
/// Harvest credentials are deliberately NOT read here — see
/// `HarvestClient::from_env`. A missing token is not a startup error; it
/// surfaces as a 401 from the remote API on the first request.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub bind_addr: String,
    pub access_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            app_name: std::env::var("APP_NAME")
                .unwrap_or_else(|_| "Harvest Project Tracker".to_string()),
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            access_key: std::env::var("DASHBOARD_ACCESS_KEY").unwrap_or_default(),
        }
    }
}
