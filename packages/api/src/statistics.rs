//! Statistics facade backing the `/statistics` dashboard.

use std::sync::Arc;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{AppUsage, StatCard};

/// Thin client for the read-only statistics endpoints.
#[derive(Clone)]
pub struct StatisticsApi {
    client: Arc<ApiClient>,
}

impl StatisticsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /api/statistics/overview?days=N` — the dashboard cards.
    pub async fn overview(&self, days: u32) -> Result<Vec<StatCard>, ApiError> {
        self.client
            .get(&format!("/api/statistics/overview?days={days}"))
            .await
    }

    /// `GET /api/statistics/top-apps?days=N&limit=M`.
    pub async fn top_apps(&self, days: u32, limit: u32) -> Result<Vec<AppUsage>, ApiError> {
        self.client
            .get(&format!("/api/statistics/top-apps?days={days}&limit={limit}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;
    use store::MemoryStorage;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::ApiConfig;
    use crate::http::CredentialTransport;

    #[tokio::test]
    async fn test_overview_passes_days_window() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/statistics/overview"))
            .and(query_param("days", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "total", "label": "Total time", "value": "12h 30m"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let stats = StatisticsApi::new(Arc::new(ApiClient::new(
            ApiConfig::default().with_base_url(server.uri()),
            CredentialTransport::BearerHeader,
            Arc::new(MemoryStorage::new()),
        )));
        let cards = stats.overview(7).await.unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].value, "12h 30m");
    }
}
