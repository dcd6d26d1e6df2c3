use reqwest::Method;
use store::DashboardMetrics;

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Aggregates for the manager and admin dashboards.
    pub async fn dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError> {
        let path = "/dashboard/";
        self.fetch(path, self.request(Method::GET, path)).await
    }
}
