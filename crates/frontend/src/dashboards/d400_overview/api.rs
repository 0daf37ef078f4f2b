use contracts::dashboards::d400_overview::{
    CriticalAlert, DashboardOverview, RecentActivity, StatusSlice, TeamPerformance, TrendPoint,
    UpcomingTask,
};

use crate::shared::api::{ApiClient, ApiError, ApiRequest};

const BASE: &str = "/dashboard";

fn path(tail: &str) -> String {
    format!("{}/{}", BASE, tail)
}

pub async fn overview(client: &ApiClient) -> Result<DashboardOverview, ApiError> {
    client.fetch_data(ApiRequest::get(path("overview"))).await
}

pub async fn activities(client: &ApiClient) -> Result<Vec<RecentActivity>, ApiError> {
    client.fetch_data(ApiRequest::get(path("activities"))).await
}

pub async fn alerts(client: &ApiClient) -> Result<Vec<CriticalAlert>, ApiError> {
    client.fetch_data(ApiRequest::get(path("alerts"))).await
}

pub async fn team_performance(client: &ApiClient) -> Result<Vec<TeamPerformance>, ApiError> {
    client
        .fetch_data(ApiRequest::get(path("teams/performance")))
        .await
}

pub async fn status_distribution(client: &ApiClient) -> Result<Vec<StatusSlice>, ApiError> {
    client
        .fetch_data(ApiRequest::get(path("equipment/status-distribution")))
        .await
}

/// Requests opened per day over the last `days` days
pub async fn request_trends(client: &ApiClient, days: u32) -> Result<Vec<TrendPoint>, ApiError> {
    client
        .fetch_data(ApiRequest::get(path("requests/trends")).query("days", days))
        .await
}

pub async fn upcoming_preventive(client: &ApiClient) -> Result<Vec<UpcomingTask>, ApiError> {
    client
        .fetch_data(ApiRequest::get(path("preventive/upcoming")))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::ScriptedTransport;
    use crate::shared::api::RawResponse;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn test_trends_sends_day_window() {
        let transport = Rc::new(ScriptedTransport::new(|_| {
            Ok(RawResponse::json(
                200,
                &json!({"success": true, "data": [{"date": "2025-06-01", "count": 3}]}),
            ))
        }));
        let client = ApiClient::new("http://localhost:5000/api", transport.clone());

        let points = block_on(request_trends(&client, 14)).unwrap();
        assert_eq!(points[0].count, 3);

        let seen = transport.requests();
        assert_eq!(seen[0].path, "/dashboard/requests/trends");
        assert_eq!(seen[0].query, vec![("days".to_string(), "14".to_string())]);
    }
}
