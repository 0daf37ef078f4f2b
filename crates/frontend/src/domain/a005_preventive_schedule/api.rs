use contracts::domain::a005_preventive_schedule::{
    PreventiveSchedule, PreventiveScheduleDto, ScheduleId,
};
use contracts::domain::common::AggregateRoot;

use crate::shared::api::{crud, ApiClient, ApiError, ApiRequest};

pub async fn fetch_all(client: &ApiClient) -> Result<Vec<PreventiveSchedule>, ApiError> {
    crud::list::<PreventiveSchedule>(client).await
}

pub async fn fetch_by_id(
    client: &ApiClient,
    id: ScheduleId,
) -> Result<PreventiveSchedule, ApiError> {
    crud::get::<PreventiveSchedule>(client, id).await
}

pub async fn save(client: &ApiClient, dto: &PreventiveScheduleDto) -> Result<(), ApiError> {
    crud::save::<PreventiveSchedule, _>(client, dto.id, dto).await
}

pub async fn delete(client: &ApiClient, id: ScheduleId) -> Result<(), ApiError> {
    crud::delete::<PreventiveSchedule>(client, id).await
}

/// Mark done; the server moves `next_due` forward by the frequency interval.
pub async fn complete(client: &ApiClient, id: ScheduleId) -> Result<(), ApiError> {
    client
        .execute(ApiRequest::post(format!(
            "{}/complete",
            PreventiveSchedule::item_path(id)
        )))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::InMemoryBackend;
    use futures::executor::block_on;
    use std::rc::Rc;

    #[test]
    fn test_complete_posts_to_item_path() {
        let backend = Rc::new(InMemoryBackend::new());
        backend.seed(
            "/preventive-schedules",
            vec![serde_json::json!({"id": 4, "task_name": "Filter change", "frequency": "monthly"})],
        );
        let client = ApiClient::new("http://localhost:5000/api", backend.clone());

        block_on(complete(&client, 4)).unwrap();
        let rows = block_on(fetch_all(&client)).unwrap();
        assert_eq!(rows[0].task_name, "Filter change");
        assert_eq!(
            backend.calls(),
            vec!["POST /preventive-schedules/4/complete", "GET /preventive-schedules"]
        );
    }
}
