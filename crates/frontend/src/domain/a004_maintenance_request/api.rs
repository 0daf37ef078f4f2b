//! Calls on `/requests` (admin and employee) and `/tech` (job board).

use contracts::domain::a004_maintenance_request::{
    AssignTechnicianDto, ClaimJobDto, MaintenanceRequest, MaintenanceRequestDto, RequestId,
    RequestStatistics, SubmitRequestDto, UpdateJobDto,
};

use crate::shared::api::{crud, request::segment, ApiClient, ApiError, ApiRequest};

pub const JOBS_PATH: &str = "/tech/jobs";

pub async fn fetch_all(client: &ApiClient) -> Result<Vec<MaintenanceRequest>, ApiError> {
    crud::list::<MaintenanceRequest>(client).await
}

pub async fn fetch_by_id(
    client: &ApiClient,
    id: RequestId,
) -> Result<MaintenanceRequest, ApiError> {
    crud::get::<MaintenanceRequest>(client, id).await
}

/// Requests raised by one employee
pub async fn fetch_for_user(
    client: &ApiClient,
    email: &str,
) -> Result<Vec<MaintenanceRequest>, ApiError> {
    client
        .fetch_data(ApiRequest::get(format!("/requests/user/{}", segment(email))))
        .await
}

pub async fn save(client: &ApiClient, dto: &MaintenanceRequestDto) -> Result<(), ApiError> {
    crud::save::<MaintenanceRequest, _>(client, dto.id, dto).await
}

pub async fn delete(client: &ApiClient, id: RequestId) -> Result<(), ApiError> {
    crud::delete::<MaintenanceRequest>(client, id).await
}

/// Employee submission; the team is already resolved from the catalog.
pub async fn submit(client: &ApiClient, dto: &SubmitRequestDto) -> Result<(), ApiError> {
    client
        .execute(ApiRequest::post("/requests/submit").json(dto)?)
        .await
}

pub async fn statistics(client: &ApiClient) -> Result<RequestStatistics, ApiError> {
    client
        .fetch_data(ApiRequest::get("/requests/statistics"))
        .await
}

pub async fn assign(
    client: &ApiClient,
    id: RequestId,
    technician_id: i64,
) -> Result<(), ApiError> {
    client
        .execute(
            ApiRequest::post(format!("/requests/{}/assign", id))
                .json(&AssignTechnicianDto { technician_id })?,
        )
        .await
}

// ============================================================================
// Technician jobs
// ============================================================================

pub async fn fetch_jobs(client: &ApiClient) -> Result<Vec<MaintenanceRequest>, ApiError> {
    client.fetch_data(ApiRequest::get(JOBS_PATH)).await
}

pub async fn claim_job(client: &ApiClient, id: RequestId, dto: &ClaimJobDto) -> Result<(), ApiError> {
    client
        .execute(ApiRequest::put(format!("/tech/claim/{}", id)).json(dto)?)
        .await
}

pub async fn update_job(
    client: &ApiClient,
    id: RequestId,
    dto: &UpdateJobDto,
) -> Result<(), ApiError> {
    client
        .execute(ApiRequest::put(format!("/tech/update/{}", id)).json(dto)?)
        .await
}
