use contracts::domain::a003_technician::{Technician, TechnicianDto, TechnicianId};

use crate::shared::api::{crud, ApiClient, ApiError, ApiRequest};

pub async fn fetch_all(client: &ApiClient) -> Result<Vec<Technician>, ApiError> {
    crud::list::<Technician>(client).await
}

/// `GET /technicians/team/{team_id}`
pub async fn fetch_by_team(client: &ApiClient, team_id: i64) -> Result<Vec<Technician>, ApiError> {
    client
        .fetch_data(ApiRequest::get(format!("/technicians/team/{}", team_id)))
        .await
}

pub async fn fetch_by_id(client: &ApiClient, id: TechnicianId) -> Result<Technician, ApiError> {
    crud::get::<Technician>(client, id).await
}

pub async fn save(client: &ApiClient, dto: &TechnicianDto) -> Result<(), ApiError> {
    let dto = dto.clone().normalized();
    crud::save::<Technician, _>(client, dto.id, &dto).await
}

pub async fn delete(client: &ApiClient, id: TechnicianId) -> Result<(), ApiError> {
    crud::delete::<Technician>(client, id).await
}
