use contracts::dashboards::d400_overview::EquipmentStatistics;
use contracts::domain::a001_equipment::{Equipment, EquipmentDto, EquipmentId};

use crate::shared::api::{crud, ApiClient, ApiError, ApiRequest};

pub async fn fetch_all(client: &ApiClient) -> Result<Vec<Equipment>, ApiError> {
    crud::list::<Equipment>(client).await
}

pub async fn fetch_by_id(client: &ApiClient, id: EquipmentId) -> Result<Equipment, ApiError> {
    crud::get::<Equipment>(client, id).await
}

pub async fn save(client: &ApiClient, dto: &EquipmentDto) -> Result<(), ApiError> {
    crud::save::<Equipment, _>(client, dto.id, dto).await
}

pub async fn delete(client: &ApiClient, id: EquipmentId) -> Result<(), ApiError> {
    crud::delete::<Equipment>(client, id).await
}

pub async fn statistics(client: &ApiClient) -> Result<EquipmentStatistics, ApiError> {
    client
        .fetch_data(ApiRequest::get("/equipment/statistics"))
        .await
}
