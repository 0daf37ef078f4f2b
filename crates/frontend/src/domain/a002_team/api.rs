use contracts::domain::a002_team::{Team, TeamDto, TeamId};

use crate::shared::api::{crud, ApiClient, ApiError};

pub async fn fetch_all(client: &ApiClient) -> Result<Vec<Team>, ApiError> {
    crud::list::<Team>(client).await
}

pub async fn fetch_by_id(client: &ApiClient, id: TeamId) -> Result<Team, ApiError> {
    crud::get::<Team>(client, id).await
}

pub async fn save(client: &ApiClient, dto: &TeamDto) -> Result<(), ApiError> {
    crud::save::<Team, _>(client, dto.id, dto).await
}

pub async fn delete(client: &ApiClient, id: TeamId) -> Result<(), ApiError> {
    crud::delete::<Team>(client, id).await
}
