//! REST calls shared by every aggregate, addressed through [`AggregateRoot`].

use contracts::domain::common::AggregateRoot;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ApiClient, ApiError, ApiRequest};

/// `GET /{collection}`
pub async fn list<A>(client: &ApiClient) -> Result<Vec<A>, ApiError>
where
    A: AggregateRoot + DeserializeOwned,
{
    client.fetch_data(ApiRequest::get(A::list_path())).await
}

/// `GET /{collection}/{id}`
pub async fn get<A>(client: &ApiClient, id: A::Id) -> Result<A, ApiError>
where
    A: AggregateRoot + DeserializeOwned,
{
    client.fetch_data(ApiRequest::get(A::item_path(id))).await
}

/// `POST /{collection}`
pub async fn create<A, D>(client: &ApiClient, dto: &D) -> Result<(), ApiError>
where
    A: AggregateRoot,
    D: Serialize,
{
    client
        .execute(ApiRequest::post(A::list_path()).json(dto)?)
        .await
}

/// `PUT /{collection}/{id}`
pub async fn update<A, D>(client: &ApiClient, id: A::Id, dto: &D) -> Result<(), ApiError>
where
    A: AggregateRoot,
    D: Serialize,
{
    client
        .execute(ApiRequest::put(A::item_path(id)).json(dto)?)
        .await
}

/// Create when `id` is `None`, update otherwise
pub async fn save<A, D>(client: &ApiClient, id: Option<A::Id>, dto: &D) -> Result<(), ApiError>
where
    A: AggregateRoot,
    D: Serialize,
{
    match id {
        Some(id) => update::<A, D>(client, id, dto).await,
        None => create::<A, D>(client, dto).await,
    }
}

/// `DELETE /{collection}/{id}`
pub async fn delete<A>(client: &ApiClient, id: A::Id) -> Result<(), ApiError>
where
    A: AggregateRoot,
{
    client.execute(ApiRequest::delete(A::item_path(id))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::InMemoryBackend;
    use contracts::domain::a002_team::{Team, TeamDto};
    use futures::executor::block_on;
    use std::rc::Rc;

    #[test]
    fn test_team_crud_against_memory_backend() {
        let backend = Rc::new(InMemoryBackend::new());
        let client = ApiClient::new("http://localhost:5000/api", backend.clone());

        let dto = TeamDto {
            name: "Network Team".into(),
            department: "IT".into(),
            specialization: "Networking".into(),
            ..Default::default()
        };
        block_on(create::<Team, _>(&client, &dto)).unwrap();
        let teams = block_on(list::<Team>(&client)).unwrap();
        assert_eq!(teams.len(), 1);
        let id = teams[0].id;

        let renamed = TeamDto {
            name: "Network Ops".into(),
            ..dto
        };
        block_on(save::<Team, _>(&client, Some(id), &renamed)).unwrap();
        assert_eq!(block_on(get::<Team>(&client, id)).unwrap().name, "Network Ops");

        block_on(delete::<Team>(&client, id)).unwrap();
        assert!(block_on(list::<Team>(&client)).unwrap().is_empty());
        assert_eq!(
            backend.calls(),
            vec![
                "POST /teams",
                "GET /teams",
                "PUT /teams/1",
                "GET /teams/1",
                "DELETE /teams/1",
                "GET /teams",
            ]
        );
    }
}
