use contracts::domain::a004_house::aggregate::{House, HouseForm, HouseId, HouseQuery};
use contracts::domain::common::AggregateRoot;

use crate::shared::api_error::ApiError;
use crate::shared::rest_client::RestClient;

/// Дома по фильтрам; пустая выборка даёт пустой список
pub async fn fetch_houses(client: &RestClient, query: &HouseQuery) -> Result<Vec<House>, ApiError> {
    client
        .get_list_filtered(&House::collection_path(), query)
        .await
}

pub async fn fetch_house(client: &RestClient, id: HouseId) -> Result<House, ApiError> {
    client.get_json(&House::element_path(&id)).await
}

pub async fn create_house(client: &RestClient, form: &HouseForm) -> Result<(), ApiError> {
    client.post(&House::collection_path(), form).await
}

pub async fn update_house(client: &RestClient, id: HouseId, form: &HouseForm) -> Result<(), ApiError> {
    client.put(&House::element_path(&id), form).await
}

pub async fn delete_house(client: &RestClient, id: HouseId) -> Result<(), ApiError> {
    client.delete(&House::element_path(&id)).await
}
