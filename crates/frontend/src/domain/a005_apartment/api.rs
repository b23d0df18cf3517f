use contracts::domain::a005_apartment::aggregate::{
    Apartment, ApartmentForm, ApartmentId, ApartmentQuery,
};
use contracts::domain::common::AggregateRoot;

use crate::shared::api_error::ApiError;
use crate::shared::rest_client::RestClient;

pub async fn fetch_apartments(
    client: &RestClient,
    query: &ApartmentQuery,
) -> Result<Vec<Apartment>, ApiError> {
    client
        .get_list_filtered(&Apartment::collection_path(), query)
        .await
}

pub async fn fetch_apartment(client: &RestClient, id: ApartmentId) -> Result<Apartment, ApiError> {
    client.get_json(&Apartment::element_path(&id)).await
}

pub async fn create_apartment(client: &RestClient, form: &ApartmentForm) -> Result<(), ApiError> {
    client.post(&Apartment::collection_path(), form).await
}

pub async fn update_apartment(
    client: &RestClient,
    id: ApartmentId,
    form: &ApartmentForm,
) -> Result<(), ApiError> {
    client.put(&Apartment::element_path(&id), form).await
}

pub async fn delete_apartment(client: &RestClient, id: ApartmentId) -> Result<(), ApiError> {
    client.delete(&Apartment::element_path(&id)).await
}
