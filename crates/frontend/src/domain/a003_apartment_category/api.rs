use contracts::domain::a003_apartment_category::aggregate::{
    ApartmentCategory, ApartmentCategoryForm, ApartmentCategoryId,
};
use contracts::domain::common::AggregateRoot;

use crate::shared::api_error::ApiError;
use crate::shared::rest_client::RestClient;

pub async fn fetch_categories(client: &RestClient) -> Result<Vec<ApartmentCategory>, ApiError> {
    client.get_list(&ApartmentCategory::collection_path()).await
}

pub async fn create_category(client: &RestClient, form: &ApartmentCategoryForm) -> Result<(), ApiError> {
    client.post(&ApartmentCategory::collection_path(), form).await
}

pub async fn update_category(
    client: &RestClient,
    id: ApartmentCategoryId,
    form: &ApartmentCategoryForm,
) -> Result<(), ApiError> {
    client.put(&ApartmentCategory::element_path(&id), form).await
}

pub async fn delete_category(client: &RestClient, id: ApartmentCategoryId) -> Result<(), ApiError> {
    client.delete(&ApartmentCategory::element_path(&id)).await
}
