use async_trait::async_trait;
use contracts::domain::a001_house_attribute::aggregate::HouseAttribute;
use contracts::domain::a002_apartment_parameter::aggregate::ApartmentParameter;
use contracts::domain::common::{AttributeDefinition, AttributeKind, DefinitionForm};

use super::service::CatalogBackend;
use crate::shared::api_error::ApiError;
use crate::shared::rest_client::RestClient;

fn collection_path(kind: AttributeKind) -> String {
    format!("/{}/", kind.collection_name())
}

fn element_path(kind: AttributeKind, id: i64) -> String {
    format!("/{}/{}", kind.collection_name(), id)
}

#[async_trait(?Send)]
impl CatalogBackend for RestClient {
    async fn fetch_definitions(
        &self,
        kind: AttributeKind,
    ) -> Result<Vec<AttributeDefinition>, ApiError> {
        let path = collection_path(kind);
        Ok(match kind {
            AttributeKind::House => self
                .get_list::<HouseAttribute>(&path)
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
            AttributeKind::Apartment => self
                .get_list::<ApartmentParameter>(&path)
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
        })
    }

    /// POST возвращает только статус, поэтому созданную запись ищем в
    /// перечитанном списке (последнюю с таким именем).
    async fn create_definition(
        &self,
        kind: AttributeKind,
        form: &DefinitionForm,
    ) -> Result<AttributeDefinition, ApiError> {
        self.post(&collection_path(kind), form).await?;
        self.fetch_definitions(kind)
            .await?
            .into_iter()
            .rev()
            .find(|d| d.name() == form.name)
            .ok_or_else(|| ApiError::Decode(format!("«{}» нет в ответе после создания", form.name)))
    }

    async fn update_definition(
        &self,
        kind: AttributeKind,
        id: i64,
        form: &DefinitionForm,
    ) -> Result<(), ApiError> {
        self.put(&element_path(kind, id), form).await
    }

    async fn delete_definition(&self, kind: AttributeKind, id: i64) -> Result<(), ApiError> {
        self.delete(&element_path(kind, id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_follow_catalog_kind() {
        assert_eq!(collection_path(AttributeKind::House), "/house_attributes/");
        assert_eq!(element_path(AttributeKind::Apartment, 7), "/apartment_parameters/7");
    }
}
