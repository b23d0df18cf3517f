use async_trait::async_trait;
use contracts::domain::a001_house_attribute::aggregate::HouseAttribute;
use contracts::domain::a002_apartment_parameter::aggregate::ApartmentParameter;
use contracts::domain::common::{AttributeDefinition, AttributeKind, DefinitionForm};
use contracts::shared::validation::ValidationError;
use thiserror::Error;

use crate::shared::api_error::ApiError;

/// Хранилище каталогов на стороне бэкенда
#[async_trait(?Send)]
pub trait CatalogBackend {
    async fn fetch_definitions(
        &self,
        kind: AttributeKind,
    ) -> Result<Vec<AttributeDefinition>, ApiError>;

    async fn create_definition(
        &self,
        kind: AttributeKind,
        form: &DefinitionForm,
    ) -> Result<AttributeDefinition, ApiError>;

    async fn update_definition(
        &self,
        kind: AttributeKind,
        id: i64,
        form: &DefinitionForm,
    ) -> Result<(), ApiError>;

    async fn delete_definition(&self, kind: AttributeKind, id: i64) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Управление определениями атрибутов/параметров.
///
/// Удаление определения не трогает привязки: они остаются и показываются
/// как «Неизвестный атрибут».
#[derive(Clone)]
pub struct AttributeCatalog<B> {
    backend: B,
}

impl<B: CatalogBackend> AttributeCatalog<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Определения в порядке, отданном бэкендом
    pub async fn list_definitions(
        &self,
        kind: AttributeKind,
    ) -> Result<Vec<AttributeDefinition>, CatalogError> {
        Ok(self.backend.fetch_definitions(kind).await?)
    }

    pub async fn house_attributes(&self) -> Result<Vec<HouseAttribute>, CatalogError> {
        let definitions = self.list_definitions(AttributeKind::House).await?;
        Ok(definitions
            .into_iter()
            .filter_map(AttributeDefinition::into_house)
            .collect())
    }

    pub async fn apartment_parameters(&self) -> Result<Vec<ApartmentParameter>, CatalogError> {
        let definitions = self.list_definitions(AttributeKind::Apartment).await?;
        Ok(definitions
            .into_iter()
            .filter_map(AttributeDefinition::into_apartment)
            .collect())
    }

    /// Создать определение. Пустое имя отклоняется до обращения к бэкенду.
    pub async fn create_definition(
        &self,
        kind: AttributeKind,
        name: &str,
        description: Option<&str>,
    ) -> Result<AttributeDefinition, CatalogError> {
        let form = DefinitionForm::new(kind, name, description)?;
        let created = self.backend.create_definition(kind, &form).await?;
        log::info!("{}: создано «{}»", kind.display_name(), created.name());
        Ok(created)
    }

    pub async fn update_definition(
        &self,
        kind: AttributeKind,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<DefinitionForm, CatalogError> {
        let form = DefinitionForm::new(kind, name, description)?;
        self.backend.update_definition(kind, id, &form).await?;
        log::info!("{}: запись {} переименована", kind.display_name(), id);
        Ok(form)
    }

    pub async fn delete_definition(&self, kind: AttributeKind, id: i64) -> Result<(), CatalogError> {
        self.backend.delete_definition(kind, id).await?;
        log::info!("{}: запись {} удалена", kind.display_name(), id);
        Ok(())
    }
}
