use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::validation::{ValidationError, ValidationRules};

/// Уникальный идентификатор категории квартир
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApartmentCategoryId(pub i64);

impl ApartmentCategoryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for ApartmentCategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(ApartmentCategoryId::new)
    }
}

/// Категория квартир (например, "Комфорт")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApartmentCategory {
    pub id: ApartmentCategoryId,
    pub name: String,
}

impl AggregateRoot for ApartmentCategory {
    type Id = ApartmentCategoryId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "apartment_category"
    }

    fn element_name() -> &'static str {
        "Категория квартир"
    }

    fn list_name() -> &'static str {
        "Категории квартир"
    }
}

/// DTO для создания/обновления категории
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ApartmentCategoryForm {
    pub name: String,
}

impl ApartmentCategoryForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationRules::required()
            .with_max_length(255)
            .validate_string(&self.name, "name", "Название категории")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(ApartmentCategoryForm { name: " ".into() }.validate().is_err());
        assert!(ApartmentCategoryForm { name: "Эконом".into() }.validate().is_ok());
        assert_eq!(ApartmentCategory::collection_path(), "/apartment_category/");
    }
}
