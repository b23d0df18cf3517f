use serde::{Deserialize, Serialize};

use super::AggregateId;
use crate::domain::a001_house_attribute::aggregate::HouseAttribute;
use crate::domain::a002_apartment_parameter::aggregate::ApartmentParameter;
use crate::shared::validation::{ValidationError, ValidationRules};

/// Вид каталога: атрибуты домов или параметры квартир
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    House,
    Apartment,
}

impl AttributeKind {
    /// Имя коллекции каталога в API
    pub fn collection_name(&self) -> &'static str {
        match self {
            AttributeKind::House => "house_attributes",
            AttributeKind::Apartment => "apartment_parameters",
        }
    }

    /// Человекочитаемое название каталога
    pub fn display_name(&self) -> &'static str {
        match self {
            AttributeKind::House => "Атрибуты домов",
            AttributeKind::Apartment => "Параметры квартир",
        }
    }

    /// Поддерживает ли каталог описание записи
    pub fn has_description(&self) -> bool {
        matches!(self, AttributeKind::House)
    }
}

/// Запись каталога, на которую ссылаются привязки
pub trait Definition {
    type Id: AggregateId;

    const KIND: AttributeKind;

    fn definition_id(&self) -> Self::Id;

    fn name(&self) -> &str;

    fn description(&self) -> Option<&str> {
        None
    }
}

/// Определение из любого из двух параллельных каталогов
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeDefinition {
    House(HouseAttribute),
    Apartment(ApartmentParameter),
}

impl AttributeDefinition {
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeDefinition::House(_) => AttributeKind::House,
            AttributeDefinition::Apartment(_) => AttributeKind::Apartment,
        }
    }

    /// Числовой идентификатор, присвоенный бэкендом
    pub fn raw_id(&self) -> i64 {
        match self {
            AttributeDefinition::House(a) => a.id.value(),
            AttributeDefinition::Apartment(p) => p.id.value(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AttributeDefinition::House(a) => &a.name,
            AttributeDefinition::Apartment(p) => &p.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            AttributeDefinition::House(a) => a.description.as_deref(),
            AttributeDefinition::Apartment(_) => None,
        }
    }

    pub fn into_house(self) -> Option<HouseAttribute> {
        match self {
            AttributeDefinition::House(a) => Some(a),
            AttributeDefinition::Apartment(_) => None,
        }
    }

    pub fn into_apartment(self) -> Option<ApartmentParameter> {
        match self {
            AttributeDefinition::Apartment(p) => Some(p),
            AttributeDefinition::House(_) => None,
        }
    }

    /// Применить переименование из формы
    pub fn apply_form(&mut self, form: &DefinitionForm) {
        match self {
            AttributeDefinition::House(a) => {
                a.name = form.name.clone();
                a.description = form.stored_description().map(str::to_string);
            }
            AttributeDefinition::Apartment(p) => p.name = form.name.clone(),
        }
    }
}

impl From<HouseAttribute> for AttributeDefinition {
    fn from(value: HouseAttribute) -> Self {
        AttributeDefinition::House(value)
    }
}

impl From<ApartmentParameter> for AttributeDefinition {
    fn from(value: ApartmentParameter) -> Self {
        AttributeDefinition::Apartment(value)
    }
}

/// DTO для создания/переименования записи каталога
///
/// Тело подходит для обоих каталогов: у параметров квартир описание
/// отбрасывается при сборке формы. У атрибутов домов поле `description`
/// передаётся всегда: пустая строка очищает описание на бэкенде, а
/// отсутствующий ключ оставил бы старое.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionForm {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DefinitionForm {
    /// Собрать и проверить форму
    pub fn new(
        kind: AttributeKind,
        name: &str,
        description: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        ValidationRules::required()
            .with_max_length(255)
            .validate_string(name, "name", "Название")?;

        let description = if kind.has_description() {
            Some(description.map(str::trim).unwrap_or_default().to_string())
        } else {
            None
        };

        Ok(Self {
            name: name.to_string(),
            description,
        })
    }

    /// Описание в том виде, в каком его хранит бэкенд (пустое = нет)
    pub fn stored_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_house_attribute::aggregate::HouseAttributeId;

    #[test]
    fn test_form_rejects_blank_name() {
        let err = DefinitionForm::new(AttributeKind::House, "   ", None).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_form_trims_and_keeps_description_for_houses() {
        let form =
            DefinitionForm::new(AttributeKind::House, "  Балкон ", Some(" Остекленный ")).unwrap();
        assert_eq!(form.name, "Балкон");
        assert_eq!(form.description.as_deref(), Some("Остекленный"));
    }

    #[test]
    fn test_form_drops_description_for_apartments() {
        let form =
            DefinitionForm::new(AttributeKind::Apartment, "Санузел", Some("Раздельный")).unwrap();
        assert_eq!(form.description, None);
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            serde_json::json!({ "name": "Санузел" })
        );
    }

    #[test]
    fn test_cleared_house_description_is_sent_as_empty_string() {
        let form = DefinitionForm::new(AttributeKind::House, "Лифт", Some("  ")).unwrap();
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            serde_json::json!({ "name": "Лифт", "description": "" })
        );
        assert_eq!(form.stored_description(), None);

        let form = DefinitionForm::new(AttributeKind::House, "Лифт", None).unwrap();
        assert_eq!(form.description.as_deref(), Some(""));
    }

    #[test]
    fn test_definition_accessors() {
        let definition = AttributeDefinition::from(HouseAttribute {
            id: HouseAttributeId::new(3),
            name: "Лифт".into(),
            description: None,
        });
        assert_eq!(definition.kind(), AttributeKind::House);
        assert_eq!(definition.raw_id(), 3);
        assert!(definition.clone().into_apartment().is_none());
    }

    #[test]
    fn test_apply_form_renames() {
        let mut definition = AttributeDefinition::from(HouseAttribute {
            id: HouseAttributeId::new(3),
            name: "Лифт".into(),
            description: Some("Старое".into()),
        });
        let form = DefinitionForm::new(AttributeKind::House, "Грузовой лифт", None).unwrap();
        definition.apply_form(&form);
        assert_eq!(definition.name(), "Грузовой лифт");
        assert_eq!(definition.description(), None);
        assert_eq!(definition.into_house().map(|a| a.id), Some(HouseAttributeId::new(3)));
    }
}
