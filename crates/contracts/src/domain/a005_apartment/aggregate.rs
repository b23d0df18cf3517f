use serde::{Deserialize, Serialize};

use crate::domain::a002_apartment_parameter::aggregate::{
    ApartmentParameterForm, ApartmentParameterId, ApartmentParameterValue,
};
use crate::domain::a003_apartment_category::aggregate::{ApartmentCategory, ApartmentCategoryId};
use crate::domain::a004_house::aggregate::HouseId;
use crate::domain::common::{AggregateId, AggregateRoot, BindingSet};
use crate::shared::validation::{ValidationError, ValidationRules};

/// Уникальный идентификатор квартиры
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApartmentId(pub i64);

impl ApartmentId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for ApartmentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(ApartmentId::new)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApartmentImage {
    pub id: i64,
    pub image: String,
}

/// Квартира (планировка) в составе дома
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    pub id: ApartmentId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub main_image: Option<String>,
    pub rooms: i32,
    pub area: f64,
    pub id_house: HouseId,
    /// Количество таких квартир в доме
    pub count: i32,
    pub category: ApartmentCategory,
    #[serde(default)]
    pub parameters: Vec<ApartmentParameterValue>,
    #[serde(default)]
    pub images: Vec<ApartmentImage>,
}

impl Apartment {
    pub fn parameter_bindings(&self) -> BindingSet<ApartmentParameterId> {
        ApartmentParameterValue::to_bindings(&self.parameters)
    }
}

impl AggregateRoot for Apartment {
    type Id = ApartmentId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "apartments"
    }

    fn element_name() -> &'static str {
        "Квартира"
    }

    fn list_name() -> &'static str {
        "Квартиры"
    }
}

/// DTO для создания/обновления квартиры
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApartmentForm {
    pub name: String,
    pub description: String,
    pub id_category: Option<ApartmentCategoryId>,
    pub rooms: i32,
    pub area: f64,
    pub id_house: HouseId,
    pub count: i32,
    pub parameters: Vec<ApartmentParameterForm>,
}

impl ApartmentForm {
    /// Пустая форма новой квартиры в доме
    pub fn new_for_house(id_house: HouseId) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            id_category: None,
            rooms: 1,
            area: 0.0,
            id_house,
            count: 1,
            parameters: Vec::new(),
        }
    }

    pub fn from_apartment(apartment: &Apartment) -> Self {
        Self {
            name: apartment.name.clone(),
            description: apartment.description.clone(),
            id_category: Some(apartment.category.id),
            rooms: apartment.rooms,
            area: apartment.area,
            id_house: apartment.id_house,
            count: apartment.count,
            parameters: ApartmentParameterForm::from_bindings(&apartment.parameter_bindings()),
        }
    }

    pub fn with_bindings(mut self, bindings: &BindingSet<ApartmentParameterId>) -> Self {
        self.parameters = ApartmentParameterForm::from_bindings(bindings);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationRules::required()
            .with_max_length(255)
            .validate_string(&self.name, "name", "Название")?;
        ValidationRules::none()
            .with_min(1.0)
            .validate_number(f64::from(self.rooms), "rooms", "Количество комнат")?;
        if !(self.area.is_finite() && self.area > 0.0) {
            return Err(ValidationError::new("area", "Площадь должна быть больше нуля"));
        }
        ValidationRules::none()
            .with_min(0.0)
            .validate_number(f64::from(self.count), "count", "Количество квартир")?;
        if self.id_category.is_none() {
            return Err(ValidationError::new("id_category", "Выберите категорию"));
        }
        Ok(())
    }
}

/// Фильтры списка квартир (GET /apartments/?...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApartmentQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_category: Option<ApartmentCategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_house: Option<HouseId>,
}

impl ApartmentQuery {
    pub fn for_house(id_house: HouseId) -> Self {
        Self {
            id_house: Some(id_house),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let mut form = ApartmentForm::new_for_house(HouseId::new(1));
        form.name = "2-комнатная".into();
        form.area = 54.5;
        assert_eq!(form.validate().unwrap_err().field, "id_category");

        form.id_category = Some(ApartmentCategoryId::new(2));
        assert!(form.validate().is_ok());

        form.area = 0.0;
        assert_eq!(form.validate().unwrap_err().field, "area");
    }

    #[test]
    fn test_apartment_round_trip_to_form() {
        let apartment: Apartment = serde_json::from_str(
            r#"{
                "id": 5, "name": "Студия", "description": "", "main_image": "s.png",
                "rooms": 1, "area": 28.4, "id_house": 7, "count": 12,
                "category": {"id": 1, "name": "Эконом"},
                "parameters": [{"parameter": {"id": 3, "name": "Балкон"}, "value": "да"}],
                "images": []
            }"#,
        )
        .unwrap();

        let form = ApartmentForm::from_apartment(&apartment);
        assert_eq!(form.id_category, Some(ApartmentCategoryId::new(1)));
        assert_eq!(form.parameters[0].id_parameter, ApartmentParameterId::new(3));
        assert_eq!(Apartment::element_path(&apartment.id), "/apartments/5");
    }
}
