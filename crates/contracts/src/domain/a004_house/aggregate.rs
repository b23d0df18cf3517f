use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_house_attribute::aggregate::{
    HouseAttributeForm, HouseAttributeId, HouseAttributeValue,
};
use crate::domain::a005_apartment::aggregate::Apartment;
use crate::domain::common::{AggregateId, AggregateRoot, BindingSet};
use crate::enums::HouseStatus;
use crate::shared::validation::{ValidationError, ValidationRules};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор дома
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseId(pub i64);

impl HouseId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for HouseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(HouseId::new)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Дополнительное изображение дома
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseImage {
    pub id: i64,
    pub image: String,
}

/// Дом: типовой из каталога или созданный индивидуальным заказом (`is_order`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub id: HouseId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub main_image: Option<String>,
    pub status: HouseStatus,
    #[serde(default)]
    pub is_order: bool,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub address: String,
    pub floors: i32,
    pub entrances: i32,
    #[serde(default)]
    pub begin_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub start_price: Option<f64>,
    #[serde(default)]
    pub final_price: Option<f64>,
    /// Привязки атрибутов в порядке, отданном бэкендом
    #[serde(default)]
    pub attributes: Vec<HouseAttributeValue>,
    #[serde(default)]
    pub images: Vec<HouseImage>,
    #[serde(default)]
    pub apartments: Vec<Apartment>,
}

impl House {
    pub fn attribute_bindings(&self) -> BindingSet<HouseAttributeId> {
        HouseAttributeValue::to_bindings(&self.attributes)
    }

    /// Суммарное число квартир в доме
    pub fn apartment_units(&self) -> i32 {
        self.apartments.iter().map(|a| a.count).sum()
    }
}

impl AggregateRoot for House {
    type Id = HouseId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "houses"
    }

    fn element_name() -> &'static str {
        "Дом"
    }

    fn list_name() -> &'static str {
        "Дома"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления дома
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HouseForm {
    pub name: String,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    pub status: HouseStatus,
    pub is_order: bool,
    pub district: String,
    pub address: String,
    pub floors: i32,
    pub entrances: i32,
    pub begin_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_price: Option<f64>,
    pub final_price: Option<f64>,
    pub attributes: Vec<HouseAttributeForm>,
}

impl HouseForm {
    /// Заполнить форму из существующего дома (режим редактирования)
    pub fn from_house(house: &House) -> Self {
        Self {
            name: house.name.clone(),
            description: house.description.clone(),
            main_image: house.main_image.clone(),
            status: house.status,
            is_order: house.is_order,
            district: house.district.clone(),
            address: house.address.clone(),
            floors: house.floors,
            entrances: house.entrances,
            begin_date: house.begin_date,
            end_date: house.end_date,
            start_price: house.start_price,
            final_price: house.final_price,
            attributes: HouseAttributeForm::from_bindings(&house.attribute_bindings()),
        }
    }

    /// Заменить привязки атрибутов формы
    pub fn with_bindings(mut self, bindings: &BindingSet<HouseAttributeId>) -> Self {
        self.attributes = HouseAttributeForm::from_bindings(bindings);
        self
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationRules::required()
            .with_max_length(255)
            .validate_string(&self.name, "name", "Название")?;
        ValidationRules::none()
            .with_max_length(255)
            .validate_string(&self.address, "address", "Адрес")?;

        validate_geometry(self.floors, self.entrances)?;

        let non_negative = ValidationRules::none().with_min(0.0);
        if let Some(price) = self.start_price {
            non_negative.validate_number(price, "start_price", "Начальная цена")?;
        }
        if let Some(price) = self.final_price {
            non_negative.validate_number(price, "final_price", "Конечная цена")?;
        }
        if let (Some(start), Some(end)) = (self.start_price, self.final_price) {
            if start > end {
                return Err(ValidationError::new(
                    "final_price",
                    "Конечная цена не может быть меньше начальной",
                ));
            }
        }

        if let (Some(begin), Some(end)) = (self.begin_date, self.end_date) {
            if begin > end {
                return Err(ValidationError::new(
                    "end_date",
                    "Дата окончания строительства раньше даты начала",
                ));
            }
        }

        Ok(())
    }
}

/// Проверка этажности и числа подъездов
pub fn validate_geometry(floors: i32, entrances: i32) -> Result<(), ValidationError> {
    let at_least_one = ValidationRules::none().with_min(1.0);
    at_least_one.validate_number(f64::from(floors), "floors", "Количество этажей")?;
    at_least_one.validate_number(f64::from(entrances), "entrances", "Количество подъездов")?;
    Ok(())
}

/// Фильтр списка домов (query string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HouseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HouseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_order: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_attribute: Option<HouseAttributeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> HouseForm {
        HouseForm {
            name: "ЖК Северный".into(),
            district: "Центральный".into(),
            address: "ул. Ленина, 1".into(),
            floors: 9,
            entrances: 3,
            start_price: Some(5_000_000.0),
            final_price: Some(9_000_000.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_geometry_must_be_positive() {
        let mut form = valid_form();
        form.floors = 0;
        assert_eq!(form.validate().unwrap_err().field, "floors");

        let mut form = valid_form();
        form.entrances = -1;
        assert_eq!(form.validate().unwrap_err().field, "entrances");
    }

    #[test]
    fn test_price_range_and_dates() {
        let mut form = valid_form();
        form.final_price = Some(1.0);
        assert_eq!(form.validate().unwrap_err().field, "final_price");

        let mut form = valid_form();
        form.begin_date = NaiveDate::from_ymd_opt(2026, 5, 1);
        form.end_date = NaiveDate::from_ymd_opt(2025, 5, 1);
        assert_eq!(form.validate().unwrap_err().field, "end_date");
    }

    #[test]
    fn test_house_deserializes_backend_shape() {
        let house: House = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Дом на заказ",
                "description": null,
                "main_image": "placeholder.png",
                "status": "PROJECT",
                "is_order": true,
                "district": "Южный",
                "address": "ул. Мира, 5",
                "floors": 5,
                "entrances": 2,
                "begin_date": "2026-03-01",
                "end_date": null,
                "start_price": null,
                "final_price": null,
                "attributes": [
                    {"attribute": {"id": 1, "name": "Паркинг", "description": null}, "value": "50000"}
                ],
                "images": [{"id": 3, "image": "a.png"}],
                "apartments": []
            }"#,
        )
        .unwrap();

        assert_eq!(house.id, HouseId::new(7));
        assert!(house.is_order);
        assert_eq!(house.status, HouseStatus::Project);
        assert_eq!(house.begin_date, NaiveDate::from_ymd_opt(2026, 3, 1));

        let form = HouseForm::from_house(&house);
        assert_eq!(form.attributes.len(), 1);
        assert_eq!(form.attributes[0].value, "50000");
    }
}
