use serde::{Deserialize, Serialize};

use super::aggregate::{validate_geometry, HouseForm};
use super::pricing;
use crate::domain::a001_house_attribute::aggregate::{HouseAttributeForm, HouseAttributeId};
use crate::domain::a006_order::aggregate::CreateOrderRequest;
use crate::domain::common::BindingSet;
use crate::enums::HouseStatus;
use crate::shared::validation::{ValidationError, ValidationRules};

/// Черновик индивидуального дома, который пользователь собирает перед заказом
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomHouseDraft {
    pub name: String,
    pub description: String,
    pub district: String,
    pub address: String,
    pub floors: i32,
    pub entrances: i32,
    pub attributes: BindingSet<HouseAttributeId>,
}

/// Итог проверки черновика: тело запроса и оценка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomOrderQuote {
    pub request: CreateOrderRequest,
    pub estimated_price: f64,
}

impl CustomHouseDraft {
    pub fn estimated_price(&self) -> f64 {
        pricing::estimate(self.floors, self.entrances, &self.attributes)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationRules::required()
            .with_max_length(255)
            .validate_string(&self.name, "name", "Название")?;
        ValidationRules::required().validate_string(&self.address, "address", "Адрес")?;
        validate_geometry(self.floors, self.entrances)?;

        if self.estimated_price() <= 0.0 {
            return Err(ValidationError::new(
                "attributes",
                "Оценочная стоимость должна быть положительной",
            ));
        }
        Ok(())
    }

    /// Проверить черновик и собрать запрос на создание заказа.
    /// Дом отправляется с `is_order = true` и статусом PROJECT.
    pub fn quote(&self) -> Result<CustomOrderQuote, ValidationError> {
        self.validate()?;

        let estimated_price = self.estimated_price();
        let description = self.description.trim();
        let house = HouseForm {
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            main_image: None,
            status: HouseStatus::Project,
            is_order: true,
            district: self.district.trim().to_string(),
            address: self.address.trim().to_string(),
            floors: self.floors,
            entrances: self.entrances,
            begin_date: None,
            end_date: None,
            start_price: Some(estimated_price),
            final_price: Some(estimated_price),
            attributes: HouseAttributeForm::from_bindings(&self.attributes),
        };

        Ok(CustomOrderQuote {
            request: CreateOrderRequest::CustomHouse {
                house,
                contract_price: estimated_price,
            },
            estimated_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CustomHouseDraft {
        let mut attributes = BindingSet::new();
        attributes.add_with_value(HouseAttributeId::new(1), "50000");
        attributes.add_with_value(HouseAttributeId::new(2), "монолит");
        CustomHouseDraft {
            name: "Мой дом".into(),
            description: String::new(),
            district: "Заречный".into(),
            address: "ул. Садовая, 10".into(),
            floors: 5,
            entrances: 2,
            attributes,
        }
    }

    #[test]
    fn test_quote_uses_estimate_as_contract_price() {
        let quote = draft().quote().unwrap();
        let expected = (5.0 * 2.0 * 63.37 * 144260.0 + 50000.0_f64).round();
        assert_eq!(quote.estimated_price, expected);

        let json = serde_json::to_value(&quote.request).unwrap();
        assert_eq!(json["contract_price"], serde_json::json!(expected));
        assert_eq!(json["house"]["is_order"], serde_json::json!(true));
        assert_eq!(json["house"]["status"], serde_json::json!("PROJECT"));
        assert_eq!(json["house"]["description"], serde_json::Value::Null);
        assert_eq!(
            json["house"]["attributes"],
            serde_json::json!([
                {"id_attribute": 1, "value": "50000"},
                {"id_attribute": 2, "value": "монолит"}
            ])
        );
    }

    #[test]
    fn test_non_positive_geometry_is_rejected() {
        let mut d = draft();
        d.floors = 0;
        assert_eq!(d.quote().unwrap_err().field, "floors");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut d = draft();
        d.name = "  ".into();
        assert_eq!(d.validate().unwrap_err().field, "name");
    }
}
