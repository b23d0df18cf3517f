use contracts::domain::a004_house::custom_order::{CustomHouseDraft, CustomOrderQuote};
use contracts::shared::validation::ValidationError;
use thiserror::Error;

use crate::domain::a006_order::lifecycle::OrderBackend;
use crate::shared::api_error::ApiError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CustomOrderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Оформить индивидуальный проект: дом и заказ создаются одним запросом.
///
/// Возвращает оценку, с которой заказ ушёл на бэкенд.
pub async fn submit_custom_order<B: OrderBackend>(
    backend: &B,
    draft: &CustomHouseDraft,
) -> Result<CustomOrderQuote, CustomOrderError> {
    let quote = draft.quote()?;
    match backend.create_order(&quote.request).await {
        Ok(()) => {
            log::info!(
                "Индивидуальный заказ «{}» отправлен, оценка {}",
                draft.name.trim(),
                quote.estimated_price
            );
            Ok(quote)
        }
        Err(e) => {
            log::warn!("Индивидуальный заказ не создан: {}", e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_order::lifecycle::tests::StubBackend;
    use contracts::domain::a001_house_attribute::aggregate::HouseAttributeId;
    use contracts::domain::a006_order::aggregate::CreateOrderRequest;
    use contracts::domain::common::BindingSet;
    use contracts::enums::HouseStatus;

    fn draft() -> CustomHouseDraft {
        let mut attributes = BindingSet::new();
        attributes.add_with_value(HouseAttributeId::new(1), "50000");
        attributes.add_with_value(HouseAttributeId::new(2), "кирпич");
        CustomHouseDraft {
            name: "Мой дом".into(),
            description: String::new(),
            district: "Заречный".into(),
            address: "ул. Садовая, 5".into(),
            floors: 5,
            entrances: 2,
            attributes,
        }
    }

    #[tokio::test]
    async fn test_custom_order_sends_estimate() {
        let backend = StubBackend::default();
        let quote = submit_custom_order(&backend, &draft()).await.unwrap();

        let expected = (5.0 * 2.0 * 63.37 * 144260.0 + 50000.0_f64).round();
        assert_eq!(quote.estimated_price, expected);

        let created = backend.created.borrow();
        match &created[0] {
            CreateOrderRequest::CustomHouse {
                house,
                contract_price,
            } => {
                assert_eq!(*contract_price, expected);
                assert!(house.is_order);
                assert_eq!(house.status, HouseStatus::Project);
                assert_eq!(house.attributes.len(), 2);
            }
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_geometry_is_rejected_locally() {
        let backend = StubBackend::default();
        let mut draft = draft();
        draft.floors = 0;

        let err = submit_custom_order(&backend, &draft).await.unwrap_err();
        assert!(matches!(err, CustomOrderError::Validation(ref e) if e.field == "floors"));
        assert!(backend.created.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_backend_rejection_is_reported() {
        let backend = StubBackend::failing(ApiError::Unauthorized);
        let err = submit_custom_order(&backend, &draft()).await.unwrap_err();
        assert_eq!(err, CustomOrderError::Api(ApiError::Unauthorized));
    }
}
