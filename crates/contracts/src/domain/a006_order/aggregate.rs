use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a004_house::aggregate::{HouseForm, HouseId};
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::{HouseStatus, OrderStatus};
use crate::system::auth::UserInfo;

/// Уникальный идентификатор заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl OrderId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(OrderId::new)
    }
}

/// Краткие сведения о доме в составе заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseSummary {
    pub id: HouseId,
    pub name: String,
    #[serde(default)]
    pub is_order: bool,
    #[serde(default)]
    pub status: Option<HouseStatus>,
}

/// Заказ дома
///
/// Статус меняется только через переходы из `lifecycle`, которые
/// сначала проверяются локально, затем сохраняются на бэкенде.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user: UserInfo,
    pub house: HouseSummary,
    pub status: OrderStatus,
    /// Цена договора, фиксируется при утверждении
    #[serde(default)]
    pub contract_price: Option<f64>,
    pub create_date: NaiveDate,
    #[serde(default)]
    pub update_date: Option<NaiveDate>,
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_name() -> &'static str {
        "Заказ"
    }

    fn list_name() -> &'static str {
        "Заказы"
    }
}

/// Тело PUT /orders/{id}: новый статус и цена договора одним обновлением
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
    pub contract_price: Option<f64>,
}

/// Тело POST /orders/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreateOrderRequest {
    /// Индивидуальный проект: дом создаётся вместе с заказом
    CustomHouse { house: HouseForm, contract_price: f64 },
    /// Покупка готового дома из каталога. Бэкенд должен принимать `id_house`
    /// вместо вложенного дома.
    ExistingHouse { id_house: HouseId, contract_price: f64 },
}

impl CreateOrderRequest {
    pub fn contract_price(&self) -> f64 {
        match self {
            CreateOrderRequest::CustomHouse { contract_price, .. }
            | CreateOrderRequest::ExistingHouse { contract_price, .. } => *contract_price,
        }
    }
}

/// Фильтры списка заказов (GET /orders/?...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_user: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_house: Option<HouseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::Role;

    #[test]
    fn test_order_deserializes_backend_shape() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 12,
                "user": {"id": 1, "name": "Иван", "role": "USER"},
                "house": {"id": 4, "name": "ЖК Северный", "is_order": true, "status": "PROJECT"},
                "status": "AWAITING_PAYMENT",
                "contract_price": 2500000.0,
                "create_date": "2026-03-01"
            }"#,
        )
        .unwrap();

        assert_eq!(order.id, OrderId::new(12));
        assert_eq!(order.user.role, Role::User);
        assert_eq!(order.status, OrderStatus::AwaitingPayment);
        assert_eq!(order.update_date, None);
        assert_eq!(Order::element_path(&order.id), "/orders/12");
    }

    #[test]
    fn test_status_update_serializes_null_price() {
        let update = OrderStatusUpdate {
            status: OrderStatus::InProgress,
            contract_price: None,
        };
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            serde_json::json!({ "status": "IN_PROGRESS", "contract_price": null })
        );
    }

    #[test]
    fn test_existing_house_request_shape() {
        let request = CreateOrderRequest::ExistingHouse {
            id_house: HouseId::new(3),
            contract_price: 9_000_000.0,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "id_house": 3, "contract_price": 9000000.0 })
        );
        assert_eq!(request.contract_price(), 9_000_000.0);
    }
}
