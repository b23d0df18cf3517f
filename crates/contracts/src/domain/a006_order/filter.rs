use super::aggregate::Order;
use crate::enums::OrderStatus;

/// Фильтр списка заказов в админке
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    /// Подстрока имени пользователя или названия дома
    pub search: String,
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        if self.status.is_some_and(|status| status != order.status) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || order.user.name.to_lowercase().contains(&needle)
            || order.house.name.to_lowercase().contains(&needle)
    }

    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|order| self.matches(order)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders() -> Vec<Order> {
        serde_json::from_value(serde_json::json!([
            {
                "id": 1, "status": "PENDING", "create_date": "2026-02-01",
                "user": {"id": 1, "name": "Иван Петров"},
                "house": {"id": 1, "name": "Коттедж"}
            },
            {
                "id": 2, "status": "PAID", "contract_price": 3000000.0, "create_date": "2026-02-03",
                "user": {"id": 2, "name": "Мария"},
                "house": {"id": 2, "name": "ЖК Речной"}
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let orders = orders();
        let filter = OrderFilter {
            search: "иван".into(),
            status: None,
        };
        let found = filter.apply(&orders);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.value(), 1);

        let by_house = OrderFilter {
            search: "речной".into(),
            status: None,
        };
        assert_eq!(by_house.apply(&orders)[0].id.value(), 2);
    }

    #[test]
    fn test_status_combines_with_search() {
        let orders = orders();
        let filter = OrderFilter {
            search: "иван".into(),
            status: Some(OrderStatus::Paid),
        };
        assert!(filter.apply(&orders).is_empty());
        assert_eq!(OrderFilter::default().apply(&orders).len(), 2);
    }
}
