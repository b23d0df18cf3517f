//! Переходы заказа между статусами.
//!
//! Каждый переход сначала планируется: проверяются таблица переходов и цена,
//! получается `OrderStatusUpdate`. Заказ меняется через [`Order::apply`] только
//! после того, как бэкенд принял обновление.

use chrono::NaiveDate;

use super::aggregate::{Order, OrderStatusUpdate};
use super::error::OrderError;
use super::payment::PaymentCardForm;
use crate::enums::OrderStatus;
use crate::shared::amount::parse_positive_amount;

impl Order {
    /// Перевод заказа администратором.
    ///
    /// Для APPROVED цена обязательна. Для остальных статусов цена переносится
    /// без изменений, если не указана явно.
    pub fn plan_transition(
        &self,
        target: OrderStatus,
        supplied_price: Option<&str>,
    ) -> Result<OrderStatusUpdate, OrderError> {
        self.ensure_transition(target)?;

        let supplied = supplied_price
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(|raw| parse_positive_amount(raw).ok_or(OrderError::InvalidPrice))
            .transpose()?;

        if target == OrderStatus::Approved && supplied.is_none() {
            return Err(OrderError::InvalidPrice);
        }

        let contract_price = supplied.or(self.contract_price);
        if target.requires_contract_price() && !contract_price.is_some_and(|p| p > 0.0) {
            return Err(OrderError::InvalidPrice);
        }

        Ok(OrderStatusUpdate {
            status: target,
            contract_price,
        })
    }

    /// Отмена пользователем: цена сохраняется, пустая заменяется нулём
    pub fn plan_cancel(&self) -> Result<OrderStatusUpdate, OrderError> {
        self.ensure_transition(OrderStatus::Cancelled)?;
        Ok(OrderStatusUpdate {
            status: OrderStatus::Cancelled,
            contract_price: Some(self.contract_price.unwrap_or(0.0)),
        })
    }

    /// Оплата пользователем. Карта проверяется до обращения к бэкенду.
    pub fn plan_payment(
        &self,
        card: &PaymentCardForm,
        today: NaiveDate,
    ) -> Result<OrderStatusUpdate, OrderError> {
        if self.status.is_terminal() {
            return Err(OrderError::AlreadyTerminal(self.status));
        }
        if self.status != OrderStatus::AwaitingPayment {
            return Err(OrderError::PaymentNotExpected(self.status));
        }
        card.check(today).map_err(OrderError::InvalidCard)?;

        Ok(OrderStatusUpdate {
            status: OrderStatus::Paid,
            contract_price: self.contract_price,
        })
    }

    /// Применить обновление, принятое бэкендом
    pub fn apply(&mut self, update: &OrderStatusUpdate) {
        self.status = update.status;
        self.contract_price = update.contract_price;
    }

    fn ensure_transition(&self, target: OrderStatus) -> Result<(), OrderError> {
        if self.status.is_terminal() {
            return Err(OrderError::AlreadyTerminal(self.status));
        }
        if !self.status.can_transition_to(target) {
            return Err(OrderError::IllegalTransition {
                from: self.status,
                to: target,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_house::aggregate::HouseId;
    use crate::domain::a006_order::aggregate::{HouseSummary, OrderId};
    use crate::domain::a006_order::payment::CardField;
    use crate::system::auth::{Role, UserInfo};

    fn order(status: OrderStatus, contract_price: Option<f64>) -> Order {
        Order {
            id: OrderId::new(1),
            user: UserInfo {
                id: 7,
                name: "Иван Петров".into(),
                org_name: None,
                email: None,
                role: Role::User,
            },
            house: HouseSummary {
                id: HouseId::new(3),
                name: "Дом у озера".into(),
                is_order: true,
                status: None,
            },
            status,
            contract_price,
            create_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            update_date: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn valid_card() -> PaymentCardForm {
        PaymentCardForm {
            number: "4111 1111 1111 1111".into(),
            name: "IVAN IVANOV".into(),
            expiry: "12/30".into(),
            cvc: "123".into(),
        }
    }

    #[test]
    fn test_approve_without_price_fails_and_keeps_price() {
        let order = order(OrderStatus::Pending, Some(500.0));
        assert_eq!(
            order.plan_transition(OrderStatus::Approved, None),
            Err(OrderError::InvalidPrice)
        );
        assert_eq!(
            order.plan_transition(OrderStatus::Approved, Some("  ")),
            Err(OrderError::InvalidPrice)
        );
        assert_eq!(order.contract_price, Some(500.0));
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_approve_rejects_bad_prices() {
        let order = order(OrderStatus::Pending, None);
        for raw in ["0", "-10", "abc", "inf"] {
            assert_eq!(
                order.plan_transition(OrderStatus::Approved, Some(raw)),
                Err(OrderError::InvalidPrice),
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_approve_with_price_sets_contract_price() {
        let mut order = order(OrderStatus::Pending, None);
        let update = order
            .plan_transition(OrderStatus::Approved, Some("1000000"))
            .unwrap();
        order.apply(&update);
        assert_eq!(order.status, OrderStatus::Approved);
        assert_eq!(order.contract_price, Some(1_000_000.0));
    }

    #[test]
    fn test_other_targets_carry_price() {
        let order = order(OrderStatus::Approved, Some(2_000_000.0));
        let update = order.plan_transition(OrderStatus::InProgress, None).unwrap();
        assert_eq!(update.contract_price, Some(2_000_000.0));

        let update = order
            .plan_transition(OrderStatus::AwaitingPayment, Some("2 100 000,5"))
            .unwrap();
        assert_eq!(update.contract_price, Some(2_100_000.5));
    }

    #[test]
    fn test_priced_status_needs_positive_price() {
        let order = order(OrderStatus::Approved, None);
        assert_eq!(
            order.plan_transition(OrderStatus::InProgress, None),
            Err(OrderError::InvalidPrice)
        );
        assert!(order.plan_transition(OrderStatus::Cancelled, None).is_ok());
    }

    #[test]
    fn test_illegal_and_terminal_transitions() {
        let pending = order(OrderStatus::Pending, Some(100.0));
        assert_eq!(
            pending.plan_transition(OrderStatus::Paid, None),
            Err(OrderError::IllegalTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Paid,
            })
        );

        let completed = order(OrderStatus::Completed, Some(100.0));
        assert_eq!(
            completed.plan_transition(OrderStatus::InProgress, None),
            Err(OrderError::AlreadyTerminal(OrderStatus::Completed))
        );
    }

    #[test]
    fn test_cancel_defaults_price_to_zero() {
        let order = order(OrderStatus::Pending, None);
        let update = order.plan_cancel().unwrap();
        assert_eq!(update.status, OrderStatus::Cancelled);
        assert_eq!(update.contract_price, Some(0.0));
    }

    #[test]
    fn test_cancel_of_cancelled_order_is_terminal() {
        let order = order(OrderStatus::Cancelled, Some(10.0));
        assert_eq!(
            order.plan_cancel(),
            Err(OrderError::AlreadyTerminal(OrderStatus::Cancelled))
        );
        assert_eq!(order.status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_payment_requires_awaiting_status() {
        let order = order(OrderStatus::Approved, Some(10.0));
        assert_eq!(
            order.plan_payment(&valid_card(), today()),
            Err(OrderError::PaymentNotExpected(OrderStatus::Approved))
        );
    }

    #[test]
    fn test_payment_validates_card_first() {
        let order = order(OrderStatus::AwaitingPayment, Some(10.0));
        let mut card = valid_card();
        card.cvc = "1".into();
        match order.plan_payment(&card, today()) {
            Err(OrderError::InvalidCard(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.get(CardField::Cvc).is_some());
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let update = order.plan_payment(&valid_card(), today()).unwrap();
        assert_eq!(update.status, OrderStatus::Paid);
        assert_eq!(update.contract_price, Some(10.0));
    }
}
