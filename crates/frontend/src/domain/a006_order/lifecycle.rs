//! Сервис переходов заказа.
//!
//! Переход проверяется локально (таблица статусов, цена, карта), затем
//! отправляется на бэкенд одним PUT. Локальный заказ меняется только после
//! успешного ответа; при ошибке остаётся прежний статус.

use async_trait::async_trait;
use chrono::NaiveDate;
use contracts::domain::a004_house::aggregate::House;
use contracts::domain::a006_order::aggregate::{
    CreateOrderRequest, Order, OrderId, OrderQuery, OrderStatusUpdate,
};
use contracts::domain::a006_order::error::OrderError;
use contracts::domain::a006_order::payment::PaymentCardForm;
use contracts::enums::OrderStatus;
use thiserror::Error;

use crate::shared::api_error::ApiError;

#[async_trait(?Send)]
pub trait OrderBackend {
    async fn fetch_orders(&self, query: &OrderQuery) -> Result<Vec<Order>, ApiError>;

    async fn create_order(&self, request: &CreateOrderRequest) -> Result<(), ApiError>;

    async fn update_order(&self, id: OrderId, update: &OrderStatusUpdate) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifecycleError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Clone)]
pub struct OrderLifecycle<B> {
    backend: B,
}

impl<B: OrderBackend> OrderLifecycle<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn list_orders(&self, query: &OrderQuery) -> Result<Vec<Order>, LifecycleError> {
        Ok(self.backend.fetch_orders(query).await?)
    }

    /// Смена статуса администратором
    pub async fn request_transition(
        &self,
        order: &mut Order,
        target: OrderStatus,
        supplied_price: Option<&str>,
    ) -> Result<(), LifecycleError> {
        let update = order.plan_transition(target, supplied_price)?;
        self.persist(order, update).await
    }

    /// Отмена пользователем. Конфликт на бэкенде означает, что заказ
    /// уже отменён в другой сессии.
    pub async fn cancel(&self, order: &mut Order) -> Result<(), LifecycleError> {
        let update = order.plan_cancel()?;
        match self.persist(order, update).await {
            Err(LifecycleError::Api(ApiError::Conflict(_))) => {
                Err(OrderError::AlreadyTerminal(OrderStatus::Cancelled).into())
            }
            other => other,
        }
    }

    pub async fn pay(&self, order: &mut Order, card: &PaymentCardForm) -> Result<(), LifecycleError> {
        self.pay_on(order, card, chrono::Local::now().date_naive())
            .await
    }

    /// Оплата с явной текущей датой (для проверки срока действия карты)
    pub async fn pay_on(
        &self,
        order: &mut Order,
        card: &PaymentCardForm,
        today: NaiveDate,
    ) -> Result<(), LifecycleError> {
        let update = order.plan_payment(card, today)?;
        self.persist(order, update).await
    }

    /// Заказ готового дома по его конечной (или стартовой) цене
    pub async fn place_order_for_house(&self, house: &House) -> Result<(), LifecycleError> {
        let contract_price = house
            .final_price
            .or(house.start_price)
            .filter(|p| *p > 0.0)
            .ok_or(OrderError::InvalidPrice)?;
        let request = CreateOrderRequest::ExistingHouse {
            id_house: house.id,
            contract_price,
        };
        self.backend.create_order(&request).await?;
        log::info!("Заказ дома «{}» создан", house.name);
        Ok(())
    }

    async fn persist(&self, order: &mut Order, update: OrderStatusUpdate) -> Result<(), LifecycleError> {
        match self.backend.update_order(order.id, &update).await {
            Ok(()) => {
                log::info!(
                    "Заказ {}: {} -> {}",
                    order.id.value(),
                    order.status.code(),
                    update.status.code()
                );
                order.apply(&update);
                Ok(())
            }
            Err(e) => {
                log::warn!(
                    "Заказ {}: переход в {} отклонён: {}",
                    order.id.value(),
                    update.status.code(),
                    e
                );
                Err(e.into())
            }
        }
    }
}
