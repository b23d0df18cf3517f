use thiserror::Error;

use super::payment::CardErrors;
use crate::enums::OrderStatus;

/// Ошибки переходов заказа, обнаруженные до обращения к бэкенду
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    #[error("Укажите корректную цену договора (число больше нуля)")]
    InvalidPrice,

    #[error("Нельзя перевести заказ из статуса «{from}» в статус «{to}»")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },

    #[error("Заказ уже в конечном статусе «{0}»")]
    AlreadyTerminal(OrderStatus),

    #[error("Заказ не ожидает оплаты (текущий статус «{0}»)")]
    PaymentNotExpected(OrderStatus),

    #[error("Проверьте данные карты: {0}")]
    InvalidCard(CardErrors),
}
