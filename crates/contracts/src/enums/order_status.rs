use serde::{Deserialize, Serialize};

/// Статус заказа
///
/// Допустимые переходы задаёт [`OrderStatus::allowed_targets`]; конечные
/// статусы (`Completed`, `Cancelled`, `Sold`) переходов не имеют.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Новый заказ, ожидает рассмотрения
    Pending,
    /// Утвержден, ожидает начала работ
    Approved,
    /// В процессе строительства
    InProgress,
    AwaitingPayment,
    Paid,
    /// Проверка работы
    AwaitingSignOff,
    /// Подписан акт
    Signed,
    Completed,
    Cancelled,
    /// Куплен готовый дом
    Sold,
}

impl OrderStatus {
    /// Получить код статуса (как в API)
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Approved => "APPROVED",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::AwaitingPayment => "AWAITING_PAYMENT",
            OrderStatus::Paid => "PAID",
            OrderStatus::AwaitingSignOff => "AWAITING_SIGN_OFF",
            OrderStatus::Signed => "SIGNED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Sold => "SOLD",
        }
    }

    /// Получить человекочитаемое название
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "В ожидании",
            OrderStatus::Approved => "Подтвержден",
            OrderStatus::InProgress => "В процессе",
            OrderStatus::AwaitingPayment => "Ожидает оплаты",
            OrderStatus::Paid => "Оплачен",
            OrderStatus::AwaitingSignOff => "Ожидает подписания",
            OrderStatus::Signed => "Подписан",
            OrderStatus::Completed => "Завершен",
            OrderStatus::Cancelled => "Отменен",
            OrderStatus::Sold => "Продан",
        }
    }

    /// Получить все статусы
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Approved,
            OrderStatus::InProgress,
            OrderStatus::AwaitingPayment,
            OrderStatus::Paid,
            OrderStatus::AwaitingSignOff,
            OrderStatus::Signed,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
            OrderStatus::Sold,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Completed | OrderStatus::Cancelled | OrderStatus::Sold
        )
    }

    /// Таблица переходов: в какие статусы можно перевести заказ
    pub fn allowed_targets(&self) -> &'static [OrderStatus] {
        use OrderStatus::*;
        match self {
            Pending => &[Approved, Sold, Cancelled],
            Approved => &[InProgress, AwaitingPayment, Cancelled],
            InProgress => &[AwaitingPayment, AwaitingSignOff, Cancelled],
            AwaitingPayment => &[Paid, Cancelled],
            Paid => &[InProgress, AwaitingSignOff, Cancelled],
            AwaitingSignOff => &[Signed, InProgress, Cancelled],
            Signed => &[Completed, Cancelled],
            Completed | Cancelled | Sold => &[],
        }
    }

    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        self.allowed_targets().contains(&target)
    }

    /// Требует ли статус положительной цены договора
    pub fn requires_contract_price(&self) -> bool {
        !matches!(self, OrderStatus::Pending | OrderStatus::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
