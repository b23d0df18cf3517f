use std::rc::Rc;

use contracts::domain::a006_order::aggregate::{Order, OrderId, OrderQuery};
use contracts::domain::a006_order::error::OrderError;
use contracts::domain::a006_order::payment::{
    format_card_number, format_expiry, CardErrors, PaymentCardForm,
};
use leptos::prelude::*;

use crate::domain::a006_order::{LifecycleError, OrderLifecycle};
use crate::shared::rest_client::RestClient;

#[derive(Clone)]
pub struct UserOrdersViewModel {
    lifecycle: Rc<OrderLifecycle<RestClient>>,
    pub orders: RwSignal<Vec<Order>>,
    pub pending: RwSignal<Option<OrderId>>,
    /// Заказ, для которого открыта форма оплаты
    pub paying: RwSignal<Option<OrderId>>,
    pub card: RwSignal<PaymentCardForm>,
    pub card_errors: RwSignal<CardErrors>,
    pub toast: RwSignal<Option<String>>,
}

impl UserOrdersViewModel {
    pub fn new(client: RestClient) -> Self {
        Self {
            lifecycle: Rc::new(OrderLifecycle::new(client)),
            orders: RwSignal::new(Vec::new()),
            pending: RwSignal::new(None),
            paying: RwSignal::new(None),
            card: RwSignal::new(PaymentCardForm::default()),
            card_errors: RwSignal::new(CardErrors::default()),
            toast: RwSignal::new(None),
        }
    }

    pub fn load(&self, id_user: i64) {
        let lifecycle = self.lifecycle.clone();
        let orders = self.orders;
        let toast = self.toast;
        let query = OrderQuery {
            id_user: Some(id_user),
            ..OrderQuery::default()
        };
        wasm_bindgen_futures::spawn_local(async move {
            match lifecycle.list_orders(&query).await {
                Ok(list) => orders.set(list),
                Err(e) => toast.set(Some(format!("Ошибка загрузки заказов: {}", e))),
            }
        });
    }

    /// Кнопки отмены и оплаты скрыты у заказов в конечном статусе
    pub fn can_cancel(order: &Order) -> bool {
        !order.status.is_terminal()
    }

    pub fn set_card_number(&self, raw: &str) {
        let formatted = format_card_number(raw);
        self.card.update(|c| c.number = formatted);
    }

    pub fn set_expiry(&self, raw: &str) {
        let formatted = format_expiry(raw);
        self.card.update(|c| c.expiry = formatted);
    }

    pub fn open_payment(&self, id: OrderId) {
        self.paying.set(Some(id));
        self.card.set(PaymentCardForm::default());
        self.card_errors.set(CardErrors::default());
    }

    pub fn cancel_command(&self, id: OrderId) {
        self.run(id, |lifecycle, mut order| async move {
            let result = lifecycle.cancel(&mut order).await;
            (order, result)
        });
    }

    pub fn pay_command(&self) {
        let Some(id) = self.paying.get_untracked() else {
            return;
        };
        let card = self.card.get_untracked();
        let card_errors = self.card_errors;
        let paying = self.paying;
        self.run(id, move |lifecycle, mut order| async move {
            let result = lifecycle.pay(&mut order, &card).await;
            match &result {
                Err(LifecycleError::Order(OrderError::InvalidCard(errors))) => {
                    card_errors.set(errors.clone())
                }
                Ok(()) => {
                    card_errors.set(CardErrors::default());
                    paying.set(None);
                }
                Err(_) => {}
            }
            (order, result)
        });
    }

    /// Отправить переход по копии заказа и вернуть её в список при успехе
    fn run<F, Fut>(&self, id: OrderId, action: F)
    where
        F: FnOnce(Rc<OrderLifecycle<RestClient>>, Order) -> Fut + 'static,
        Fut: std::future::Future<Output = (Order, Result<(), LifecycleError>)> + 'static,
    {
        if self.pending.get_untracked().is_some() {
            return;
        }
        let Some(order) = self
            .orders
            .with_untracked(|orders| orders.iter().find(|o| o.id == id).cloned())
        else {
            return;
        };

        let vm = self.clone();
        self.pending.set(Some(id));
        wasm_bindgen_futures::spawn_local(async move {
            let (order, result) = action(vm.lifecycle.clone(), order).await;
            match result {
                Ok(()) => {
                    vm.orders.update(|orders| {
                        if let Some(slot) = orders.iter_mut().find(|o| o.id == id) {
                            *slot = order;
                        }
                    });
                    vm.toast.set(None);
                }
                Err(e) => vm.toast.set(Some(e.to_string())),
            }
            vm.pending.set(None);
        });
    }
}
