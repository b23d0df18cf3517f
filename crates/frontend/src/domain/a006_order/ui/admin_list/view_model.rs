use std::collections::HashMap;
use std::rc::Rc;

use contracts::domain::a006_order::aggregate::{Order, OrderId, OrderQuery};
use contracts::domain::a006_order::filter::OrderFilter;
use contracts::enums::OrderStatus;
use leptos::prelude::*;

use crate::domain::a006_order::OrderLifecycle;
use crate::shared::rest_client::RestClient;

#[derive(Clone)]
pub struct AdminOrdersViewModel {
    lifecycle: Rc<OrderLifecycle<RestClient>>,
    pub orders: RwSignal<Vec<Order>>,
    pub filter: RwSignal<OrderFilter>,
    /// Введённая цена договора по заказам
    pub price_drafts: RwSignal<HashMap<OrderId, String>>,
    /// Заказ, чей переход сейчас отправляется
    pub pending: RwSignal<Option<OrderId>>,
    pub error: RwSignal<Option<String>>,
}

impl AdminOrdersViewModel {
    pub fn new(client: RestClient) -> Self {
        Self {
            lifecycle: Rc::new(OrderLifecycle::new(client)),
            orders: RwSignal::new(Vec::new()),
            filter: RwSignal::new(OrderFilter::default()),
            price_drafts: RwSignal::new(HashMap::new()),
            pending: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self) {
        let lifecycle = self.lifecycle.clone();
        let orders = self.orders;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match lifecycle.list_orders(&OrderQuery::default()).await {
                Ok(list) => orders.set(list),
                Err(e) => error.set(Some(format!("Ошибка загрузки заказов: {}", e))),
            }
        });
    }

    pub fn visible(&self) -> impl Fn() -> Vec<Order> + '_ {
        move || {
            let filter = self.filter.get();
            self.orders
                .with(|orders| filter.apply(orders).into_iter().cloned().collect())
        }
    }

    pub fn set_search(&self, search: String) {
        self.filter.update(|f| f.search = search);
    }

    pub fn set_status_filter(&self, code: &str) {
        self.filter.update(|f| f.status = OrderStatus::from_code(code));
    }

    pub fn set_price_draft(&self, id: OrderId, raw: String) {
        self.price_drafts.update(|drafts| {
            drafts.insert(id, raw);
        });
    }

    /// Статусы, доступные в выпадающем списке заказа
    pub fn targets(status: OrderStatus) -> &'static [OrderStatus] {
        status.allowed_targets()
    }

    pub fn is_locked(&self, id: OrderId) -> impl Fn() -> bool + '_ {
        move || self.pending.get() == Some(id)
    }

    pub fn change_status_command(&self, id: OrderId, target: OrderStatus) {
        if self.pending.get_untracked().is_some() {
            return;
        }
        let Some(mut order) = self
            .orders
            .with_untracked(|orders| orders.iter().find(|o| o.id == id).cloned())
        else {
            return;
        };
        let price = self
            .price_drafts
            .with_untracked(|drafts| drafts.get(&id).cloned());

        let vm = self.clone();
        self.pending.set(Some(id));
        wasm_bindgen_futures::spawn_local(async move {
            match vm
                .lifecycle
                .request_transition(&mut order, target, price.as_deref())
                .await
            {
                Ok(()) => {
                    vm.orders.update(|orders| {
                        if let Some(slot) = orders.iter_mut().find(|o| o.id == id) {
                            *slot = order;
                        }
                    });
                    vm.price_drafts.update(|drafts| {
                        drafts.remove(&id);
                    });
                    vm.error.set(None);
                }
                Err(e) => vm.error.set(Some(e.to_string())),
            }
            vm.pending.set(None);
        });
    }
}
