use contracts::domain::a004_house::aggregate::{House, HouseId, HouseQuery};
use leptos::prelude::*;

use crate::domain::a004_house::api;
use crate::domain::a006_order::OrderLifecycle;
use crate::shared::rest_client::RestClient;

/// ViewModel каталога домов: фильтры, список, заказ готового дома
#[derive(Clone)]
pub struct HouseListViewModel {
    client: RestClient,
    pub query: RwSignal<HouseQuery>,
    pub items: RwSignal<Vec<House>>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    /// Дом, по которому отправляется заказ
    pub ordering: RwSignal<Option<HouseId>>,
}

impl HouseListViewModel {
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            query: RwSignal::new(HouseQuery::default()),
            items: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            ordering: RwSignal::new(None),
        }
    }

    pub fn load(&self) {
        let client = self.client.clone();
        let query = self.query.get_untracked();
        let items = self.items;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_houses(&client, &query).await {
                Ok(list) => {
                    items.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    pub fn set_name_filter(&self, name: String) {
        let name = name.trim().to_string();
        self.query
            .update(|q| q.name = (!name.is_empty()).then_some(name));
        self.load();
    }

    pub fn order_command(&self, id: HouseId) {
        let Some(house) = self.items.with_untracked(|items| items.iter().find(|h| h.id == id).cloned())
        else {
            return;
        };
        let lifecycle = OrderLifecycle::new(self.client.clone());
        let vm = self.clone();
        self.ordering.set(Some(id));
        wasm_bindgen_futures::spawn_local(async move {
            match lifecycle.place_order_for_house(&house).await {
                Ok(()) => vm
                    .notice
                    .set(Some(format!("Заказ дома «{}» оформлен", house.name))),
                Err(e) => vm.error.set(Some(e.to_string())),
            }
            vm.ordering.set(None);
        });
    }
}
