use contracts::domain::a003_apartment_category::aggregate::{
    ApartmentCategory, ApartmentCategoryForm, ApartmentCategoryId,
};
use leptos::prelude::*;

use crate::domain::a003_apartment_category::api;
use crate::shared::rest_client::RestClient;

/// ViewModel списка категорий квартир с редактированием в строке
#[derive(Clone)]
pub struct CategoryListViewModel {
    client: RestClient,
    pub items: RwSignal<Vec<ApartmentCategory>>,
    pub name: RwSignal<String>,
    pub editing: RwSignal<Option<ApartmentCategoryId>>,
    pub error: RwSignal<Option<String>>,
}

impl CategoryListViewModel {
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            items: RwSignal::new(Vec::new()),
            name: RwSignal::new(String::new()),
            editing: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self) {
        let client = self.client.clone();
        let items = self.items;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_categories(&client).await {
                Ok(list) => items.set(list),
                Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    pub fn start_edit(&self, category: &ApartmentCategory) {
        self.editing.set(Some(category.id));
        self.name.set(category.name.clone());
    }

    pub fn save_command(&self) {
        let form = ApartmentCategoryForm {
            name: self.name.get_untracked().trim().to_string(),
        };
        if let Err(e) = form.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        let vm = self.clone();
        let editing = self.editing.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match editing {
                Some(id) => api::update_category(&vm.client, id, &form).await,
                None => api::create_category(&vm.client, &form).await,
            };
            match result {
                Ok(()) => {
                    vm.editing.set(None);
                    vm.name.set(String::new());
                    vm.error.set(None);
                    vm.load();
                }
                Err(e) => vm.error.set(Some(e.to_string())),
            }
        });
    }

    pub fn delete_command(&self, id: ApartmentCategoryId) {
        let client = self.client.clone();
        let items = self.items;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_category(&client, id).await {
                Ok(()) => items.update(|items| items.retain(|c| c.id != id)),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
}
