use std::rc::Rc;

use contracts::domain::a001_house_attribute::aggregate::{HouseAttribute, HouseAttributeId};
use contracts::domain::a004_house::aggregate::{HouseForm, HouseId};
use contracts::domain::common::BindingSet;
use leptos::prelude::*;

use crate::domain::a004_house::api;
use crate::domain::attribute_catalog::AttributeCatalog;
use crate::shared::binding_editor::BindingEditorViewModel;
use crate::shared::rest_client::RestClient;

/// ViewModel for House details form
#[derive(Clone)]
pub struct HouseDetailsViewModel {
    client: RestClient,
    pub id: RwSignal<Option<HouseId>>,
    pub form: RwSignal<HouseForm>,
    pub attributes: BindingEditorViewModel<HouseAttributeId>,
    pub catalog: RwSignal<Vec<HouseAttribute>>,
    pub error: RwSignal<Option<String>>,
}

impl HouseDetailsViewModel {
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            id: RwSignal::new(None),
            form: RwSignal::new(HouseForm::default()),
            attributes: BindingEditorViewModel::new(BindingSet::new()),
            catalog: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.id.get().is_some()
    }

    /// Каталог атрибутов для выпадающего списка «Добавить»
    pub fn load_catalog(&self) {
        let catalog = AttributeCatalog::new(self.client.clone());
        let target = self.catalog;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match catalog.house_attributes().await {
                Ok(list) => target.set(list),
                Err(e) => error.set(Some(format!("Ошибка загрузки атрибутов: {}", e))),
            }
        });
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<HouseId>) {
        self.id.set(id);
        let Some(existing_id) = id else {
            return;
        };
        let client = self.client.clone();
        let form = self.form;
        let bindings = self.attributes.bindings;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_house(&client, existing_id).await {
                Ok(house) => {
                    bindings.set(house.attribute_bindings());
                    form.set(HouseForm::from_house(&house));
                }
                Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self
            .form
            .get_untracked()
            .with_bindings(&self.attributes.snapshot());

        if let Err(e) = current.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        let client = self.client.clone();
        let id = self.id.get_untracked();
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            let result = match id {
                Some(id) => api::update_house(&client, id, &current).await,
                None => api::create_house(&client, &current).await,
            };
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }

    pub fn delete_command(&self, on_deleted: Rc<dyn Fn(())>) {
        let Some(id) = self.id.get_untracked() else {
            return;
        };
        let client = self.client.clone();
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_house(&client, id).await {
                Ok(()) => (on_deleted)(()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
}
