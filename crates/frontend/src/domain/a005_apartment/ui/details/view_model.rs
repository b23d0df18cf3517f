use std::rc::Rc;

use contracts::domain::a002_apartment_parameter::aggregate::{
    ApartmentParameter, ApartmentParameterId,
};
use contracts::domain::a003_apartment_category::aggregate::ApartmentCategory;
use contracts::domain::a004_house::aggregate::HouseId;
use contracts::domain::a005_apartment::aggregate::{Apartment, ApartmentForm, ApartmentId, ApartmentQuery};
use contracts::domain::common::BindingSet;
use leptos::prelude::*;

use crate::domain::a003_apartment_category::api as category_api;
use crate::domain::a005_apartment::api;
use crate::domain::attribute_catalog::AttributeCatalog;
use crate::shared::binding_editor::BindingEditorViewModel;
use crate::shared::rest_client::RestClient;

/// ViewModel квартир одного дома: список и форма редактирования
#[derive(Clone)]
pub struct ApartmentDetailsViewModel {
    client: RestClient,
    pub id_house: HouseId,
    pub apartments: RwSignal<Vec<Apartment>>,
    pub editing: RwSignal<Option<ApartmentId>>,
    pub form: RwSignal<ApartmentForm>,
    pub parameters: BindingEditorViewModel<ApartmentParameterId>,
    pub catalog: RwSignal<Vec<ApartmentParameter>>,
    pub categories: RwSignal<Vec<ApartmentCategory>>,
    pub error: RwSignal<Option<String>>,
}

impl ApartmentDetailsViewModel {
    pub fn new(client: RestClient, id_house: HouseId) -> Self {
        Self {
            client,
            id_house,
            apartments: RwSignal::new(Vec::new()),
            editing: RwSignal::new(None),
            form: RwSignal::new(ApartmentForm::new_for_house(id_house)),
            parameters: BindingEditorViewModel::new(BindingSet::new()),
            catalog: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
        }
    }

    /// Квартиры дома, параметры и категории для формы
    pub fn load(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let query = ApartmentQuery::for_house(vm.id_house);
            match api::fetch_apartments(&vm.client, &query).await {
                Ok(list) => vm.apartments.set(list),
                Err(e) => vm.error.set(Some(format!("Ошибка загрузки квартир: {}", e))),
            }
            match AttributeCatalog::new(vm.client.clone()).apartment_parameters().await {
                Ok(list) => vm.catalog.set(list),
                Err(e) => vm.error.set(Some(format!("Ошибка загрузки параметров: {}", e))),
            }
            match category_api::fetch_categories(&vm.client).await {
                Ok(list) => vm.categories.set(list),
                Err(e) => vm.error.set(Some(format!("Ошибка загрузки категорий: {}", e))),
            }
        });
    }

    pub fn new_apartment(&self) {
        self.editing.set(None);
        self.form.set(ApartmentForm::new_for_house(self.id_house));
        self.parameters.bindings.set(BindingSet::new());
    }

    pub fn edit_apartment(&self, apartment: &Apartment) {
        self.editing.set(Some(apartment.id));
        self.form.set(ApartmentForm::from_apartment(apartment));
        self.parameters.bindings.set(apartment.parameter_bindings());
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self
            .form
            .get_untracked()
            .with_bindings(&self.parameters.snapshot());

        if let Err(e) = current.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        let vm = self.clone();
        let editing = self.editing.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match editing {
                Some(id) => api::update_apartment(&vm.client, id, &current).await,
                None => api::create_apartment(&vm.client, &current).await,
            };
            match result {
                Ok(()) => {
                    vm.error.set(None);
                    vm.load();
                    (on_saved)(());
                }
                Err(e) => vm.error.set(Some(e.to_string())),
            }
        });
    }

    pub fn delete_command(&self, id: ApartmentId) {
        let client = self.client.clone();
        let apartments = self.apartments;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_apartment(&client, id).await {
                Ok(()) => apartments.update(|list| list.retain(|a| a.id != id)),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }

    /// Повторно открыть квартиру с сервера (после правок в другой вкладке)
    pub fn reload_apartment(&self, id: ApartmentId) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_apartment(&vm.client, id).await {
                Ok(apartment) => vm.edit_apartment(&apartment),
                Err(e) => vm.error.set(Some(e.to_string())),
            }
        });
    }
}
