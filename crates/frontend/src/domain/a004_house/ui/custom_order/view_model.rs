use std::rc::Rc;

use contracts::domain::a001_house_attribute::aggregate::{HouseAttribute, HouseAttributeId};
use contracts::domain::a004_house::custom_order::CustomHouseDraft;
use contracts::domain::common::BindingSet;
use leptos::prelude::*;

use crate::domain::a004_house::custom_order::submit_custom_order;
use crate::domain::attribute_catalog::AttributeCatalog;
use crate::shared::binding_editor::BindingEditorViewModel;
use crate::shared::number_format::format_money;
use crate::shared::rest_client::RestClient;

/// ViewModel страницы «Индивидуальный проект».
///
/// Оценка пересчитывается при каждом изменении этажности или атрибутов.
#[derive(Clone)]
pub struct CustomOrderViewModel {
    client: RestClient,
    /// Поля черновика; привязки живут в `attributes`
    pub draft: RwSignal<CustomHouseDraft>,
    pub attributes: BindingEditorViewModel<HouseAttributeId>,
    pub catalog: RwSignal<Vec<HouseAttribute>>,
    pub error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
}

impl CustomOrderViewModel {
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            draft: RwSignal::new(CustomHouseDraft {
                floors: 1,
                entrances: 1,
                ..CustomHouseDraft::default()
            }),
            attributes: BindingEditorViewModel::new(BindingSet::new()),
            catalog: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

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

    fn current_draft(&self) -> CustomHouseDraft {
        let mut draft = self.draft.get();
        draft.attributes = self.attributes.bindings.get();
        draft
    }

    pub fn estimated_price(&self) -> impl Fn() -> f64 + '_ {
        move || self.current_draft().estimated_price()
    }

    pub fn estimated_price_label(&self) -> impl Fn() -> String + '_ {
        move || format_money(self.current_draft().estimated_price())
    }

    pub fn submit_command(&self, on_submitted: Rc<dyn Fn(f64)>) {
        let mut draft = self.draft.get_untracked();
        draft.attributes = self.attributes.snapshot();

        if let Err(e) = draft.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        let client = self.client.clone();
        let error = self.error;
        let submitting = self.submitting;
        submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match submit_custom_order(&client, &draft).await {
                Ok(quote) => {
                    error.set(None);
                    (on_submitted)(quote.estimated_price);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            submitting.set(false);
        });
    }
}
