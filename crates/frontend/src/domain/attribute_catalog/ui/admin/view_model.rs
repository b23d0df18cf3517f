use std::rc::Rc;

use contracts::domain::common::{AttributeDefinition, AttributeKind};
use leptos::prelude::*;

use crate::domain::attribute_catalog::AttributeCatalog;
use crate::shared::rest_client::RestClient;

/// ViewModel страницы «Атрибуты»: две вкладки, по одной на каталог
#[derive(Clone)]
pub struct AttributeCatalogViewModel {
    catalog: Rc<AttributeCatalog<RestClient>>,
    pub kind: RwSignal<AttributeKind>,
    pub items: RwSignal<Vec<AttributeDefinition>>,
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    /// Запись, открытая на редактирование
    pub editing: RwSignal<Option<i64>>,
    pub error: RwSignal<Option<String>>,
    pub busy: RwSignal<bool>,
}

impl AttributeCatalogViewModel {
    pub fn new(client: RestClient) -> Self {
        Self {
            catalog: Rc::new(AttributeCatalog::new(client)),
            kind: RwSignal::new(AttributeKind::House),
            items: RwSignal::new(Vec::new()),
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            editing: RwSignal::new(None),
            error: RwSignal::new(None),
            busy: RwSignal::new(false),
        }
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || !self.name.get().trim().is_empty() && !self.busy.get()
    }

    pub fn select_kind(&self, kind: AttributeKind) {
        self.kind.set(kind);
        self.reset_form();
        self.load();
    }

    pub fn load(&self) {
        let catalog = self.catalog.clone();
        let kind = self.kind.get_untracked();
        let items = self.items;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match catalog.list_definitions(kind).await {
                Ok(list) => {
                    items.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    pub fn start_edit(&self, definition: &AttributeDefinition) {
        self.editing.set(Some(definition.raw_id()));
        self.name.set(definition.name().to_string());
        self.description
            .set(definition.description().unwrap_or_default().to_string());
    }

    pub fn reset_form(&self) {
        self.editing.set(None);
        self.name.set(String::new());
        self.description.set(String::new());
        self.error.set(None);
    }

    /// Создать новую запись или сохранить переименование
    pub fn save_command(&self) {
        let catalog = self.catalog.clone();
        let kind = self.kind.get_untracked();
        let editing = self.editing.get_untracked();
        let name = self.name.get_untracked();
        let description = self.description.get_untracked();
        let vm = self.clone();

        self.busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let description = Some(description.as_str()).filter(|_| kind.has_description());
            let result = match editing {
                Some(id) => catalog
                    .update_definition(kind, id, &name, description)
                    .await
                    .map(|form| {
                        vm.items.update(|items| {
                            if let Some(item) = items.iter_mut().find(|d| d.raw_id() == id) {
                                item.apply_form(&form);
                            }
                        })
                    }),
                None => catalog
                    .create_definition(kind, &name, description)
                    .await
                    .map(|created| vm.items.update(|items| items.push(created))),
            };
            vm.busy.set(false);
            match result {
                Ok(()) => vm.reset_form(),
                Err(e) => vm.error.set(Some(e.to_string())),
            }
        });
    }

    pub fn delete_command(&self, id: i64) {
        let catalog = self.catalog.clone();
        let kind = self.kind.get_untracked();
        let items = self.items;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match catalog.delete_definition(kind, id).await {
                Ok(()) => items.update(|items| items.retain(|d| d.raw_id() != id)),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
}
