//! ViewModel редактора привязок: атрибуты дома или параметры квартиры.
//!
//! Набор меняется только через `add`/`remove`/`set_value`; кнопка «Добавить»
//! блокируется, когда выбранное определение уже привязано.

use contracts::domain::common::{AggregateId, BindingSet, Definition};
use leptos::prelude::*;

/// Строка таблицы привязок для отображения
#[derive(Debug, Clone, PartialEq)]
pub struct BindingRow<Id> {
    pub definition_id: Id,
    pub label: String,
    pub value: String,
    pub resolved: bool,
}

#[derive(Clone, Copy)]
pub struct BindingEditorViewModel<Id>
where
    Id: AggregateId + Send + Sync + 'static,
{
    pub bindings: RwSignal<BindingSet<Id>>,
    /// Определение, выбранное для добавления
    pub selected: RwSignal<Option<Id>>,
}

impl<Id> BindingEditorViewModel<Id>
where
    Id: AggregateId + Send + Sync + 'static,
{
    pub fn new(initial: BindingSet<Id>) -> Self {
        Self {
            bindings: RwSignal::new(initial),
            selected: RwSignal::new(None),
        }
    }

    pub fn can_add(&self) -> bool {
        match self.selected.get() {
            Some(id) => !self.bindings.with(|b| b.contains(id)),
            None => false,
        }
    }

    /// Добавить выбранное определение с пустым значением
    pub fn add_selected(&self) -> bool {
        let Some(id) = self.selected.get_untracked() else {
            return false;
        };
        let added = self.add(id);
        self.selected.set(None);
        added
    }

    pub fn add(&self, definition_id: Id) -> bool {
        self.bindings
            .try_update(|b| b.add(definition_id))
            .unwrap_or(false)
    }

    pub fn remove(&self, definition_id: Id) -> bool {
        self.bindings
            .try_update(|b| b.remove(definition_id))
            .unwrap_or(false)
    }

    pub fn set_value(&self, definition_id: Id, value: String) -> bool {
        self.bindings
            .try_update(|b| b.set_value(definition_id, value))
            .unwrap_or(false)
    }

    /// Определения каталога, которых ещё нет в наборе
    pub fn available<D>(&self, catalog: &[D]) -> Vec<D>
    where
        D: Definition<Id = Id> + Clone,
    {
        self.bindings
            .with(|b| b.available(catalog).into_iter().cloned().collect())
    }

    pub fn rows<D>(&self, catalog: &[D]) -> Vec<BindingRow<Id>>
    where
        D: Definition<Id = Id>,
    {
        self.bindings.with(|b| {
            b.resolve(catalog)
                .into_iter()
                .map(|r| BindingRow {
                    definition_id: r.definition_id,
                    label: r.label.to_string(),
                    value: r.value.to_string(),
                    resolved: r.resolved,
                })
                .collect()
        })
    }

    pub fn snapshot(&self) -> BindingSet<Id> {
        self.bindings.get_untracked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_house_attribute::aggregate::{HouseAttribute, HouseAttributeId};
    use contracts::domain::common::UNKNOWN_ATTRIBUTE_LABEL;

    fn catalog() -> Vec<HouseAttribute> {
        vec![
            HouseAttribute {
                id: HouseAttributeId::new(1),
                name: "Паркинг".into(),
                description: None,
            },
            HouseAttribute {
                id: HouseAttributeId::new(2),
                name: "Лифт".into(),
                description: None,
            },
        ]
    }

    #[test]
    fn test_add_selected_disables_repeat() {
        let vm = BindingEditorViewModel::new(BindingSet::new());
        vm.selected.set(Some(HouseAttributeId::new(1)));
        assert!(vm.can_add());
        assert!(vm.add_selected());
        assert_eq!(vm.selected.get_untracked(), None);

        vm.selected.set(Some(HouseAttributeId::new(1)));
        assert!(!vm.can_add());
        assert!(!vm.add_selected());
        assert_eq!(vm.snapshot().len(), 1);
    }

    #[test]
    fn test_rows_and_available_follow_catalog() {
        let vm = BindingEditorViewModel::new(BindingSet::new());
        vm.add(HouseAttributeId::new(1));
        vm.add(HouseAttributeId::new(9));
        assert!(vm.set_value(HouseAttributeId::new(1), "50000".into()));

        let available = vm.available(&catalog());
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].name, "Лифт");

        let rows = vm.rows(&catalog());
        assert_eq!(rows[0].label, "Паркинг");
        assert_eq!(rows[0].value, "50000");
        assert_eq!(rows[1].label, UNKNOWN_ATTRIBUTE_LABEL);
        assert!(!rows[1].resolved);

        assert!(vm.remove(HouseAttributeId::new(9)));
        assert_eq!(vm.snapshot().len(), 1);
    }
}
