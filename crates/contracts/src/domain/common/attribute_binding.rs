use serde::{Deserialize, Serialize};

use super::{AggregateId, Definition};
use crate::domain::a001_house_attribute::aggregate::HouseAttributeId;
use crate::domain::a002_apartment_parameter::aggregate::ApartmentParameterId;

/// Подпись для привязки, определение которой удалено из каталога
pub const UNKNOWN_ATTRIBUTE_LABEL: &str = "Неизвестный атрибут";

/// Привязка значения к записи каталога
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding<Id> {
    pub definition_id: Id,
    pub value: String,
}

pub type HouseAttributeBinding = Binding<HouseAttributeId>;
pub type ApartmentParameterBinding = Binding<ApartmentParameterId>;

/// Привязка, сопоставленная с каталогом для отображения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBinding<'a, Id> {
    pub definition_id: Id,
    pub label: &'a str,
    pub value: &'a str,
    /// false, если определение не найдено в каталоге
    pub resolved: bool,
}

/// Набор привязок одной сущности
///
/// Хранит не более одной привязки на определение, в порядке добавления.
/// Изменяется только через `add`/`remove`/`set_value`, массовой перезаписи нет.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingSet<Id> {
    bindings: Vec<Binding<Id>>,
}

impl<Id> Default for BindingSet<Id> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }
}

impl<Id: AggregateId> BindingSet<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, definition_id: Id) -> bool {
        self.bindings
            .iter()
            .any(|b| b.definition_id == definition_id)
    }

    /// Добавить привязку с пустым значением.
    /// Повторное добавление того же определения ничего не меняет.
    pub fn add(&mut self, definition_id: Id) -> bool {
        self.add_with_value(definition_id, String::new())
    }

    pub fn add_with_value(&mut self, definition_id: Id, value: impl Into<String>) -> bool {
        if self.contains(definition_id) {
            return false;
        }
        self.bindings.push(Binding {
            definition_id,
            value: value.into(),
        });
        true
    }

    pub fn remove(&mut self, definition_id: Id) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.definition_id != definition_id);
        self.bindings.len() != before
    }

    /// Заменить значение привязки. Значение не приводится к типу.
    pub fn set_value(&mut self, definition_id: Id, value: impl Into<String>) -> bool {
        match self
            .bindings
            .iter_mut()
            .find(|b| b.definition_id == definition_id)
        {
            Some(binding) => {
                binding.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn value_of(&self, definition_id: Id) -> Option<&str> {
        self.bindings
            .iter()
            .find(|b| b.definition_id == definition_id)
            .map(|b| b.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Binding<Id>> {
        self.bindings.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.bindings.iter().map(|b| b.value.as_str())
    }

    /// Определения каталога, которые ещё можно добавить
    pub fn available<'a, D, I>(&self, catalog: I) -> Vec<&'a D>
    where
        D: Definition<Id = Id> + 'a,
        I: IntoIterator<Item = &'a D>,
    {
        catalog
            .into_iter()
            .filter(|d| !self.contains(d.definition_id()))
            .collect()
    }

    /// Сопоставить привязки с каталогом.
    /// Удалённые определения получают подпись [`UNKNOWN_ATTRIBUTE_LABEL`].
    pub fn resolve<'a, D, I>(&'a self, catalog: I) -> Vec<ResolvedBinding<'a, Id>>
    where
        D: Definition<Id = Id> + 'a,
        I: IntoIterator<Item = &'a D>,
    {
        let catalog: Vec<&'a D> = catalog.into_iter().collect();
        self.bindings
            .iter()
            .map(|binding| {
                let definition = catalog
                    .iter()
                    .find(|d| d.definition_id() == binding.definition_id)
                    .copied();
                ResolvedBinding {
                    definition_id: binding.definition_id,
                    label: definition.map_or(UNKNOWN_ATTRIBUTE_LABEL, |d| d.name()),
                    value: &binding.value,
                    resolved: definition.is_some(),
                }
            })
            .collect()
    }
}

/// Дубликаты отбрасываются: остаётся первая привязка определения
impl<Id: AggregateId> FromIterator<Binding<Id>> for BindingSet<Id> {
    fn from_iter<T: IntoIterator<Item = Binding<Id>>>(iter: T) -> Self {
        let mut set = Self::new();
        for binding in iter {
            set.add_with_value(binding.definition_id, binding.value);
        }
        set
    }
}

impl<'a, Id> IntoIterator for &'a BindingSet<Id> {
    type Item = &'a Binding<Id>;
    type IntoIter = std::slice::Iter<'a, Binding<Id>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_house_attribute::aggregate::HouseAttribute;

    fn id(value: i64) -> HouseAttributeId {
        HouseAttributeId::new(value)
    }

    fn attribute(value: i64, name: &str) -> HouseAttribute {
        HouseAttribute {
            id: id(value),
            name: name.to_string(),
            description: None,
        }
    }

    fn sample_set() -> BindingSet<HouseAttributeId> {
        let mut set = BindingSet::new();
        set.add_with_value(id(1), "есть");
        set.add_with_value(id(2), "120000");
        set
    }

    #[test]
    fn test_add_is_noop_for_bound_definition() {
        let mut set = sample_set();
        assert!(!set.add_with_value(id(1), "другое"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.value_of(id(1)), Some("есть"));
    }

    #[test]
    fn test_add_then_remove_restores_original() {
        let original = sample_set();
        let mut set = original.clone();
        assert!(set.add(id(9)));
        assert!(set.remove(id(9)));
        assert_eq!(set, original);
    }

    #[test]
    fn test_set_value_only_touches_existing_binding() {
        let mut set = sample_set();
        assert!(set.set_value(id(2), "кирпич"));
        assert_eq!(set.value_of(id(2)), Some("кирпич"));
        assert!(!set.set_value(id(5), "x"));
        assert!(!set.contains(id(5)));
    }

    #[test]
    fn test_available_hides_bound_definitions() {
        let catalog = vec![attribute(1, "Балкон"), attribute(2, "Лифт"), attribute(3, "Паркинг")];
        let set = sample_set();
        let available: Vec<&str> = set
            .available(&catalog)
            .into_iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(available, vec!["Паркинг"]);
    }

    #[test]
    fn test_resolve_falls_back_to_unknown_label() {
        let catalog = vec![attribute(1, "Балкон")];
        let set = sample_set();
        let resolved = set.resolve(&catalog);
        assert_eq!(resolved[0].label, "Балкон");
        assert!(resolved[0].resolved);
        assert_eq!(resolved[1].label, UNKNOWN_ATTRIBUTE_LABEL);
        assert_eq!(resolved[1].value, "120000");
        assert!(!resolved[1].resolved);
    }

    #[test]
    fn test_collect_keeps_first_binding_per_definition() {
        let set: BindingSet<HouseAttributeId> = vec![
            Binding { definition_id: id(1), value: "a".into() },
            Binding { definition_id: id(1), value: "b".into() },
            Binding { definition_id: id(2), value: "c".into() },
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.value_of(id(1)), Some("a"));
    }
}
