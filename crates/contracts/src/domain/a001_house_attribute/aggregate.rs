use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, AggregateRoot, BindingSet, Definition, AttributeKind};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор атрибута дома
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseAttributeId(pub i64);

impl HouseAttributeId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for HouseAttributeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(HouseAttributeId::new)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Атрибут дома из каталога (например, "Паркинг")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseAttribute {
    pub id: HouseAttributeId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl AggregateRoot for HouseAttribute {
    type Id = HouseAttributeId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        AttributeKind::House.collection_name()
    }

    fn element_name() -> &'static str {
        "Атрибут дома"
    }

    fn list_name() -> &'static str {
        "Атрибуты домов"
    }
}

impl Definition for HouseAttribute {
    type Id = HouseAttributeId;

    const KIND: AttributeKind = AttributeKind::House;

    fn definition_id(&self) -> Self::Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

// ============================================================================
// Bindings on the wire
// ============================================================================

/// Значение атрибута в составе дома (ответ API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseAttributeValue {
    pub attribute: HouseAttribute,
    pub value: String,
}

impl HouseAttributeValue {
    /// Собрать набор привязок из ответа API
    pub fn to_bindings(values: &[HouseAttributeValue]) -> BindingSet<HouseAttributeId> {
        let mut set = BindingSet::new();
        for item in values {
            set.add_with_value(item.attribute.id, item.value.clone());
        }
        set
    }
}

/// Значение атрибута в теле запроса создания/обновления дома
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseAttributeForm {
    pub id_attribute: HouseAttributeId,
    pub value: String,
}

impl HouseAttributeForm {
    pub fn from_bindings(bindings: &BindingSet<HouseAttributeId>) -> Vec<Self> {
        bindings
            .iter()
            .map(|b| Self {
                id_attribute: b.definition_id,
                value: b.value.clone(),
            })
            .collect()
    }
}
