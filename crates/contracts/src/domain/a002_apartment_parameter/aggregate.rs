use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, AggregateRoot, AttributeKind, BindingSet, Definition};

/// Уникальный идентификатор параметра квартиры
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApartmentParameterId(pub i64);

impl ApartmentParameterId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for ApartmentParameterId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(ApartmentParameterId::new)
    }
}

/// Параметр квартиры из каталога (без описания)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApartmentParameter {
    pub id: ApartmentParameterId,
    pub name: String,
}

impl AggregateRoot for ApartmentParameter {
    type Id = ApartmentParameterId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        AttributeKind::Apartment.collection_name()
    }

    fn element_name() -> &'static str {
        "Параметр квартиры"
    }

    fn list_name() -> &'static str {
        "Параметры квартир"
    }
}

impl Definition for ApartmentParameter {
    type Id = ApartmentParameterId;

    const KIND: AttributeKind = AttributeKind::Apartment;

    fn definition_id(&self) -> Self::Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Значение параметра в составе квартиры (ответ API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApartmentParameterValue {
    pub parameter: ApartmentParameter,
    pub value: String,
}

impl ApartmentParameterValue {
    pub fn to_bindings(values: &[ApartmentParameterValue]) -> BindingSet<ApartmentParameterId> {
        let mut set = BindingSet::new();
        for item in values {
            set.add_with_value(item.parameter.id, item.value.clone());
        }
        set
    }
}

/// Значение параметра в теле запроса создания/обновления квартиры
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApartmentParameterForm {
    pub id_parameter: ApartmentParameterId,
    pub value: String,
}

impl ApartmentParameterForm {
    pub fn from_bindings(bindings: &BindingSet<ApartmentParameterId>) -> Vec<Self> {
        bindings
            .iter()
            .map(|b| Self {
                id_parameter: b.definition_id,
                value: b.value.clone(),
            })
            .collect()
    }
}
