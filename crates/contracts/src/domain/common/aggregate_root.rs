use super::AggregateId;

/// Трейт для корня агрегата
///
/// Определяет идентичность записи и метаданные коллекции, из которых
/// строятся пути REST API.
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Индекс агрегата в системе (например, "a004")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции в API (например, "houses")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Дом")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Дома")
    fn list_name() -> &'static str;

    /// Полное имя агрегата для системы (например, "a004_houses")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Путь коллекции (например, "/houses/")
    fn collection_path() -> String {
        format!("/{}/", Self::collection_name())
    }

    /// Путь отдельной записи (например, "/houses/7")
    fn element_path(id: &Self::Id) -> String {
        format!("/{}/{}", Self::collection_name(), id.as_string())
    }
}
