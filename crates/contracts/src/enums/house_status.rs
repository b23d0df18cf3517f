use serde::{Deserialize, Serialize};

/// Стадия жизненного цикла дома
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HouseStatus {
    /// Проектируется
    #[default]
    Project,
    /// Утвержден, ожидает начала строительства
    Planned,
    /// В процессе строительства
    InProgress,
    /// Строительство приостановлено
    Suspended,
    /// Строительство завершено
    Built,
    /// Выставлен на продажу
    ForSale,
    /// Продан
    Sold,
    /// Переведен в архив, неактивен
    Archived,
}

impl HouseStatus {
    /// Получить код статуса (как в API)
    pub fn code(&self) -> &'static str {
        match self {
            HouseStatus::Project => "PROJECT",
            HouseStatus::Planned => "PLANNED",
            HouseStatus::InProgress => "IN_PROGRESS",
            HouseStatus::Suspended => "SUSPENDED",
            HouseStatus::Built => "BUILT",
            HouseStatus::ForSale => "FOR_SALE",
            HouseStatus::Sold => "SOLD",
            HouseStatus::Archived => "ARCHIVED",
        }
    }

    /// Получить человекочитаемое название
    pub fn label(&self) -> &'static str {
        match self {
            HouseStatus::Project => "Проект",
            HouseStatus::Planned => "Запланирован",
            HouseStatus::InProgress => "В строительстве",
            HouseStatus::Suspended => "Приостановлен",
            HouseStatus::Built => "Построен",
            HouseStatus::ForSale => "В продаже",
            HouseStatus::Sold => "Продан",
            HouseStatus::Archived => "Архивирован",
        }
    }

    /// Получить все статусы
    pub fn all() -> Vec<HouseStatus> {
        vec![
            HouseStatus::Project,
            HouseStatus::Planned,
            HouseStatus::InProgress,
            HouseStatus::Suspended,
            HouseStatus::Built,
            HouseStatus::ForSale,
            HouseStatus::Sold,
            HouseStatus::Archived,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl std::fmt::Display for HouseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_serde() {
        for status in HouseStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.code()));
            assert_eq!(HouseStatus::from_code(status.code()), Some(status));
        }
    }
}
