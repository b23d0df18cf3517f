//! Разбор денежных сумм и числовых значений, введённых вручную

/// Разобрать сумму: пробелы-разделители разрядов убираются, запятая
/// считается десятичным разделителем.
///
/// Возвращает `None` для пустой строки, нечисловых и бесконечных значений.
///
/// ```
/// use contracts::shared::amount::parse_amount;
///
/// assert_eq!(parse_amount("1 000 000,50"), Some(1_000_000.5));
/// assert_eq!(parse_amount("кирпич"), None);
/// ```
pub fn parse_amount(raw: &str) -> Option<f64> {
    let normalized: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if normalized.is_empty() {
        return None;
    }

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Разобрать сумму, которая обязана быть строго положительной
pub fn parse_positive_amount(raw: &str) -> Option<f64> {
    parse_amount(raw).filter(|v| *v > 0.0)
}
