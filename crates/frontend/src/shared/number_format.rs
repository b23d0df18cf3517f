//! Форматирование сумм для отображения (разряды через пробел, запятая в дробной части)

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_grouped;
///
/// assert_eq!(format_grouped(1234.567, 2), "1 234,57");
/// ```
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, fraction) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*c);
    }

    match fraction {
        Some(f) => format!("{}{},{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Сумма в рублях: копейки показываются, только если они есть
///
/// ```
/// use frontend::shared::number_format::format_money;
///
/// assert_eq!(format_money(3_170_100.0), "3 170 100 ₽");
/// assert_eq!(format_money(1500.5), "1 500,50 ₽");
/// ```
pub fn format_money(value: f64) -> String {
    let decimals = if value.fract() == 0.0 { 0 } else { 2 };
    format!("{} ₽", format_grouped(value, decimals))
}

/// Цена договора, которой может не быть
pub fn format_optional_money(value: Option<f64>) -> String {
    value.map(format_money).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(1234.567, 0), "1 235");
        assert_eq!(format_grouped(1234.567, 1), "1 234,6");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(1_000_000.0, 0), "1 000 000");
        assert_eq!(format_grouped(-1234.0, 0), "-1 234");
        assert_eq!(format_grouped(0.0, 2), "0,00");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(91_469_000.0), "91 469 000 ₽");
        assert_eq!(format_money(0.25), "0,25 ₽");
        assert_eq!(format_optional_money(None), "—");
        assert_eq!(format_optional_money(Some(1000.0)), "1 000 ₽");
    }
}
