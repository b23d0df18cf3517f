//! Проверка данных банковской карты перед оплатой заказа.
//!
//! Это проверка полноты ввода в форме, а не платёжная валидация:
//! сеть и криптография не используются.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const CARD_NUMBER_DIGITS: usize = 16;
const MIN_HOLDER_NAME_CHARS: usize = 5;
const CVC_DIGITS: usize = 3;

/// Поля формы оплаты в том виде, как их ввёл пользователь
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCardForm {
    pub number: String,
    pub name: String,
    pub expiry: String,
    pub cvc: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardField {
    Number,
    Name,
    Expiry,
    Cvc,
}

impl CardField {
    pub fn label(&self) -> &'static str {
        match self {
            CardField::Number => "Номер карты",
            CardField::Name => "Имя держателя",
            CardField::Expiry => "Срок действия",
            CardField::Cvc => "CVC",
        }
    }
}

/// Ошибки формы, по одной на поле
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardErrors(BTreeMap<CardField, String>);

impl CardErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: CardField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardField, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: CardField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }
}

impl fmt::Display for CardErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (field, message)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.label(), message)?;
        }
        Ok(())
    }
}

impl PaymentCardForm {
    /// Проверить все поля. `today` задаёт текущий месяц для срока действия.
    pub fn validate(&self, today: NaiveDate) -> CardErrors {
        let mut errors = CardErrors::default();

        let digits: String = self.number.chars().filter(|c| *c != ' ').collect();
        if digits.len() != CARD_NUMBER_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
            errors.insert(CardField::Number, "Номер карты должен содержать 16 цифр");
        }

        let name = self.name.trim();
        if !name.chars().all(is_name_char) {
            errors.insert(
                CardField::Name,
                "Допустимы только латинские или русские буквы и пробелы",
            );
        } else if name.chars().count() < MIN_HOLDER_NAME_CHARS {
            errors.insert(CardField::Name, "Имя должно содержать не менее 5 символов");
        }

        if let Err(message) = check_expiry(&self.expiry, today) {
            errors.insert(CardField::Expiry, message);
        }

        if self.cvc.len() != CVC_DIGITS || !self.cvc.chars().all(|c| c.is_ascii_digit()) {
            errors.insert(CardField::Cvc, "CVC должен содержать 3 цифры");
        }

        errors
    }

    pub fn check(&self, today: NaiveDate) -> Result<(), CardErrors> {
        let errors = self.validate(today);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_name_char(c: char) -> bool {
    c == ' ' || c.is_ascii_alphabetic() || matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}

fn check_expiry(expiry: &str, today: NaiveDate) -> Result<(), &'static str> {
    let (month, year) = expiry
        .split_once('/')
        .filter(|(m, y)| {
            m.len() == 2
                && y.len() == 2
                && m.chars().chain(y.chars()).all(|c| c.is_ascii_digit())
        })
        .ok_or("Формат срока действия: ММ/ГГ")?;

    let month: u32 = month.parse().map_err(|_| "Формат срока действия: ММ/ГГ")?;
    if !(1..=12).contains(&month) {
        return Err("Месяц должен быть от 01 до 12");
    }
    let year: i32 = 2000 + year.parse::<i32>().map_err(|_| "Формат срока действия: ММ/ГГ")?;

    if (year, month) < (today.year(), today.month()) {
        return Err("Срок действия карты истёк");
    }
    Ok(())
}

/// Сгруппировать цифры номера по четыре: "4111 1111 1111 1111"
pub fn format_card_number(input: &str) -> String {
    let digits: Vec<char> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(CARD_NUMBER_DIGITS)
        .collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Вставить "/" после месяца: "1230" -> "12/30"
pub fn format_expiry(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).take(4).collect();
    if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}
