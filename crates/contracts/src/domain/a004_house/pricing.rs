//! Оценка стоимости индивидуального дома
//!
//! Формула фиксированная: площадь считается по средней квартире на каждый
//! этаж каждого подъезда, к базовой цене прибавляются числовые значения
//! привязанных атрибутов.

use crate::domain::common::{AggregateId, BindingSet};
use crate::shared::amount::parse_amount;

/// Средняя площадь квартиры, м²
pub const AVERAGE_UNIT_AREA: f64 = 63.37;

/// Цена квадратного метра, ₽
pub const PRICE_PER_SQUARE_METER: f64 = 144_260.0;

/// Составляющие оценки
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceEstimate {
    pub area: f64,
    pub base: f64,
    pub extra: f64,
    pub total: f64,
}

/// Числовое значение атрибута; всё, что не является конечным числом, даёт 0
pub fn numeric_value(value: &str) -> f64 {
    parse_amount(value).unwrap_or(0.0)
}

/// Оценка с разбивкой по составляющим
///
/// При неположительной этажности или числе подъездов площадь равна нулю и
/// итог сводится к сумме атрибутов.
pub fn estimate_breakdown<Id: AggregateId>(
    floors: i32,
    entrances: i32,
    bindings: &BindingSet<Id>,
) -> PriceEstimate {
    let area = if floors > 0 && entrances > 0 {
        f64::from(floors) * f64::from(entrances) * AVERAGE_UNIT_AREA
    } else {
        0.0
    };
    let base = area * PRICE_PER_SQUARE_METER;
    let extra: f64 = bindings.values().map(numeric_value).sum();

    PriceEstimate {
        area,
        base,
        extra,
        total: (base + extra).round(),
    }
}

/// Оценочная цена договора, округлённая до рубля
pub fn estimate<Id: AggregateId>(floors: i32, entrances: i32, bindings: &BindingSet<Id>) -> f64 {
    estimate_breakdown(floors, entrances, bindings).total
}
