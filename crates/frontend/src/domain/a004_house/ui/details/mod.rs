//! Карточка дома в админке
//!
//! Форма дома и редактор привязок атрибутов сохраняются одним запросом.

mod view_model;

pub use view_model::HouseDetailsViewModel;
