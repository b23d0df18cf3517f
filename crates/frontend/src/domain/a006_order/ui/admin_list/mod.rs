//! Админка заказов: поиск, фильтр по статусу, смена статуса с ценой договора

mod view_model;

pub use view_model::AdminOrdersViewModel;
