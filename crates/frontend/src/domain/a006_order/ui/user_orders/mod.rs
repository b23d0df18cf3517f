//! Заказы пользователя в профиле: отмена и оплата картой

mod view_model;

pub use view_model::UserOrdersViewModel;
