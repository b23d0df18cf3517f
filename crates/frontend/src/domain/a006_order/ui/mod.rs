pub mod admin_list;
pub mod user_orders;
