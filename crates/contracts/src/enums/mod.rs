pub mod house_status;
pub mod order_status;

pub use house_status::HouseStatus;
pub use order_status::OrderStatus;
