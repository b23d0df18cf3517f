pub mod common;

pub mod a001_house_attribute;
pub mod a002_apartment_parameter;
pub mod a003_apartment_category;
pub mod a004_house;
pub mod a005_apartment;
pub mod a006_order;
