pub mod a003_apartment_category;
pub mod a004_house;
pub mod a005_apartment;
pub mod a006_order;
pub mod attribute_catalog;
