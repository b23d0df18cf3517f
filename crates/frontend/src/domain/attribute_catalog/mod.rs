//! Каталоги атрибутов домов и параметров квартир
//!
//! - service.rs: `AttributeCatalog` поверх `CatalogBackend`
//! - api.rs: реализация бэкенда через REST
//! - ui/admin: ViewModel страницы администрирования каталогов

pub mod api;
pub mod service;
pub mod ui;

pub use service::{AttributeCatalog, CatalogBackend, CatalogError};
