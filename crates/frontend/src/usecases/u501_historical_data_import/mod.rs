//! Импорт исторических данных аналитики
//!
//! - engine.rs: чистое вычисление статуса и эффектов
//! - status.rs: классификация снимка и подписи
//! - store.rs: кэш запросов со свежестью и таймаутом
//! - api.rs: REST-клиент
//! - view_model.rs / view.rs: панель настроек

pub mod api;
pub mod engine;
pub mod status;
pub mod store;
mod view;
mod view_model;

pub use view::HistoricalDataSettings;
pub use view_model::HistoricalDataViewModel;
