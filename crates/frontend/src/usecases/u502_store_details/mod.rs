//! Мастер настройки магазина: шаг «Store details»
//!
//! Заполняет адрес магазина, выводит из страны валюту и сохраняет
//! группу настроек `general` и элементы профиля.

pub mod api;
pub mod model;
mod view;
mod view_model;

pub use view::StoreDetailsStep;
pub use view_model::StoreDetailsViewModel;
