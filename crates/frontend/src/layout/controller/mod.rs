//! Навигация приложения внутри админки хоста
//!
//! По каждому изменению адреса [`navigator::Navigator`] выбирает страницу из
//! таблицы ([`pages`]) и выдаёт список действий: сброс пагинации при смене
//! фильтров, прокрутка наверх, обновление ссылок и классов меню хоста.
//! Действия исполняет компонент [`Controller`].

pub mod dom;
pub mod history;
pub mod location;
pub mod menu;
pub mod navigator;
pub mod pages;
pub mod query;
pub mod route_match;
mod view;

pub use view::Controller;
