//! Контейнеры страниц, которые выбирает навигация

pub mod d400_home;
pub mod d401_analytics;
pub mod d402_devdocs;

pub use d400_home::ui::Dashboard;
pub use d401_analytics::ui::{Analytics, AnalyticsReport, AnalyticsSettings};
pub use d402_devdocs::ui::DevDocs;
