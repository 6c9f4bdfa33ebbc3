mod overview;
mod report;
mod settings;

pub use overview::Analytics;
pub use report::{report_title, AnalyticsReport};
pub use settings::AnalyticsSettings;
