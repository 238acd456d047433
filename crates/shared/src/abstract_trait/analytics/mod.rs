mod repository;
mod service;

pub use self::repository::{AnalyticsRepositoryTrait, DynAnalyticsRepository};
pub use self::service::{AnalyticsServiceTrait, DynAnalyticsService};
