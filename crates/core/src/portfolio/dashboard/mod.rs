mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;


pub use dashboard_model::{Dashboard, DashboardQuery};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::DashboardServiceTrait;
