use super::dashboard_model::{Dashboard, DashboardQuery};
use crate::errors::Result;

/// Trait defining the contract for the portfolio dashboard.
pub trait DashboardServiceTrait: Send + Sync {
    /// Loads the owner's wallets, computes their statistics and resolves the
    /// active wallet and asset from the query.
    fn get_dashboard(&self, user_id: &str, query: &DashboardQuery) -> Result<Dashboard>;
}
