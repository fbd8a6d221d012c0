use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{
    DashboardSummary, Expense, Family, LegacySalary, OneOffIncome, Period, RecurringIncome,
};

/// Collections the core consumes. Each one is scoped by the backend to the
/// requested period (and family, where the resource supports it).
#[async_trait]
pub trait RecordsRepository: Send + Sync {
    async fn get_expenses(
        &self,
        period: Period,
        family_id: &str,
    ) -> Result<Vec<Expense>, ServerError>;

    async fn get_one_off_incomes(&self, period: Period) -> Result<Vec<OneOffIncome>, ServerError>;

    async fn get_recurring_incomes(
        &self,
        period: Period,
        family_id: &str,
    ) -> Result<Vec<RecurringIncome>, ServerError>;

    /// Empty when the legacy salary resource is not in use.
    async fn get_legacy_salaries(&self, period: Period) -> Result<Vec<LegacySalary>, ServerError>;

    async fn get_families(&self) -> Result<Vec<Family>, ServerError>;

    async fn get_summary(&self, period: Period) -> Result<DashboardSummary, ServerError>;
}
