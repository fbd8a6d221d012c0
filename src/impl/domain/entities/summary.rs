use super::{feed::SourceCollections, selection::Period};

// Server-computed monthly summary. The client only displays these numbers.
// ---

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTotals {
    pub salary: f64,
    pub extras: f64,
    pub incomes: f64,
    pub expenses: f64,
    pub balance: f64,
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
    pub fixed_expense_commitment: f64,
    pub fixed_income: f64,
    pub variable_income: f64,
    pub predictable_income_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryComparison {
    pub income_change: f64,
    pub expense_change: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonShare {
    pub id: String,
    pub name: String,
    pub income: f64,
    pub expenses: f64,
    pub contribution_percent: f64,
    pub proportional_expense: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetAlert {
    pub category: String,
    pub limit: Option<f64>,
    pub spent: Option<f64>,
    pub percent: f64,
    pub alert: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardSummary {
    pub period: Option<Period>,
    pub family_id: Option<String>,
    pub totals: SummaryTotals,
    pub comparison: SummaryComparison,
    pub per_person: Vec<PersonShare>,
    pub health_score: f64,
    pub estimated_next_month_expenses: f64,
    pub budget_alerts: Vec<BudgetAlert>,
    pub ai_report: String,
    pub details: SourceCollections,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Good,
    Fair,
    Poor,
}

// --

impl HealthBand {
    pub fn from_score(score: f64) -> Self {
        if score > 70.0 {
            HealthBand::Good
        } else if score > 40.0 {
            HealthBand::Fair
        } else {
            HealthBand::Poor
        }
    }
}
