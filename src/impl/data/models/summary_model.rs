use crate::entities::{
    BudgetAlert, DashboardSummary, Period, PersonShare, SourceCollections, SummaryComparison,
    SummaryTotals,
};

use super::{
    expense_model::ExpenseModel,
    income_model::{ExtraIncomeModel, IncomeModel},
    lenient_model::{AmountModel, IdModel, TextModel},
    salary_model::SalaryModel,
};

fn amount(a: AmountModel) -> f64 {
    a.0.filter(|v| v.is_finite()).unwrap_or(0.0)
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct TotalsModel {
    pub salary: AmountModel,
    pub extras: AmountModel,
    pub incomes: AmountModel,
    pub expenses: AmountModel,
    pub balance: AmountModel,
    pub fixed_expenses: AmountModel,
    pub variable_expenses: AmountModel,
    pub fixed_expense_commitment: AmountModel,
    pub fixed_income: AmountModel,
    pub variable_income: AmountModel,
    pub predictable_income_percent: AmountModel,
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ComparisonModel {
    pub income_change: AmountModel,
    pub expense_change: AmountModel,
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct PerPersonModel {
    pub id: IdModel,
    pub name: TextModel,
    pub income: AmountModel,
    pub expenses: AmountModel,
    pub contribution_percent: AmountModel,
    pub proportional_expense: AmountModel,
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ForecastModel {
    pub estimated_next_month_expenses: AmountModel,
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct BudgetAlertModel {
    pub category: TextModel,
    pub limit: AmountModel,
    pub spent: AmountModel,
    pub percent: AmountModel,
    pub alert: Option<bool>,
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct DetailsModel {
    pub salaries: Vec<SalaryModel>,
    pub extras: Vec<ExtraIncomeModel>,
    pub incomes: Vec<IncomeModel>,
    pub expenses: Vec<ExpenseModel>,
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SummaryModel {
    pub month: AmountModel,
    pub year: AmountModel,
    pub family_id: IdModel,
    pub totals: TotalsModel,
    pub comparison: ComparisonModel,
    pub per_person: Vec<PerPersonModel>,
    pub health_score: AmountModel,
    pub forecast: ForecastModel,
    pub budget_alerts: Vec<BudgetAlertModel>,
    pub ai_report: TextModel,
    pub details: DetailsModel,
}

impl From<TotalsModel> for SummaryTotals {
    fn from(m: TotalsModel) -> Self {
        SummaryTotals {
            salary: amount(m.salary),
            extras: amount(m.extras),
            incomes: amount(m.incomes),
            expenses: amount(m.expenses),
            balance: amount(m.balance),
            fixed_expenses: amount(m.fixed_expenses),
            variable_expenses: amount(m.variable_expenses),
            fixed_expense_commitment: amount(m.fixed_expense_commitment),
            fixed_income: amount(m.fixed_income),
            variable_income: amount(m.variable_income),
            predictable_income_percent: amount(m.predictable_income_percent),
        }
    }
}

impl From<PerPersonModel> for PersonShare {
    fn from(m: PerPersonModel) -> Self {
        PersonShare {
            id: m.id.0.unwrap_or_default(),
            name: m.name.0.unwrap_or_default(),
            income: amount(m.income),
            expenses: amount(m.expenses),
            contribution_percent: amount(m.contribution_percent),
            proportional_expense: amount(m.proportional_expense),
        }
    }
}

impl From<BudgetAlertModel> for BudgetAlert {
    fn from(m: BudgetAlertModel) -> Self {
        BudgetAlert {
            category: m.category.0.unwrap_or_default(),
            limit: m.limit.0,
            spent: m.spent.0,
            percent: amount(m.percent),
            alert: m.alert.unwrap_or(false),
        }
    }
}

impl From<DetailsModel> for SourceCollections {
    fn from(m: DetailsModel) -> Self {
        SourceCollections {
            expenses: m.expenses.into_iter().map(Into::into).collect(),
            one_off_incomes: m.extras.into_iter().map(Into::into).collect(),
            recurring_incomes: m.incomes.into_iter().map(Into::into).collect(),
            legacy_salaries: m.salaries.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<SummaryModel> for DashboardSummary {
    fn from(m: SummaryModel) -> Self {
        let period = match (m.month.as_u32(), m.year.as_i32()) {
            (Some(month), Some(year)) => Some(Period::new(month, year)),
            _ => None,
        };
        DashboardSummary {
            period,
            family_id: m.family_id.into(),
            totals: m.totals.into(),
            comparison: SummaryComparison {
                income_change: amount(m.comparison.income_change),
                expense_change: amount(m.comparison.expense_change),
            },
            per_person: m.per_person.into_iter().map(Into::into).collect(),
            health_score: amount(m.health_score),
            estimated_next_month_expenses: amount(m.forecast.estimated_next_month_expenses),
            budget_alerts: m.budget_alerts.into_iter().map(Into::into).collect(),
            ai_report: m.ai_report.0.unwrap_or_default(),
            details: m.details.into(),
        }
    }
}
