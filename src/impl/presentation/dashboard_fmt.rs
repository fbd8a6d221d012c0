use iso_currency::Currency;

use crate::entities::{Dashboard, DashboardView, Family, HealthBand, ShareBar};

use super::{
    record_fmt::RecordPresenter,
    utils::{format_amount, ratio_percent},
};

pub(crate) struct DashboardPresenter<'a> {
    records: RecordPresenter<'a>,
    currency: Currency,
    wrap_width: usize,
}

impl<'a> DashboardPresenter<'a> {
    pub(crate) fn new(
        families: &'a [Family],
        currency: Currency,
        fallback_category: &'a str,
        wrap_width: usize,
    ) -> Self {
        Self {
            records: RecordPresenter::new(families, currency, fallback_category),
            currency,
            wrap_width,
        }
    }

    pub(crate) fn present(&self, dashboard: &Dashboard) -> DashboardView {
        let s = &dashboard.summary;
        let t = &s.totals;
        DashboardView {
            balance: self.amount(t.balance),
            incomes: self.amount(t.incomes),
            expenses: self.amount(t.expenses),
            health_score: s.health_score,
            health_band: HealthBand::from_score(s.health_score),
            income_bars: vec![
                self.bar("Renda fixa", t.fixed_income, t.incomes),
                self.bar("Renda variável", t.variable_income, t.incomes),
            ],
            expense_bars: vec![
                self.bar("Gastos fixos", t.fixed_expenses, t.expenses),
                self.bar("Gastos variáveis", t.variable_expenses, t.expenses),
            ],
            contributions: s
                .per_person
                .iter()
                .map(|p| ShareBar {
                    label: p.name.clone(),
                    amount: self.amount(p.income),
                    percent: p.contribution_percent,
                })
                .collect(),
            alerts: s
                .budget_alerts
                .iter()
                .filter(|a| a.alert)
                .map(|a| format!("{}: {:.0}%", a.category, a.percent))
                .collect(),
            report_lines: wrap_report(&s.ai_report, self.wrap_width),
            recent: self.records.present_all(&dashboard.recent),
        }
    }

    fn amount(&self, value: f64) -> String {
        format_amount(value, self.currency)
    }

    fn bar(&self, label: &str, part: f64, total: f64) -> ShareBar {
        ShareBar {
            label: label.to_string(),
            amount: self.amount(part),
            percent: ratio_percent(part, total),
        }
    }
}

/// Wraps each paragraph of the report separately; blank lines are kept.
fn wrap_report(report: &str, width: usize) -> Vec<String> {
    report
        .lines()
        .flat_map(|paragraph| {
            if paragraph.trim().is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(paragraph, width.max(1))
                    .into_iter()
                    .map(|line| line.into_owned())
                    .collect()
            }
        })
        .collect()
}
