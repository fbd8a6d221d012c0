use super::{
    record::{RecordKey, RecordKind},
    summary::HealthBand,
};

/// One feed record, rendered for display or export.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow {
    pub key: RecordKey,
    pub kind: RecordKind,
    /// `Receita` or `Despesa`.
    pub kind_label: &'static str,
    pub description: String,
    pub category: String,
    /// `dd/mm/yyyy`, or `-` when the record has no valid date.
    pub date: String,
    /// `Fixo`/`Variável`, or `None` for incomes with no recurrence marker.
    pub recurrence: Option<&'static str>,
    /// Amount with the glyph of its kind, e.g. `+ R$ 1.234,56`.
    pub amount: String,
    pub person: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareBar {
    pub label: String,
    pub amount: String,
    /// 0 to 100. Zero when the total is zero.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub balance: String,
    pub incomes: String,
    pub expenses: String,
    pub health_score: f64,
    pub health_band: HealthBand,
    pub income_bars: Vec<ShareBar>,
    pub expense_bars: Vec<ShareBar>,
    pub contributions: Vec<ShareBar>,
    pub alerts: Vec<String>,
    pub report_lines: Vec<String>,
    pub recent: Vec<RecordRow>,
}
