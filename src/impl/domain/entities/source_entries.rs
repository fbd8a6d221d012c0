use super::record::RecordCategory;

// Entries as the backend collections return them. Every field the API may
// omit is optional; the normalizer decides what a missing field becomes.
// ---

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expense {
    pub id: Option<String>,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub date: Option<String>,
    pub person_id: Option<String>,
    pub category: Option<RecordCategory>,
    pub category_name: Option<String>,
    pub category_id: Option<String>,
    pub recurring_id: Option<String>,
    /// "fixed" or "variable".
    pub expense_type: Option<String>,
}

/// Single, non-repeating income ("extra").
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OneOffIncome {
    pub id: Option<String>,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub date: Option<String>,
    pub person_id: Option<String>,
}

/// Monthly occurrence of an income source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecurringIncome {
    pub id: Option<String>,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub date: Option<String>,
    pub person_id: Option<String>,
    pub source_id: Option<String>,
    /// "fixed", "flex", "variable" or "temporary".
    pub income_type: Option<String>,
}

/// Legacy salary entry. Carries month and year only, no day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacySalary {
    pub id: Option<String>,
    pub person_id: Option<String>,
    pub value: Option<f64>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}
