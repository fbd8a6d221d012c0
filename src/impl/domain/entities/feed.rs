use super::{
    family::Family,
    record::UnifiedRecord,
    selection::{Period, Selection},
    source_entries::{Expense, LegacySalary, OneOffIncome, RecurringIncome},
    summary::DashboardSummary,
};

// Before normalization.
// ---

/// The four source collections for one selection. A collection that has not
/// been fetched (still loading, not applicable) is simply empty.
#[derive(Debug, Clone, Default)]
pub struct SourceCollections {
    pub expenses: Vec<Expense>,
    pub one_off_incomes: Vec<OneOffIncome>,
    pub recurring_incomes: Vec<RecurringIncome>,
    pub legacy_salaries: Vec<LegacySalary>,
}

// After normalization.
// ---

/// Normalized records, still split by origin.
#[derive(Debug, Clone, Default)]
pub struct NormalizedCollections {
    pub expenses: Vec<UnifiedRecord>,
    pub one_off_incomes: Vec<UnifiedRecord>,
    pub recurring_incomes: Vec<UnifiedRecord>,
    pub legacy_salaries: Vec<UnifiedRecord>,
}

/// Merged, date-ordered, filtered feed for one selection.
#[derive(Debug, Clone)]
pub struct TransactionFeed {
    /// Selection as requested by the caller.
    pub selection: Selection,
    /// Family the collections were actually scoped to, after defaulting.
    pub family_id: Option<String>,
    pub families: Vec<Family>,
    pub records: Vec<UnifiedRecord>,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub period: Period,
    pub summary: DashboardSummary,
    pub recent: Vec<UnifiedRecord>,
}

// --

impl NormalizedCollections {
    pub fn slices(&self) -> [&[UnifiedRecord]; 4] {
        [
            &self.expenses,
            &self.one_off_incomes,
            &self.recurring_incomes,
            &self.legacy_salaries,
        ]
    }

    pub fn len(&self) -> usize {
        self.slices().iter().map(|s| s.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_flat(self) -> Vec<UnifiedRecord> {
        let mut v = self.expenses;
        v.extend(self.one_off_incomes);
        v.extend(self.recurring_incomes);
        v.extend(self.legacy_salaries);
        v
    }
}

impl TransactionFeed {
    /// Whether this feed was built for `selection`. Callers drop feeds that
    /// were superseded by a newer month/year/family choice.
    pub fn is_for(&self, selection: &Selection) -> bool {
        &self.selection == selection
    }
}
