use chrono::NaiveDate;
use tracing::debug;

use crate::entities::{
    Expense, LegacySalary, NormalizedCollections, OneOffIncome, OriginKind, RecordMarkers,
    RecurringIncome, SourceCollections, UnifiedRecord, SALARY_DESCRIPTION,
};

/// Day of month given to legacy salaries, which only carry month and year.
/// Any fixed day would do; it only has to be stable so the feed order is.
pub const LEGACY_SALARY_DAY: u32 = 5;

pub(crate) struct RecordNormalizer<'a> {
    expenses: &'a [Expense],
    one_off_incomes: &'a [OneOffIncome],
    recurring_incomes: &'a [RecurringIncome],
    legacy_salaries: &'a [LegacySalary],
}

impl<'a> RecordNormalizer<'a> {
    pub(crate) fn new(
        expenses: &'a [Expense],
        one_off_incomes: &'a [OneOffIncome],
        recurring_incomes: &'a [RecurringIncome],
        legacy_salaries: &'a [LegacySalary],
    ) -> Self {
        Self {
            expenses,
            one_off_incomes,
            recurring_incomes,
            legacy_salaries,
        }
    }

    pub(crate) fn from_sources(sources: &'a SourceCollections) -> Self {
        Self::new(
            &sources.expenses,
            &sources.one_off_incomes,
            &sources.recurring_incomes,
            &sources.legacy_salaries,
        )
    }

    pub(crate) fn process(self) -> NormalizedCollections {
        NormalizedCollections {
            expenses: self.expenses.iter().map(normalize_expense).collect(),
            one_off_incomes: self.one_off_incomes.iter().map(normalize_one_off).collect(),
            recurring_incomes: self.recurring_incomes.iter().map(normalize_recurring).collect(),
            legacy_salaries: self.legacy_salaries.iter().map(normalize_salary).collect(),
        }
    }
}

fn normalize_expense(e: &Expense) -> UnifiedRecord {
    let mut record = base(OriginKind::Expense, &e.id, &e.description, e.value, &e.date);
    record.person_id = e.person_id.clone();
    record.category = e.category.clone();
    record.category_name = e.category_name.clone();
    record.category_id = e.category_id.clone();
    record.markers = RecordMarkers {
        recurring_id: e.recurring_id.clone(),
        entry_type: e.expense_type.clone(),
        ..Default::default()
    };
    record
}

fn normalize_one_off(i: &OneOffIncome) -> UnifiedRecord {
    let mut record = base(OriginKind::OneOffIncome, &i.id, &i.description, i.value, &i.date);
    record.person_id = i.person_id.clone();
    record
}

fn normalize_recurring(i: &RecurringIncome) -> UnifiedRecord {
    let mut record = base(OriginKind::RecurringIncome, &i.id, &i.description, i.value, &i.date);
    record.person_id = i.person_id.clone();
    record.markers = RecordMarkers {
        source_id: i.source_id.clone(),
        entry_type: i.income_type.clone(),
        ..Default::default()
    };
    record
}

fn normalize_salary(s: &LegacySalary) -> UnifiedRecord {
    let date = match (s.year, s.month) {
        (Some(year), Some(month)) => NaiveDate::from_ymd_opt(year, month, LEGACY_SALARY_DAY)
            .map(|d| d.format("%Y-%m-%d").to_string()),
        _ => None,
    };
    let description = Some(SALARY_DESCRIPTION.to_string());
    let mut record = base(OriginKind::Salary, &s.id, &description, s.value, &date);
    record.person_id = s.person_id.clone();
    record.markers.salary_id = s.id.clone();
    record
}

/// Fields shared by every origin. Missing fields become placeholders; no
/// entry is ever dropped.
fn base(
    origin: OriginKind,
    id: &Option<String>,
    description: &Option<String>,
    value: Option<f64>,
    date: &Option<String>,
) -> UnifiedRecord {
    let id = id.clone().unwrap_or_else(|| {
        debug!(%origin, "record without id, using empty id");
        String::new()
    });
    let mut record = UnifiedRecord::new(origin, id);
    record.description = description.clone().unwrap_or_default();
    record.value = match value {
        Some(v) if v.is_finite() => v.abs(),
        _ => {
            debug!(%origin, id = %record.id, "record without usable value, using 0");
            0.0
        }
    };
    record.date = date.clone().unwrap_or_else(|| {
        debug!(%origin, id = %record.id, "record without date, sorting as oldest");
        String::new()
    });
    record
}
