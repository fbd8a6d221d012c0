use crate::entities::{OriginKind, RecordKind, UnifiedRecord, SALARY_DESCRIPTION};

/// Backend `type` of incomes generated from a recurring source.
const FIXED_INCOME_TYPE: &str = "fixed";

/// Infers which backend collection a record belongs to from its kind,
/// description and markers. `origin_kind` is not consulted, so records
/// reconstructed from a displayed row route the same way as fresh ones.
///
/// Rules, first match wins:
///
/// 1. not an income → `Expense`
/// 2. description is exactly "Salário", or a salary id is present → `Salary`
/// 3. a source id is present, or the entry type is "fixed" → `RecurringIncome`
/// 4. otherwise → `OneOffIncome`
///
/// Rule 2 matches on a user-editable description, so a recurring income named
/// "Salário" is routed to the salary collection.
pub(crate) struct RecordClassifier;

impl RecordClassifier {
    pub(crate) fn classify(record: &UnifiedRecord) -> OriginKind {
        if record.kind != RecordKind::Income {
            return OriginKind::Expense;
        }
        let markers = &record.markers;
        if record.description == SALARY_DESCRIPTION || markers.salary_id.is_some() {
            OriginKind::Salary
        } else if markers.source_id.is_some()
            || markers.entry_type.as_deref() == Some(FIXED_INCOME_TYPE)
        {
            OriginKind::RecurringIncome
        } else {
            OriginKind::OneOffIncome
        }
    }
}
