use iso_currency::Currency;

use crate::{
    domain::logic::person_lookup::PersonLookup,
    entities::{Family, RecordKind, RecordRow, UnifiedRecord},
};

use super::utils::format_amount;

const FIXED_LABEL: &str = "Fixo";
const VARIABLE_LABEL: &str = "Variável";

fn kind_label(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Income => "Receita",
        RecordKind::Expense => "Despesa",
    }
}

pub(crate) struct RecordPresenter<'a> {
    lookup: PersonLookup<'a>,
    currency: Currency,
    fallback_category: &'a str,
}

impl<'a> RecordPresenter<'a> {
    pub(crate) fn new(
        families: &'a [Family],
        currency: Currency,
        fallback_category: &'a str,
    ) -> Self {
        Self {
            lookup: PersonLookup::new(families),
            currency,
            fallback_category,
        }
    }

    pub(crate) fn present(&self, record: &UnifiedRecord) -> RecordRow {
        RecordRow {
            key: record.key(),
            kind: record.kind,
            kind_label: kind_label(record.kind),
            description: record.description.clone(),
            category: self.category(record),
            date: record
                .timestamp()
                .map(|ts| ts.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| "-".to_string()),
            recurrence: recurrence(record),
            // Glyph comes from the kind, never from the stored magnitude.
            amount: format!(
                "{} {}",
                record.kind.glyph(),
                format_amount(record.value.abs(), self.currency)
            ),
            person: self
                .lookup
                .resolve_name(record.person_id.as_deref())
                .to_string(),
        }
    }

    pub(crate) fn present_all(&self, records: &[UnifiedRecord]) -> Vec<RecordRow> {
        records.iter().map(|r| self.present(r)).collect()
    }

    fn category(&self, record: &UnifiedRecord) -> String {
        record
            .category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|n| !n.is_empty())
            .or(record.category_name.as_deref().filter(|n| !n.is_empty()))
            .unwrap_or(self.fallback_category)
            .to_string()
    }
}

fn recurrence(record: &UnifiedRecord) -> Option<&'static str> {
    let m = &record.markers;
    match record.kind {
        RecordKind::Expense if m.recurring_id.is_some() => Some(FIXED_LABEL),
        RecordKind::Expense => Some(VARIABLE_LABEL),
        RecordKind::Income
            if m.entry_type.as_deref() == Some("fixed") || m.source_id.is_some() =>
        {
            Some(FIXED_LABEL)
        }
        RecordKind::Income => None,
    }
}
