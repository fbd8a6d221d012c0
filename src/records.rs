//! Pure operations over already-fetched records. Nothing here performs I/O,
//! and nothing fails because of a malformed field value.

use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    domain::logic::{
        dashboard_processor::DashboardProcessor, edit_defaults::EditDefaults,
        feed_assembler::FeedAssembler, mutation_router::MutationRouter,
        person_lookup::PersonLookup, record_classifier::RecordClassifier,
        record_normalizer::RecordNormalizer, registration_validator,
        save_request_builder::SaveRequestBuilder,
    },
    entities::{
        DashboardSummary, Expense, Family, LegacySalary, MutationRoute, NormalizedCollections,
        OneOffIncome, OriginKind, RecordRow, RecurringIncome, RegistrationForm, SaveRequest,
        UnifiedRecord,
    },
    presentation::record_fmt::RecordPresenter,
};

pub use crate::domain::logic::{
    person_lookup::UNIDENTIFIED_PERSON, record_normalizer::LEGACY_SALARY_DAY,
};

/// Maps the four source collections into unified records, in argument order
/// (expenses, one-off incomes, recurring incomes, legacy salaries). Exactly
/// one record is produced per entry.
pub fn normalize(
    expenses: &[Expense],
    one_off_incomes: &[OneOffIncome],
    recurring_incomes: &[RecurringIncome],
    legacy_salaries: &[LegacySalary],
) -> Vec<UnifiedRecord> {
    normalize_by_origin(expenses, one_off_incomes, recurring_incomes, legacy_salaries).into_flat()
}

/// Same as [`normalize`], keeping one collection per origin.
pub fn normalize_by_origin(
    expenses: &[Expense],
    one_off_incomes: &[OneOffIncome],
    recurring_incomes: &[RecurringIncome],
    legacy_salaries: &[LegacySalary],
) -> NormalizedCollections {
    RecordNormalizer::new(expenses, one_off_incomes, recurring_incomes, legacy_salaries).process()
}

/// Collection an edit or delete of `record` must be sent to.
pub fn classify(record: &UnifiedRecord) -> OriginKind {
    RecordClassifier::classify(record)
}

/// Concatenates `collections`, keeps the records whose description contains
/// `search` (case-insensitive; `None` or empty keeps all), and orders them by
/// date, newest first. Undated records come last. Inputs are not modified.
pub fn assemble_feed<'a, I>(collections: I, search: Option<&str>) -> Vec<UnifiedRecord>
where
    I: IntoIterator<Item = &'a [UnifiedRecord]>,
{
    FeedAssembler::new(search).process(collections)
}

/// Display name of `person_id`, or [`UNIDENTIFIED_PERSON`].
pub fn resolve_person_name<'a>(families: &'a [Family], person_id: Option<&str>) -> &'a str {
    PersonLookup::new(families).resolve_name(person_id)
}

pub fn route_mutation(record: &UnifiedRecord) -> MutationRoute {
    MutationRouter::route(record)
}

/// Registration form prefilled for editing `record`.
pub fn resolve_edit_defaults(record: &UnifiedRecord, family_id: Option<&str>) -> RegistrationForm {
    EditDefaults::new(record).process(family_id)
}

pub fn validate_registration(form: &RegistrationForm) -> Result<(), ServerError> {
    registration_validator::RegistrationValidator::new(form)
        .process()
        .map(|_| ())
}

/// Checks a family or member name before creation.
pub fn validate_name(field: &str, name: &str) -> Result<(), ServerError> {
    registration_validator::validate_name(field, name)
}

/// Validates `form` and builds the request that saves it. `editing` is the
/// record being edited, if any.
pub fn build_save_request(
    form: &RegistrationForm,
    editing: Option<&UnifiedRecord>,
) -> Result<SaveRequest, ServerError> {
    SaveRequestBuilder::new(form).process(editing)
}

/// Newest `limit` records of the summary's detail collections.
pub fn recent_transactions(summary: &DashboardSummary, limit: usize) -> Vec<UnifiedRecord> {
    DashboardProcessor::new(summary).recent_transactions(limit)
}

/// Renders feed records as display rows.
pub fn present_feed(
    records: &[UnifiedRecord],
    families: &[Family],
    currency: Currency,
    fallback_category: &str,
) -> Vec<RecordRow> {
    RecordPresenter::new(families, currency, fallback_category).present_all(records)
}
