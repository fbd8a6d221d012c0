use crate::entities::{
    OriginKind, RegistrationForm, RegistrationType, UnifiedRecord, DEFAULT_CATEGORY_NAME,
};

use super::{record_classifier::RecordClassifier, utils::iso_date_part};

/// Prefills the registration form for editing `record`.
pub(crate) struct EditDefaults<'a> {
    record: &'a UnifiedRecord,
}

impl<'a> EditDefaults<'a> {
    pub(crate) fn new(record: &'a UnifiedRecord) -> Self {
        Self { record }
    }

    pub(crate) fn process(self, family_id: Option<&str>) -> RegistrationForm {
        let r = self.record;
        let registration_type = match RecordClassifier::classify(r) {
            OriginKind::Expense => RegistrationType::Expense,
            OriginKind::Salary | OriginKind::RecurringIncome => RegistrationType::Salary,
            OriginKind::OneOffIncome => RegistrationType::Income,
        };
        let category_name = r
            .category_name
            .clone()
            .filter(|c| !c.is_empty())
            .or_else(|| r.category.as_ref().map(|c| c.name.clone()))
            .unwrap_or_else(|| DEFAULT_CATEGORY_NAME.to_string());

        RegistrationForm {
            description: r.description.clone(),
            value: if r.value > 0.0 {
                r.value.to_string()
            } else {
                String::new()
            },
            date: iso_date_part(&r.date).to_string(),
            category_name: Some(category_name),
            category_id: r
                .category_id
                .clone()
                .filter(|id| !id.is_empty())
                .or_else(|| r.category.as_ref().map(|c| c.id.clone())),
            registration_type,
            person_id: r.person_id.clone().unwrap_or_default(),
            family_id: family_id.unwrap_or_default().to_string(),
            is_recurring: r.markers.recurring_id.is_some() || r.markers.source_id.is_some(),
            duration_months: None,
        }
    }
}
