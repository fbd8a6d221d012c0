use fractic_server_error::ServerError;

use crate::{
    entities::{
        ExpensePayload, IncomePayload, IncomeType, OriginKind, RegistrationForm,
        RegistrationType, SavePayload, SaveRequest, SaveTarget, UnifiedRecord,
        DEFAULT_CATEGORY_NAME,
    },
    errors::InvalidFormField,
};

use super::{mutation_router::MutationRouter, registration_validator::RegistrationValidator};

/// Turns a registration form into the create or update request to send.
pub(crate) struct SaveRequestBuilder<'a> {
    form: &'a RegistrationForm,
}

impl<'a> SaveRequestBuilder<'a> {
    pub(crate) fn new(form: &'a RegistrationForm) -> Self {
        Self { form }
    }

    /// `editing` is the record being edited, if any. Edits go to the
    /// collection the record was classified into, and must keep the record's
    /// kind (expense or income); new records are created as expenses or
    /// (recurring or one-off) incomes.
    pub(crate) fn process(
        self,
        editing: Option<&UnifiedRecord>,
    ) -> Result<SaveRequest, ServerError> {
        let f = self.form;
        let checked = RegistrationValidator::new(f).process()?;
        let route = editing.map(MutationRouter::route);
        if let Some(route) = &route {
            if route.origin.kind() != f.registration_type.kind() {
                return Err(InvalidFormField::new(
                    "type",
                    "an edited record cannot switch between expense and income",
                ));
            }
        }

        let payload = match f.registration_type {
            RegistrationType::Expense => SavePayload::Expense(ExpensePayload {
                description: f.description.trim().to_string(),
                value: checked.value,
                category_name: f
                    .category_name
                    .clone()
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_CATEGORY_NAME.to_string()),
                category_id: f.category_id.clone().filter(|c| !c.is_empty()),
                date: f.date.trim().to_string(),
                person_id: f.person_id.clone(),
                is_recurring: f.is_recurring,
                duration_months: checked.duration_months,
            }),
            RegistrationType::Salary | RegistrationType::Income => {
                let income_type = match (f.registration_type, f.is_recurring) {
                    (RegistrationType::Salary, true) => IncomeType::Fixed,
                    _ => IncomeType::Flex,
                };
                SavePayload::Income(IncomePayload {
                    description: f.description.trim().to_string(),
                    value: checked.value,
                    date: f.date.trim().to_string(),
                    person_id: f.person_id.clone(),
                    income_type,
                    is_recurring: f.is_recurring,
                    duration_months: checked.duration_months,
                })
            }
        };

        let target = match route {
            Some(route) => SaveTarget::Update(route),
            None => SaveTarget::Create {
                resource: match &payload {
                    SavePayload::Expense(_) => OriginKind::Expense.resource(),
                    SavePayload::Income(_) => OriginKind::RecurringIncome.resource(),
                },
            },
        };

        Ok(SaveRequest { target, payload })
    }
}
