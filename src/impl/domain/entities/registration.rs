use serde_derive::Serialize;

use super::{mutation::MutationRoute, record::RecordKind};

/// Category name sent when the form leaves it blank.
pub const DEFAULT_CATEGORY_NAME: &str = "outros";

/// Choice offered by the registration form. Recurring and legacy salaries
/// are both edited as `Salary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationType {
    Expense,
    Salary,
    Income,
}

/// Raw registration form state, as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    pub description: String,
    pub value: String,
    pub date: String,
    pub category_name: Option<String>,
    pub category_id: Option<String>,
    pub registration_type: RegistrationType,
    pub person_id: String,
    pub family_id: String,
    pub is_recurring: bool,
    pub duration_months: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeType {
    Fixed,
    Flex,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePayload {
    pub description: String,
    pub value: f64,
    pub category_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub date: String,
    pub person_id: String,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_months: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomePayload {
    pub description: String,
    pub value: f64,
    pub date: String,
    pub person_id: String,
    #[serde(rename = "type")]
    pub income_type: IncomeType,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_months: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SavePayload {
    Expense(ExpensePayload),
    Income(IncomePayload),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveTarget {
    Create { resource: &'static str },
    Update(MutationRoute),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub target: SaveTarget,
    pub payload: SavePayload,
}

// --

impl RegistrationType {
    pub fn kind(&self) -> RecordKind {
        match self {
            RegistrationType::Expense => RecordKind::Expense,
            RegistrationType::Salary | RegistrationType::Income => RecordKind::Income,
        }
    }
}

impl SaveRequest {
    pub fn method(&self) -> &'static str {
        match self.target {
            SaveTarget::Create { .. } => "POST",
            SaveTarget::Update(_) => "PUT",
        }
    }

    pub fn path(&self, prefix: &str) -> String {
        match &self.target {
            SaveTarget::Create { resource } => {
                format!("{}/{}", prefix.trim_end_matches('/'), resource)
            }
            SaveTarget::Update(route) => route.path(prefix),
        }
    }
}
