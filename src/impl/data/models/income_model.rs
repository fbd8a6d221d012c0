use crate::entities::{OneOffIncome, RecurringIncome};

use super::lenient_model::{AmountModel, IdModel, TextModel};

/// Entry of the `incomes` resource: one month of a recurring income source.
#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct IncomeModel {
    pub id: IdModel,
    pub description: TextModel,
    pub value: AmountModel,
    pub date: TextModel,
    pub person_id: IdModel,
    pub source_id: IdModel,
    #[serde(rename = "type")]
    pub income_type: TextModel,
}

/// Entry of the `extras` resource.
#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ExtraIncomeModel {
    pub id: IdModel,
    pub description: TextModel,
    pub value: AmountModel,
    pub date: TextModel,
    pub person_id: IdModel,
}

/// The `extras` resource answers either `{ "data": [...] }` or a bare array.
#[derive(Debug, serde_derive::Deserialize)]
#[serde(untagged)]
pub(crate) enum ExtrasResponseModel {
    Wrapped { data: Vec<ExtraIncomeModel> },
    Bare(Vec<ExtraIncomeModel>),
}

impl From<IncomeModel> for RecurringIncome {
    fn from(m: IncomeModel) -> Self {
        RecurringIncome {
            id: m.id.into(),
            description: m.description.into(),
            value: m.value.0,
            date: m.date.into(),
            person_id: m.person_id.into(),
            source_id: m.source_id.into(),
            income_type: m.income_type.into(),
        }
    }
}

impl From<ExtraIncomeModel> for OneOffIncome {
    fn from(m: ExtraIncomeModel) -> Self {
        OneOffIncome {
            id: m.id.into(),
            description: m.description.into(),
            value: m.value.0,
            date: m.date.into(),
            person_id: m.person_id.into(),
        }
    }
}

impl ExtrasResponseModel {
    pub(crate) fn into_entries(self) -> Vec<ExtraIncomeModel> {
        match self {
            ExtrasResponseModel::Wrapped { data } => data,
            ExtrasResponseModel::Bare(v) => v,
        }
    }
}
