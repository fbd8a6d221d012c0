use crate::entities::Expense;

use super::{
    category_model::EmbeddedCategoryModel,
    lenient_model::{AmountModel, IdModel, TextModel},
};

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ExpenseModel {
    pub id: IdModel,
    pub description: TextModel,
    pub value: AmountModel,
    pub date: TextModel,
    pub person_id: IdModel,
    pub category_name: TextModel,
    pub category_id: IdModel,
    pub category: EmbeddedCategoryModel,
    pub recurring_id: IdModel,
    #[serde(rename = "type")]
    pub expense_type: TextModel,
}

impl From<ExpenseModel> for Expense {
    fn from(m: ExpenseModel) -> Self {
        Expense {
            id: m.id.into(),
            description: m.description.into(),
            value: m.value.0,
            date: m.date.into(),
            person_id: m.person_id.into(),
            category: m.category.into_entity(),
            category_name: m.category_name.into(),
            category_id: m.category_id.into(),
            recurring_id: m.recurring_id.into(),
            expense_type: m.expense_type.into(),
        }
    }
}
