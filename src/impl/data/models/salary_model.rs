use crate::entities::LegacySalary;

use super::lenient_model::{AmountModel, IdModel};

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SalaryModel {
    pub id: IdModel,
    pub person_id: IdModel,
    pub value: AmountModel,
    pub month: AmountModel,
    pub year: AmountModel,
}

impl From<SalaryModel> for LegacySalary {
    fn from(m: SalaryModel) -> Self {
        LegacySalary {
            id: m.id.into(),
            person_id: m.person_id.into(),
            value: m.value.0,
            month: m.month.as_u32(),
            year: m.year.as_i32(),
        }
    }
}
