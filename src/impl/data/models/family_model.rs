use crate::entities::{Family, Member};

use super::lenient_model::{IdModel, TextModel};

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default)]
pub(crate) struct MemberModel {
    pub id: IdModel,
    pub name: TextModel,
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default)]
pub(crate) struct FamilyModel {
    pub id: IdModel,
    pub name: TextModel,
    pub members: Vec<MemberModel>,
}

impl From<MemberModel> for Member {
    fn from(m: MemberModel) -> Self {
        Member {
            id: m.id.0.unwrap_or_default(),
            name: m.name.0.unwrap_or_default(),
        }
    }
}

impl From<FamilyModel> for Family {
    fn from(m: FamilyModel) -> Self {
        Family {
            id: m.id.0.unwrap_or_default(),
            name: m.name.0.unwrap_or_default(),
            members: m.members.into_iter().map(Into::into).collect(),
        }
    }
}
