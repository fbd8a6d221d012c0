use serde::{de::IgnoredAny, Deserialize, Deserializer};

use crate::entities::RecordCategory;

use super::lenient_model::{IdModel, TextModel};

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default)]
pub(crate) struct CategoryModel {
    pub id: IdModel,
    pub name: TextModel,
}

#[derive(serde_derive::Deserialize)]
#[serde(untagged)]
enum RawCategory {
    Object(CategoryModel),
    Other(IgnoredAny),
}

/// Category embedded in an expense. Anything but an object (a bare name
/// string, a number) decodes to `None`.
#[derive(Debug, Default)]
pub(crate) struct EmbeddedCategoryModel(pub Option<CategoryModel>);

impl<'de> Deserialize<'de> for EmbeddedCategoryModel {
    fn deserialize<D>(deserializer: D) -> Result<EmbeddedCategoryModel, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(EmbeddedCategoryModel(
            match Option::<RawCategory>::deserialize(deserializer)? {
                Some(RawCategory::Object(c)) => Some(c),
                Some(RawCategory::Other(_)) | None => None,
            },
        ))
    }
}

impl EmbeddedCategoryModel {
    /// Embedded categories without a name carry nothing worth displaying.
    pub(crate) fn into_entity(self) -> Option<RecordCategory> {
        let category = self.0?;
        let name = category.name.0.filter(|n| !n.is_empty())?;
        Some(RecordCategory {
            id: category.id.0.unwrap_or_default(),
            name,
        })
    }
}
