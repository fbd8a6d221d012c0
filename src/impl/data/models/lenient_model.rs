use serde::{de::IgnoredAny, Deserialize, Deserializer};

#[derive(serde_derive::Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Amount as the API sends it: a number, a numeric string (decimal columns
/// are serialized as strings by some backends), or null. Anything else
/// decodes to `None` instead of failing the whole response.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct AmountModel(pub Option<f64>);

impl<'de> Deserialize<'de> for AmountModel {
    fn deserialize<D>(deserializer: D) -> Result<AmountModel, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(AmountModel(match Option::<RawScalar>::deserialize(deserializer)? {
            Some(RawScalar::Number(n)) => Some(n),
            Some(RawScalar::Text(s)) => s.trim().parse::<f64>().ok(),
            Some(RawScalar::Other(_)) | None => None,
        }))
    }
}

impl AmountModel {
    /// Whole, non-negative value that fits a `u32` (months, days).
    pub(crate) fn as_u32(&self) -> Option<u32> {
        self.0
            .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= u32::MAX as f64)
            .map(|v| v as u32)
    }

    pub(crate) fn as_i32(&self) -> Option<i32> {
        self.0
            .filter(|v| v.fract() == 0.0 && *v >= i32::MIN as f64 && *v <= i32::MAX as f64)
            .map(|v| v as i32)
    }
}

/// Identifier sent either as a string or as a number.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct IdModel(pub Option<String>);

impl<'de> Deserialize<'de> for IdModel {
    fn deserialize<D>(deserializer: D) -> Result<IdModel, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(IdModel(match Option::<RawScalar>::deserialize(deserializer)? {
            Some(RawScalar::Text(s)) => Some(s),
            Some(RawScalar::Number(n)) if n.fract() == 0.0 => Some(format!("{}", n as i64)),
            Some(RawScalar::Number(n)) => Some(n.to_string()),
            Some(RawScalar::Other(_)) | None => None,
        }))
    }
}

/// Free text (descriptions, dates, type tags). A value of any other JSON type
/// decodes to `None`, so the normalizer substitutes its placeholder.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct TextModel(pub Option<String>);

impl<'de> Deserialize<'de> for TextModel {
    fn deserialize<D>(deserializer: D) -> Result<TextModel, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(TextModel(match Option::<RawScalar>::deserialize(deserializer)? {
            Some(RawScalar::Text(s)) => Some(s),
            Some(RawScalar::Number(_)) | Some(RawScalar::Other(_)) | None => None,
        }))
    }
}

impl From<TextModel> for Option<String> {
    fn from(text: TextModel) -> Self {
        text.0
    }
}

impl From<IdModel> for Option<String> {
    fn from(id: IdModel) -> Self {
        id.0
    }
}
