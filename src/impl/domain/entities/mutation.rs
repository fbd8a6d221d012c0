use super::record::OriginKind;

/// Where an update or delete of a record must be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRoute {
    pub origin: OriginKind,
    pub id: String,
}

impl MutationRoute {
    pub fn resource(&self) -> &'static str {
        self.origin.resource()
    }

    /// `{prefix}/{resource}/{id}`, e.g. `/finance/extras/x1`.
    pub fn path(&self, prefix: &str) -> String {
        format!(
            "{}/{}/{}",
            prefix.trim_end_matches('/'),
            self.resource(),
            self.id
        )
    }
}
