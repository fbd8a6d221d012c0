use crate::entities::Family;

/// Display name returned for persons missing from the roster.
pub const UNIDENTIFIED_PERSON: &str = "Não identificado";

pub(crate) struct PersonLookup<'a> {
    families: &'a [Family],
}

impl<'a> PersonLookup<'a> {
    pub(crate) fn new(families: &'a [Family]) -> Self {
        Self { families }
    }

    /// First member with `person_id` across all families. Never returns an
    /// empty string: absent ids, unknown ids and blank names all resolve to
    /// [`UNIDENTIFIED_PERSON`].
    pub(crate) fn resolve_name(&self, person_id: Option<&str>) -> &'a str {
        let Some(person_id) = person_id.filter(|id| !id.is_empty()) else {
            return UNIDENTIFIED_PERSON;
        };
        self.families
            .iter()
            .flat_map(|f| f.members.iter())
            .find(|m| m.id == person_id)
            .map(|m| m.name.as_str())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNIDENTIFIED_PERSON)
    }
}
