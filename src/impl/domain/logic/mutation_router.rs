use tracing::warn;

use crate::entities::{MutationRoute, UnifiedRecord};

use super::record_classifier::RecordClassifier;

pub(crate) struct MutationRouter;

impl MutationRouter {
    pub(crate) fn route(record: &UnifiedRecord) -> MutationRoute {
        let origin = RecordClassifier::classify(record);
        if origin != record.origin_kind {
            warn!(
                id = %record.id,
                normalized_as = %record.origin_kind,
                classified_as = %origin,
                "record classification disagrees with its source collection"
            );
        }
        MutationRoute {
            origin,
            id: record.id.clone(),
        }
    }
}
