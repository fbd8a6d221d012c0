use std::cmp::Reverse;

use crate::entities::UnifiedRecord;

use super::utils::contains_ignore_case;

/// Merges normalized collections into one feed, newest first.
///
/// Origins are disjoint, so nothing is de-duplicated. Records with an
/// unparseable date sort after every dated record; ties keep input order.
pub(crate) struct FeedAssembler<'s> {
    search: Option<&'s str>,
}

impl<'s> FeedAssembler<'s> {
    pub(crate) fn new(search: Option<&'s str>) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()),
        }
    }

    pub(crate) fn process<'a, I>(self, collections: I) -> Vec<UnifiedRecord>
    where
        I: IntoIterator<Item = &'a [UnifiedRecord]>,
    {
        let mut merged: Vec<UnifiedRecord> = collections
            .into_iter()
            .flatten()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        // `None` orders below every timestamp, so undated records end up last.
        merged.sort_by_cached_key(|r| Reverse(r.timestamp()));
        merged
    }

    fn matches(&self, record: &UnifiedRecord) -> bool {
        match self.search {
            Some(term) => contains_ignore_case(&record.description, term),
            None => true,
        }
    }
}
