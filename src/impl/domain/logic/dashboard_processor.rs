use crate::entities::{DashboardSummary, UnifiedRecord};

use super::{feed_assembler::FeedAssembler, record_normalizer::RecordNormalizer};

/// Newest `limit` records among the summary's detail collections.
pub(crate) struct DashboardProcessor<'a> {
    summary: &'a DashboardSummary,
}

impl<'a> DashboardProcessor<'a> {
    pub(crate) fn new(summary: &'a DashboardSummary) -> Self {
        Self { summary }
    }

    pub(crate) fn recent_transactions(self, limit: usize) -> Vec<UnifiedRecord> {
        let normalized = RecordNormalizer::from_sources(&self.summary.details).process();
        let mut feed = FeedAssembler::new(None).process(normalized.slices());
        feed.truncate(limit);
        feed
    }
}
