use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    domain::{
        logic::{
            dashboard_processor::DashboardProcessor, feed_assembler::FeedAssembler,
            record_normalizer::RecordNormalizer,
        },
        repositories::records_repository::RecordsRepository,
    },
    entities::{Dashboard, Period, Selection, SourceCollections, TransactionFeed},
};

#[async_trait]
pub trait FeedUsecase: Send + Sync {
    async fn load_feed(
        &self,
        selection: &Selection,
        search: Option<&str>,
    ) -> Result<TransactionFeed, ServerError>;

    async fn load_dashboard(&self, period: Period, limit: usize) -> Result<Dashboard, ServerError>;
}

pub(crate) struct FeedUsecaseImpl<R: RecordsRepository> {
    records_repository: R,
}

#[async_trait]
impl<R: RecordsRepository> FeedUsecase for FeedUsecaseImpl<R> {
    async fn load_feed(
        &self,
        selection: &Selection,
        search: Option<&str>,
    ) -> Result<TransactionFeed, ServerError> {
        let repo = &self.records_repository;
        let period = selection.period;

        // Without an explicit family, scope to the first one in the roster.
        let families = repo.get_families().await?;
        let family_id = selection
            .family_id
            .clone()
            .or_else(|| families.first().map(|f| f.id.clone()))
            .filter(|id| !id.is_empty());

        // Family-scoped resources are skipped entirely when there is no family.
        let family = family_id.as_deref();
        let (expenses, one_off_incomes, recurring_incomes, legacy_salaries) = futures::try_join!(
            async {
                match family {
                    Some(id) => repo.get_expenses(period, id).await,
                    None => Ok(Vec::new()),
                }
            },
            repo.get_one_off_incomes(period),
            async {
                match family {
                    Some(id) => repo.get_recurring_incomes(period, id).await,
                    None => Ok(Vec::new()),
                }
            },
            repo.get_legacy_salaries(period),
        )?;

        let sources = SourceCollections {
            expenses,
            one_off_incomes,
            recurring_incomes,
            legacy_salaries,
        };
        let normalized = RecordNormalizer::from_sources(&sources).process();
        let records = FeedAssembler::new(search).process(normalized.slices());
        info!(
            month = period.month,
            year = period.year,
            family = family.unwrap_or("-"),
            fetched = normalized.len(),
            shown = records.len(),
            "feed assembled"
        );

        Ok(TransactionFeed {
            selection: selection.clone(),
            family_id,
            families,
            records,
        })
    }

    async fn load_dashboard(&self, period: Period, limit: usize) -> Result<Dashboard, ServerError> {
        let summary = self.records_repository.get_summary(period).await?;
        let recent = DashboardProcessor::new(&summary).recent_transactions(limit);
        Ok(Dashboard {
            period,
            summary,
            recent,
        })
    }
}

impl<R: RecordsRepository> FeedUsecaseImpl<R> {
    pub(crate) fn new(records_repository: R) -> Self {
        FeedUsecaseImpl { records_repository }
    }
}
