use std::sync::Arc;

use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    data::{
        datasources::{
            api_transport::ApiTransport,
            config_ron_datasource::ConfigRonDatasource,
            records_api_datasource::{
                decode_expenses, decode_extras, decode_incomes, decode_salaries,
                RecordsApiDatasourceImpl,
            },
            roster_api_datasource::{decode_families, RosterApiDatasourceImpl},
            summary_api_datasource::SummaryApiDatasourceImpl,
        },
        repositories::records_repository_impl::RecordsRepositoryImpl,
    },
    domain::{
        logic::{
            edit_defaults::EditDefaults, feed_assembler::FeedAssembler,
            mutation_router::MutationRouter, record_normalizer::RecordNormalizer,
            save_request_builder::SaveRequestBuilder,
        },
        usecases::feed_usecase::{FeedUsecase as _, FeedUsecaseImpl},
    },
    entities::{
        ClientConfig, Dashboard, DashboardView, Family, Period, RecordRow, RegistrationForm,
        SaveRequest, Selection, SourceCollections, TransactionFeed, UnifiedRecord,
    },
    presentation::{
        dashboard_fmt::DashboardPresenter, feed_csv_printer::FeedCsvPrinter,
        record_fmt::RecordPresenter,
    },
};

type Repository<T> = RecordsRepositoryImpl<
    RecordsApiDatasourceImpl<T>,
    RosterApiDatasourceImpl<T>,
    SummaryApiDatasourceImpl<T>,
>;

/// Response bodies fetched by the host, one per resource. Absent bodies are
/// treated as empty collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseBodies<'a> {
    pub families: Option<&'a str>,
    pub expenses: Option<&'a str>,
    pub extras: Option<&'a str>,
    pub incomes: Option<&'a str>,
    pub salaries: Option<&'a str>,
}

pub struct HouseholdFinanceUtil<T: ApiTransport> {
    feed_usecase: FeedUsecaseImpl<Repository<T>>,
    config: ClientConfig,
    currency: Currency,
    csv_printer: FeedCsvPrinter,
}

impl<T: ApiTransport> HouseholdFinanceUtil<T> {
    pub fn new(transport: T, config: ClientConfig) -> Result<Self, ServerError> {
        Self::with_shared_transport(Arc::new(transport), config)
    }

    pub fn with_shared_transport(
        transport: Arc<T>,
        config: ClientConfig,
    ) -> Result<Self, ServerError> {
        let currency = config.currency()?;
        Ok(Self {
            feed_usecase: FeedUsecaseImpl::new(RecordsRepositoryImpl::new(transport, &config)),
            config,
            currency,
            csv_printer: FeedCsvPrinter::new(),
        })
    }

    pub fn from_config_string(transport: T, config_ron: &str) -> Result<Self, ServerError> {
        Self::new(transport, ConfigRonDatasource::from_string(config_ron)?)
    }

    pub async fn from_config_file<P>(transport: T, config_ron: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Self::new(transport, ConfigRonDatasource::from_file(config_ron).await?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // Loading.
    // ---

    pub async fn load_feed(
        &self,
        selection: &Selection,
        search: Option<&str>,
    ) -> Result<TransactionFeed, ServerError> {
        self.feed_usecase.load_feed(selection, search).await
    }

    pub async fn load_dashboard(&self, period: Period) -> Result<Dashboard, ServerError> {
        self.feed_usecase
            .load_dashboard(period, self.config.recent_transactions_limit)
            .await
    }

    /// Builds a feed from bodies the host already fetched, with the same
    /// family defaulting and ordering as [`Self::load_feed`].
    pub fn feed_from_strings(
        &self,
        selection: &Selection,
        search: Option<&str>,
        bodies: ResponseBodies<'_>,
    ) -> Result<TransactionFeed, ServerError> {
        let families = decode_or_empty(bodies.families, decode_families)?;
        let family_id = selection
            .family_id
            .clone()
            .or_else(|| families.first().map(|f| f.id.clone()))
            .filter(|id| !id.is_empty());
        let scoped = family_id.is_some();
        let sources = SourceCollections {
            expenses: decode_if(scoped, bodies.expenses, decode_expenses)?,
            one_off_incomes: decode_or_empty(bodies.extras, decode_extras)?,
            recurring_incomes: decode_if(scoped, bodies.incomes, decode_incomes)?,
            legacy_salaries: decode_if(
                self.config.legacy_salaries,
                bodies.salaries,
                decode_salaries,
            )?,
        };
        let normalized = RecordNormalizer::from_sources(&sources).process();
        Ok(TransactionFeed {
            selection: selection.clone(),
            family_id,
            families,
            records: FeedAssembler::new(search).process(normalized.slices()),
        })
    }

    // Presentation.
    // ---

    pub fn rows(&self, feed: &TransactionFeed) -> Vec<RecordRow> {
        self.record_presenter(&feed.families).present_all(&feed.records)
    }

    pub fn dashboard_view(&self, dashboard: &Dashboard, families: &[Family]) -> DashboardView {
        DashboardPresenter::new(
            families,
            self.currency,
            &self.config.fallback_category_label,
            self.config.report_wrap_width,
        )
        .present(dashboard)
    }

    pub fn export_csv(&self, feed: &TransactionFeed) -> Result<String, ServerError> {
        self.csv_printer.print(&self.rows(feed))
    }

    // Mutations.
    // ---

    /// Path a DELETE of `record` must be sent to.
    pub fn delete_route(&self, record: &UnifiedRecord) -> String {
        MutationRouter::route(record).path(&self.config.api_prefix)
    }

    /// Registration form prefilled for editing `record`, scoped to the
    /// feed's family.
    pub fn edit_defaults(
        &self,
        feed: &TransactionFeed,
        record: &UnifiedRecord,
    ) -> RegistrationForm {
        EditDefaults::new(record).process(feed.family_id.as_deref())
    }

    pub fn save_request(
        &self,
        form: &RegistrationForm,
        editing: Option<&UnifiedRecord>,
    ) -> Result<SaveRequest, ServerError> {
        SaveRequestBuilder::new(form).process(editing)
    }

    fn record_presenter<'a>(&'a self, families: &'a [Family]) -> RecordPresenter<'a> {
        RecordPresenter::new(families, self.currency, &self.config.fallback_category_label)
    }
}

fn decode_or_empty<E>(
    body: Option<&str>,
    decode: fn(&str) -> Result<Vec<E>, ServerError>,
) -> Result<Vec<E>, ServerError> {
    match body {
        Some(b) if !b.trim().is_empty() => decode(b),
        _ => Ok(Vec::new()),
    }
}

fn decode_if<E>(
    enabled: bool,
    body: Option<&str>,
    decode: fn(&str) -> Result<Vec<E>, ServerError>,
) -> Result<Vec<E>, ServerError> {
    if enabled {
        decode_or_empty(body, decode)
    } else {
        Ok(Vec::new())
    }
}
