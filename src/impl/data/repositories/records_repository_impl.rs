use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        api_transport::ApiTransport,
        records_api_datasource::{RecordsApiDatasource, RecordsApiDatasourceImpl},
        roster_api_datasource::{RosterApiDatasource, RosterApiDatasourceImpl},
        summary_api_datasource::{SummaryApiDatasource, SummaryApiDatasourceImpl},
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::{
        ClientConfig, DashboardSummary, Expense, Family, LegacySalary, OneOffIncome, Period,
        RecurringIncome,
    },
};

pub(crate) struct RecordsRepositoryImpl<DS1, DS2, DS3>
where
    DS1: RecordsApiDatasource,
    DS2: RosterApiDatasource,
    DS3: SummaryApiDatasource,
{
    records_datasource: DS1,
    roster_datasource: DS2,
    summary_datasource: DS3,
    legacy_salaries: bool,
}

#[async_trait]
impl<DS1, DS2, DS3> RecordsRepository for RecordsRepositoryImpl<DS1, DS2, DS3>
where
    DS1: RecordsApiDatasource,
    DS2: RosterApiDatasource,
    DS3: SummaryApiDatasource,
{
    async fn get_expenses(
        &self,
        period: Period,
        family_id: &str,
    ) -> Result<Vec<Expense>, ServerError> {
        self.records_datasource
            .expenses(period, Some(family_id))
            .await
    }

    async fn get_one_off_incomes(&self, period: Period) -> Result<Vec<OneOffIncome>, ServerError> {
        self.records_datasource.extras(period).await
    }

    async fn get_recurring_incomes(
        &self,
        period: Period,
        family_id: &str,
    ) -> Result<Vec<RecurringIncome>, ServerError> {
        self.records_datasource
            .incomes(period, Some(family_id))
            .await
    }

    async fn get_legacy_salaries(&self, period: Period) -> Result<Vec<LegacySalary>, ServerError> {
        if !self.legacy_salaries {
            return Ok(Vec::new());
        }
        self.records_datasource.salaries(period).await
    }

    async fn get_families(&self) -> Result<Vec<Family>, ServerError> {
        self.roster_datasource.families().await
    }

    async fn get_summary(&self, period: Period) -> Result<DashboardSummary, ServerError> {
        self.summary_datasource.summary(period).await
    }
}

impl<T: ApiTransport>
    RecordsRepositoryImpl<
        RecordsApiDatasourceImpl<T>,
        RosterApiDatasourceImpl<T>,
        SummaryApiDatasourceImpl<T>,
    >
{
    pub(crate) fn new(transport: Arc<T>, config: &ClientConfig) -> Self {
        let prefix = config.api_prefix.as_str();
        RecordsRepositoryImpl {
            records_datasource: RecordsApiDatasourceImpl::new(transport.clone(), prefix),
            roster_datasource: RosterApiDatasourceImpl::new(transport.clone(), prefix),
            summary_datasource: SummaryApiDatasourceImpl::new(transport, prefix),
            legacy_salaries: config.legacy_salaries,
        }
    }
}
