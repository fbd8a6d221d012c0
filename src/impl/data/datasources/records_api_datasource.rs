use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    data::models::{
        expense_model::ExpenseModel,
        income_model::{ExtrasResponseModel, IncomeModel},
        salary_model::SalaryModel,
    },
    entities::{ApiRequest, Expense, LegacySalary, OneOffIncome, Period, RecurringIncome},
    errors::InvalidJson,
};

use super::api_transport::ApiTransport;

#[async_trait]
pub(crate) trait RecordsApiDatasource: Send + Sync {
    async fn expenses(
        &self,
        period: Period,
        family_id: Option<&str>,
    ) -> Result<Vec<Expense>, ServerError>;
    async fn extras(&self, period: Period) -> Result<Vec<OneOffIncome>, ServerError>;
    async fn incomes(
        &self,
        period: Period,
        family_id: Option<&str>,
    ) -> Result<Vec<RecurringIncome>, ServerError>;
    async fn salaries(&self, period: Period) -> Result<Vec<LegacySalary>, ServerError>;
}

pub(crate) struct RecordsApiDatasourceImpl<T: ApiTransport> {
    transport: Arc<T>,
    prefix: String,
}

impl<T: ApiTransport> RecordsApiDatasourceImpl<T> {
    pub(crate) fn new(transport: Arc<T>, prefix: &str) -> Self {
        Self {
            transport,
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, resource: &str, period: Period, family_id: Option<&str>) -> ApiRequest {
        let request = ApiRequest::new(format!("{}/{}", self.prefix, resource))
            .param("month", period.month)
            .param("year", period.year);
        match family_id {
            Some(id) => request.param("familyId", id),
            None => request,
        }
    }

    async fn fetch(&self, request: ApiRequest) -> Result<String, ServerError> {
        debug!(url = %request.url(), "fetching records");
        self.transport.get(&request).await
    }
}

#[async_trait]
impl<T: ApiTransport> RecordsApiDatasource for RecordsApiDatasourceImpl<T> {
    async fn expenses(
        &self,
        period: Period,
        family_id: Option<&str>,
    ) -> Result<Vec<Expense>, ServerError> {
        decode_expenses(&self.fetch(self.request("expenses", period, family_id)).await?)
    }

    async fn extras(&self, period: Period) -> Result<Vec<OneOffIncome>, ServerError> {
        decode_extras(&self.fetch(self.request("extras", period, None)).await?)
    }

    async fn incomes(
        &self,
        period: Period,
        family_id: Option<&str>,
    ) -> Result<Vec<RecurringIncome>, ServerError> {
        decode_incomes(&self.fetch(self.request("incomes", period, family_id)).await?)
    }

    async fn salaries(&self, period: Period) -> Result<Vec<LegacySalary>, ServerError> {
        decode_salaries(&self.fetch(self.request("salaries", period, None)).await?)
    }
}

// Decoding.
// ---

pub(crate) fn decode<M, E>(resource: &str, body: &str) -> Result<Vec<E>, ServerError>
where
    M: DeserializeOwned,
    E: From<M>,
{
    let models: Vec<M> =
        serde_json::from_str(body).map_err(|e| InvalidJson::with_debug(resource, &e))?;
    debug!(resource, count = models.len(), "decoded response");
    Ok(models.into_iter().map(E::from).collect())
}

pub(crate) fn decode_expenses(body: &str) -> Result<Vec<Expense>, ServerError> {
    decode::<ExpenseModel, _>("expenses", body)
}

pub(crate) fn decode_incomes(body: &str) -> Result<Vec<RecurringIncome>, ServerError> {
    decode::<IncomeModel, _>("incomes", body)
}

pub(crate) fn decode_salaries(body: &str) -> Result<Vec<LegacySalary>, ServerError> {
    decode::<SalaryModel, _>("salaries", body)
}

pub(crate) fn decode_extras(body: &str) -> Result<Vec<OneOffIncome>, ServerError> {
    let response: ExtrasResponseModel =
        serde_json::from_str(body).map_err(|e| InvalidJson::with_debug("extras", &e))?;
    let entries = response.into_entries();
    debug!(resource = "extras", count = entries.len(), "decoded response");
    Ok(entries.into_iter().map(Into::into).collect())
}
