use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::summary_model::SummaryModel,
    entities::{ApiRequest, DashboardSummary, Period},
    errors::InvalidJson,
};

use super::api_transport::ApiTransport;

#[async_trait]
pub(crate) trait SummaryApiDatasource: Send + Sync {
    async fn summary(&self, period: Period) -> Result<DashboardSummary, ServerError>;
}

pub(crate) struct SummaryApiDatasourceImpl<T: ApiTransport> {
    transport: Arc<T>,
    prefix: String,
}

impl<T: ApiTransport> SummaryApiDatasourceImpl<T> {
    pub(crate) fn new(transport: Arc<T>, prefix: &str) -> Self {
        Self {
            transport,
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl<T: ApiTransport> SummaryApiDatasource for SummaryApiDatasourceImpl<T> {
    async fn summary(&self, period: Period) -> Result<DashboardSummary, ServerError> {
        let request = ApiRequest::new(format!("{}/summary", self.prefix))
            .param("month", period.month)
            .param("year", period.year);
        decode_summary(&self.transport.get(&request).await?)
    }
}

pub(crate) fn decode_summary(body: &str) -> Result<DashboardSummary, ServerError> {
    let model: SummaryModel =
        serde_json::from_str(body).map_err(|e| InvalidJson::with_debug("summary", &e))?;
    Ok(model.into())
}
