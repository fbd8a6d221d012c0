use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::family_model::FamilyModel,
    entities::{ApiRequest, Family},
};

use super::{api_transport::ApiTransport, records_api_datasource::decode};

#[async_trait]
pub(crate) trait RosterApiDatasource: Send + Sync {
    async fn families(&self) -> Result<Vec<Family>, ServerError>;
}

pub(crate) struct RosterApiDatasourceImpl<T: ApiTransport> {
    transport: Arc<T>,
    prefix: String,
}

impl<T: ApiTransport> RosterApiDatasourceImpl<T> {
    pub(crate) fn new(transport: Arc<T>, prefix: &str) -> Self {
        Self {
            transport,
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl<T: ApiTransport> RosterApiDatasource for RosterApiDatasourceImpl<T> {
    async fn families(&self) -> Result<Vec<Family>, ServerError> {
        let request = ApiRequest::new(format!("{}/families", self.prefix));
        decode_families(&self.transport.get(&request).await?)
    }
}

pub(crate) fn decode_families(body: &str) -> Result<Vec<Family>, ServerError> {
    decode::<FamilyModel, _>("families", body)
}
