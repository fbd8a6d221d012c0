use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    entities::ClientConfig,
    errors::{InvalidRon, ReadError},
};

pub(crate) struct ConfigRonDatasource;

impl ConfigRonDatasource {
    pub(crate) fn from_string(s: &str) -> Result<ClientConfig, ServerError> {
        let config: ClientConfig =
            from_str(s).map_err(|e| InvalidRon::with_debug("ClientConfig", &e))?;
        // Fail on load rather than on first display.
        config.currency()?;
        Ok(config)
    }

    pub(crate) async fn from_file<P>(path: P) -> Result<ClientConfig, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        Self::from_string(&s)
    }
}
