use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::ApiRequest;

/// Network seam. Implementations perform the authenticated GET and return the
/// raw response body; everything after that (decoding, normalization) happens
/// in this crate.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get(&self, request: &ApiRequest) -> Result<String, ServerError>;
}
