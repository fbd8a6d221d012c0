use fractic_server_error::ServerError;
use iso_currency::Currency;
use serde_derive::Deserialize;

use crate::errors::InvalidIsoCurrencyCode;

/// Client settings. Every field has a default, so an empty RON struct `()`
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix of every API path.
    pub api_prefix: String,
    /// ISO 4217 code amounts are displayed in.
    pub currency: String,
    /// Category label of feed rows that carry no category.
    pub fallback_category_label: String,
    pub recent_transactions_limit: usize,
    pub report_wrap_width: usize,
    /// Fetch the legacy salary resource. Salaries are modeled as recurring
    /// incomes by current backends, which do not serve this resource.
    pub legacy_salaries: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_prefix: "/finance".to_string(),
            currency: "BRL".to_string(),
            fallback_category_label: "Geral".to_string(),
            recent_transactions_limit: 5,
            report_wrap_width: 74,
            legacy_salaries: false,
        }
    }
}

impl ClientConfig {
    pub fn currency(&self) -> Result<Currency, ServerError> {
        Currency::from_code(&self.currency)
            .ok_or_else(|| InvalidIsoCurrencyCode::new(&self.currency))
    }
}
