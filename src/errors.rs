use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_internal_error!(
    TransportFailed,
    "Request to '{path}' failed.",
    { path: &str }
);

// Parsing-related.
define_client_error!(InvalidJson, "Invalid {resource} response (invalid JSON format).", { resource: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });

// Registration-related.
define_client_error!(
    InvalidFormField,
    "Invalid value for field '{field}': {reason}.",
    { field: &str, reason: &str }
);

// Export-related.
define_internal_error!(CsvWriteError, "Error writing CSV export.");
