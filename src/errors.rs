use fractic_server_error::{define_client_error, define_internal_error};

// Parsing-related.
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidFormNumber, "Invalid numeric form value: '{value}'.", { value: &str });
define_client_error!(UnknownFormField, "Unknown form field: '{field}'.", { field: &str });
define_client_error!(InvalidSessionUser, "Invalid session user stored under '{key}'.", { key: &str });

// Store-related.
define_client_error!(StoreNotConfigured, "No store configured for bills.");
define_client_error!(BillNotFound, "Bill '{bill_id}' not found.", { bill_id: &str });
define_client_error!(MissingBillSelector, "Cannot update a bill without a selector.");
define_internal_error!(
    StoreRequestFailed,
    "Store request '{operation}' failed: {details}.",
    { operation: &str, details: &str }
);
