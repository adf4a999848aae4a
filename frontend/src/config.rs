//! Build-time configuration.

use shared::endpoint;

/// Base URL of the prediction service, overridable at build time through
/// the `API_BASE` environment variable.
const API_BASE: Option<&str> = option_env!("API_BASE");

pub fn predict_endpoint() -> String {
    endpoint::predict_url(API_BASE.unwrap_or(endpoint::DEFAULT_API_BASE))
}
