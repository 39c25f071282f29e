//! # Client Configuration Service
//!
//! Exposes the runtime settings the induction page needs before it can talk
//! to the remote workflows.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for the configuration endpoint.
const API_PATH: &str = "/api/config";

/// Configures and returns the Actix `Scope` for the configuration route.
///
/// # Registered Routes:
///
/// *   **`GET /api/config`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the `ClientConfig` built at startup as JSON:
///       the site data and submission workflow URLs, the optional terms
///       document URL, and the default site identifier.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get::process))
}
