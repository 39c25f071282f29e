//! Runtime configuration: workflow endpoints come from the host's
//! `/api/config`, with compiled-in defaults when it is unreachable.

use common::model::config::ClientConfig;
use gloo_net::http::Request;
use web_sys::UrlSearchParams;

use crate::error::ClientError;

const CONFIG_PATH: &str = "/api/config";

/// Query parameter selecting the site.
const SITE_PARAM: &str = "site";

pub async fn load_client_config() -> ClientConfig {
    match fetch_client_config().await {
        Ok(config) => config,
        Err(err) => {
            gloo_console::warn!("Using built-in configuration:", err.to_string());
            ClientConfig::default()
        }
    }
}

async fn fetch_client_config() -> Result<ClientConfig, ClientError> {
    let response = Request::get(CONFIG_PATH).send().await?;
    if !response.ok() {
        return Err(ClientError::Status(response.status()));
    }
    Ok(response.json::<ClientConfig>().await?)
}

/// Site named by the `site` query parameter, or the configured default.
pub fn requested_site(config: &ClientConfig) -> String {
    let requested = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get(SITE_PARAM));
    config.resolve_site(requested.as_deref())
}
