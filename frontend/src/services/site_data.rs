use common::model::site::SiteData;
use common::requests::SiteDataRequest;
use gloo_net::http::Request;

use crate::error::ClientError;

/// Requests site and induction data for `site`.
///
/// Any transport, status or decoding failure is logged and degrades to
/// [`SiteData::unavailable`], leaving the page fields blank.
pub async fn fetch_site_data(url: &str, site: &str) -> SiteData {
    match request_site_data(url, site).await {
        Ok(data) => data,
        Err(err) => {
            gloo_console::error!("Error fetching site data from API:", err.to_string());
            SiteData::unavailable()
        }
    }
}

async fn request_site_data(url: &str, site: &str) -> Result<SiteData, ClientError> {
    let body = SiteDataRequest {
        site: site.to_string(),
    };
    let response = Request::post(url).json(&body)?.send().await?;
    if !response.ok() {
        return Err(ClientError::Status(response.status()));
    }
    let text = response.text().await?;
    Ok(SiteData::from_json(&text)?)
}
