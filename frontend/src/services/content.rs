//! Induction document fragment.
//!
//! The fragment is fetched as HTML, parsed into a detached element, and
//! every `[data-field]` element whose key is a known `InductionField` with a
//! value in `InductionData` gets that value as its text. Other markers keep
//! the fragment's default content.

use common::model::induction::{InductionData, FIELD_ATTRIBUTE};
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::error::ClientError;

const CONTENT_PATH: &str = "induction-content.html";

pub async fn load_induction_content(
    data: Option<InductionData>,
) -> Result<String, ClientError> {
    let response = Request::get(CONTENT_PATH).send().await?;
    if !response.ok() {
        return Err(ClientError::Status(response.status()));
    }
    let html = response.text().await?;
    populate_fragment(&html, data.as_ref())
}

/// Fills field markers in `html` and returns the resulting markup.
pub fn populate_fragment(html: &str, data: Option<&InductionData>) -> Result<String, ClientError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ClientError::Dom("document unavailable".to_string()))?;
    let scratch = document.create_element("div")?;
    scratch.set_inner_html(html);

    if let Some(data) = data {
        let markers = scratch.query_selector_all(&format!("[{}]", FIELD_ATTRIBUTE))?;
        for index in 0..markers.length() {
            let Some(element) = markers
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let value = element
                .get_attribute(FIELD_ATTRIBUTE)
                .and_then(|key| data.value_for_key(&key).map(str::to_string));
            if let Some(value) = value {
                element.set_text_content(Some(&value));
            }
        }
    }

    Ok(scratch.inner_html())
}
