//! Browser glue for the induction page: clock, native form validation, and
//! the vCard file download.

use chrono::{Datelike, NaiveDate};
use common::vcard::{VCard, VCARD_MIME};
use js_sys::{Array, Date};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlFormElement, Url};
use yew::NodeRef;

use crate::error::ClientError;

/// Today's calendar date in the browser's time zone.
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// ISO-8601 timestamp of local midnight on `date`.
pub fn local_midnight_iso(date: NaiveDate) -> String {
    Date::new_with_year_month_day(date.year() as u32, date.month0() as i32, date.day() as i32)
        .to_iso_string()
        .into()
}

pub fn now_iso() -> String {
    Date::new_0().to_iso_string().into()
}

/// Runs native constraint validation on the form. Invalid fields get the
/// browser's own messages and `false` is returned.
pub fn validate_form(form_ref: &NodeRef) -> bool {
    let Some(form) = form_ref.cast::<HtmlFormElement>() else {
        return false;
    };
    if form.check_validity() {
        true
    } else {
        form.report_validity();
        false
    }
}

pub fn reset_native_form(form_ref: &NodeRef) {
    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
        form.reset();
    }
}

/// Hands `card` to the browser as a `.vcf` download.
pub fn download_vcard(card: &VCard, site: &str) -> Result<(), ClientError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ClientError::Dom("document unavailable".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| ClientError::Dom("document has no body".to_string()))?;

    let parts = Array::new();
    parts.push(&JsValue::from_str(&card.to_vcf()));
    let options = BlobPropertyBag::new();
    options.set_type(VCARD_MIME);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| ClientError::Dom("unexpected element type".to_string()))?;
    link.set_href(&url);
    link.set_download(&card.file_name(site));
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Url::revoke_object_url(&url)?;
    Ok(())
}
