//! Update function for the induction page.
//!
//! Elm-style: receives the page state, the `Context`, and a `Msg`, mutates
//! the state and returns whether the view should re-render. Pointer samples
//! draw straight onto the signature canvas and never re-render.

use chrono::Datelike;
use common::dates::submission_date;
use common::model::site::{SiteDisplay, SiteInfo};
use common::model::submission::{SubmissionOutcome, SubmitError};
use common::vcard::VCard;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::overlays::{show_toast, ToastKind};
use crate::services::submission::submit_induction;
use crate::tops_sheet::modal_sheet::lock_body_scroll;

use super::helpers::{
    download_vcard, local_midnight_iso, now_iso, reset_native_form, today, validate_form,
};
use super::messages::Msg;
use super::state::InductionPage;

/// Delay before measuring the signature canvas, letting the dialog settle.
const SIGNATURE_INIT_DELAY_MS: u32 = 100;

pub fn update(page: &mut InductionPage, ctx: &Context<InductionPage>, msg: Msg) -> bool {
    match msg {
        Msg::ConfigLoaded(config) => {
            page.config = config;
            true
        }
        Msg::SiteDataLoaded(data) => {
            page.contact = data.site_info.as_ref().and_then(SiteInfo::contact);
            page.display = SiteDisplay::new(data.site_info.as_ref(), today());
            true
        }
        Msg::InductionContentLoaded(html) => {
            page.induction_html = html;
            page.loading = false;
            true
        }
        Msg::UpdateFullName(value) => {
            page.session.form.details.full_name = value;
            true
        }
        Msg::UpdatePhoneNumber(value) => {
            page.session.form.details.phone_number = value;
            true
        }
        Msg::UpdateWhiteCard(value) => {
            page.session.form.details.white_card_number = value;
            true
        }
        Msg::AddCardRow => {
            page.session.form.cards.add();
            true
        }
        Msg::RemoveCardRow(id) => page.session.form.cards.remove(id),
        Msg::UpdateCardName(id, value) => {
            page.session.form.cards.set_name(id, value);
            true
        }
        Msg::UpdateCardNumber(id, value) => {
            page.session.form.cards.set_number(id, value);
            true
        }
        Msg::DownloadContact => {
            download_contact(page);
            false
        }
        Msg::OpenModal => {
            if page.modal_open || page.session.is_submitting() || !validate_form(&page.form_ref) {
                return false;
            }
            page.modal_open = true;
            lock_body_scroll(true);

            let link = ctx.link().clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(SIGNATURE_INIT_DELAY_MS).await;
                link.send_message(Msg::InitializeSignature);
            });
            true
        }
        Msg::InitializeSignature => {
            if page.modal_open {
                if let Err(err) = page.signature.initialize() {
                    gloo_console::error!("Error initializing signature pad:", err.to_string());
                }
            }
            false
        }
        Msg::CloseModal => {
            close_modal(page);
            true
        }
        Msg::ClearSignature => {
            page.signature.clear();
            false
        }
        Msg::PenDown(point) => {
            page.signature.pen_down(point);
            false
        }
        Msg::PenMove(point) => {
            page.signature.pen_move(point);
            false
        }
        Msg::PenUp => {
            page.signature.pen_up();
            false
        }
        Msg::Submit => submit(page, ctx),
        Msg::SubmissionSucceeded => {
            finish_submission(page, SubmissionOutcome::Accepted);
            reset_native_form(&page.form_ref);
            page.signature.clear();
            true
        }
        Msg::SubmissionFailed(message) => {
            gloo_console::error!("Error submitting form:", message);
            finish_submission(page, SubmissionOutcome::Failed);
            true
        }
    }
}

fn close_modal(page: &mut InductionPage) {
    page.modal_open = false;
    lock_body_scroll(false);
    page.signature.clear();
}

/// Validates the signature, assembles the payload and posts it. The form
/// keeps its values until the workflow confirms receipt.
fn submit(page: &mut InductionPage, ctx: &Context<InductionPage>) -> bool {
    let date = submission_date(&page.display.date, today().year()).resolve(local_midnight_iso);
    let site = page.display.site_name.clone().unwrap_or_default();
    let submission = match page.session.begin(page.signature.export_png(), site, date, now_iso()) {
        Ok(submission) => submission,
        Err(SubmitError::MissingSignature) => {
            show_toast(&SubmitError::MissingSignature.to_string(), ToastKind::Error);
            return false;
        }
        Err(SubmitError::InFlight) => return false,
    };
    gloo_console::log!("Submitting induction for site", submission.site.clone());

    close_modal(page);
    page.loading = true;

    let url = page.config.submission_url.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match submit_induction(&url, &submission).await {
            Ok(()) => link.send_message(Msg::SubmissionSucceeded),
            Err(err) => link.send_message(Msg::SubmissionFailed(err.to_string())),
        }
    });
    true
}

fn finish_submission(page: &mut InductionPage, outcome: SubmissionOutcome) {
    page.session.finish(outcome);
    page.loading = false;
    let kind = if outcome.is_success() {
        ToastKind::Success
    } else {
        ToastKind::Error
    };
    show_toast(outcome.message(), kind);
}

fn download_contact(page: &InductionPage) {
    let Some(site) = page.display.site_name.as_deref() else {
        show_toast("Site information not available", ToastKind::Error);
        return;
    };
    match VCard::for_contact(page.contact.as_ref()) {
        Ok(card) => {
            if let Err(err) = download_vcard(&card, site) {
                gloo_console::error!("Error downloading contact card:", err.to_string());
            }
        }
        Err(err) => show_toast(&err.to_string(), ToastKind::Error),
    }
}
