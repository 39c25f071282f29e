//! View for the induction page.
//!
//! Layout: site header, the populated induction fragment, the visitor form
//! with its safety-card rows, the signing dialog, and the loading overlay.

use common::model::safety_card::CardRow;
use web_sys::{HtmlInputElement, PointerEvent};
use yew::prelude::*;

use crate::components::document_viewer::DocumentViewer;
use crate::components::signature::{capture_pointer, pointer_point};
use crate::overlays::loading_overlay;
use crate::tops_sheet::modal_sheet::ModalSheet;

use super::messages::Msg;
use super::state::InductionPage;

pub fn view(page: &InductionPage, ctx: &Context<InductionPage>) -> Html {
    html! {
        <main class="induction-page">
            { site_header(page, ctx) }
            { induction_content(page) }
            { visitor_form(page, ctx) }
            { signing_dialog(page, ctx) }
            { loading_overlay(page.loading) }
        </main>
    }
}

fn site_header(page: &InductionPage, ctx: &Context<InductionPage>) -> Html {
    let display = &page.display;
    let contact = display.contact_name.as_ref().map(|name| {
        html! {
            <button
                id="siteContact"
                class="contact-button"
                type="button"
                title="Save contact"
                onclick={ctx.link().callback(|_| Msg::DownloadContact)}
            >
                { name.clone() }
            </button>
        }
    });

    html! {
        <header class="site-header">
            if let Some(name) = &display.site_name {
                <h1 id="siteName">{ name.clone() }</h1>
            }
            if let Some(address) = &display.address {
                <p id="siteAddress" class="site-address">{ address.clone() }</p>
            }
            <p id="currentDate" class="site-date">{ display.date.clone() }</p>
            { for contact }
        </header>
    }
}

fn induction_content(page: &InductionPage) -> Html {
    match &page.induction_html {
        Some(markup) => html! {
            <section id="inductionContent" class="induction-content">
                { Html::from_html_unchecked(AttrValue::from(markup.clone())) }
            </section>
        },
        None => html! {
            <section id="inductionContent" class="induction-content"></section>
        },
    }
}

fn visitor_form(page: &InductionPage, ctx: &Context<InductionPage>) -> Html {
    let link = ctx.link();
    let details = &page.session.form.details;
    let can_remove = page.session.form.cards.can_remove();

    html! {
        <form id="inductionForm" ref={page.form_ref.clone()} onsubmit={|e: SubmitEvent| e.prevent_default()}>
            <div class="form-group">
                <label for="fullName">{"Full name"}</label>
                <input
                    id="fullName"
                    name="fullName"
                    type="text"
                    autocomplete="name"
                    required=true
                    value={details.full_name.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::UpdateFullName(input_value(&e)))}
                />
            </div>
            <div class="form-group">
                <label for="phoneNumber">{"Phone number"}</label>
                <input
                    id="phoneNumber"
                    name="phoneNumber"
                    type="tel"
                    autocomplete="tel"
                    required=true
                    value={details.phone_number.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::UpdatePhoneNumber(input_value(&e)))}
                />
            </div>
            <div class="form-group">
                <label for="whiteCardNumber">{"White card number"}</label>
                <input
                    id="whiteCardNumber"
                    name="whiteCardNumber"
                    type="text"
                    required=true
                    value={details.white_card_number.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::UpdateWhiteCard(input_value(&e)))}
                />
            </div>

            <fieldset class="safety-cards">
                <legend>{"Additional safety cards"}</legend>
                <div id="additionalCards">
                    { for page.session.form.cards.rows().iter().map(|row| card_row(row, can_remove, ctx)) }
                </div>
                <button
                    id="addCardButton"
                    class="secondary"
                    type="button"
                    onclick={link.callback(|_| Msg::AddCardRow)}
                >
                    {"+ Add card"}
                </button>
            </fieldset>

            <button
                id="signSubmitButton"
                class="primary"
                type="button"
                disabled={page.session.is_submitting()}
                onclick={link.callback(|_| Msg::OpenModal)}
            >
                {"Sign & Submit"}
            </button>
        </form>
    }
}

fn card_row(row: &CardRow, can_remove: bool, ctx: &Context<InductionPage>) -> Html {
    let link = ctx.link();
    let id = row.id;
    let remove_style = if can_remove { "" } else { "display: none;" };

    html! {
        <div class="card-row" key={id}>
            <input
                class="card-name"
                type="text"
                placeholder="Card name"
                value={row.name.clone()}
                oninput={link.callback(move |e: InputEvent| Msg::UpdateCardName(id, input_value(&e)))}
            />
            <input
                class="card-number"
                type="text"
                placeholder="Card number"
                value={row.number.clone()}
                oninput={link.callback(move |e: InputEvent| Msg::UpdateCardNumber(id, input_value(&e)))}
            />
            <button
                class="remove-card"
                type="button"
                title="Remove card"
                style={remove_style}
                onclick={link.callback(move |_| Msg::RemoveCardRow(id))}
            >
                {"✕"}
            </button>
        </div>
    }
}

fn signing_dialog(page: &InductionPage, ctx: &Context<InductionPage>) -> Html {
    let link = ctx.link();
    let terms = page
        .config
        .terms_document_url
        .clone()
        .filter(|_| page.modal_open)
        .map(|url| html! { <DocumentViewer url={url} /> });

    let onpointerdown = link.batch_callback(|e: PointerEvent| {
        e.prevent_default();
        capture_pointer(&e);
        pointer_point(&e).map(Msg::PenDown)
    });
    let onpointermove = link.batch_callback(|e: PointerEvent| {
        e.prevent_default();
        pointer_point(&e).map(Msg::PenMove)
    });
    let onpointerup = link.callback(|_: PointerEvent| Msg::PenUp);
    let onpointercancel = link.callback(|_: PointerEvent| Msg::PenUp);

    html! {
        <ModalSheet open={page.modal_open} on_dismiss={link.callback(|_: ()| Msg::CloseModal)}>
            <div class="modal-content" role="dialog" aria-modal="true" aria-labelledby="submitModalTitle">
                <button
                    class="modal-close"
                    type="button"
                    title="Close"
                    onclick={link.callback(|_| Msg::CloseModal)}
                >
                    {"✕"}
                </button>
                <h2 id="submitModalTitle">{"Sign induction"}</h2>
                { for terms }
                <p class="signature-hint">
                    {"Sign below to confirm you have read and understood this site induction."}
                </p>
                <canvas
                    id="signatureCanvas"
                    class="signature-canvas"
                    ref={page.signature.canvas_ref.clone()}
                    {onpointerdown}
                    {onpointermove}
                    {onpointerup}
                    {onpointercancel}
                />
                <div class="modal-actions">
                    <button class="secondary" type="button" onclick={link.callback(|_| Msg::ClearSignature)}>
                        {"Clear"}
                    </button>
                    <button class="secondary" type="button" onclick={link.callback(|_| Msg::CloseModal)}>
                        {"Cancel"}
                    </button>
                    <button
                        id="submitButton"
                        class="primary"
                        type="button"
                        disabled={page.session.is_submitting()}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        {"Submit"}
                    </button>
                </div>
            </div>
        </ModalSheet>
    }
}

fn input_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlInputElement>().value()
}
