//! State of the induction page.
//!
//! One `InductionPage` lives for the whole page session and owns everything
//! the session mutates: the site contact used for vCard export, the form
//! values, and the signature pad. The document viewer keeps its own state
//! and is mounted only while the signing dialog is open.

use common::model::config::ClientConfig;
use common::model::site::{ContactInfo, SiteDisplay};
use common::model::submission::FormSession;
use yew::prelude::*;

use crate::components::signature::SignatureCapture;

use super::helpers::today;

pub struct InductionPage {
    /// Endpoints and defaults, replaced once `/api/config` answers.
    pub config: ClientConfig,

    /// Header text. Starts with only today's date filled in.
    pub display: SiteDisplay,

    /// Parsed site contact, kept for the vCard download.
    pub contact: Option<ContactInfo>,

    /// Induction fragment with field values already merged in.
    pub induction_html: Option<String>,

    /// Form values and the in-flight submission flag.
    pub session: FormSession,

    pub signature: SignatureCapture,

    /// Reference to the `<form>` used for native validation and reset.
    pub form_ref: NodeRef,

    pub modal_open: bool,

    /// Loading overlay visibility.
    pub loading: bool,

    /// Guards the one-time startup fetches.
    pub started: bool,
}

impl InductionPage {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            display: SiteDisplay::new(None, today()),
            contact: None,
            induction_html: None,
            session: FormSession::default(),
            signature: SignatureCapture::new(),
            form_ref: NodeRef::default(),
            modal_open: false,
            loading: true,
            started: false,
        }
    }
}
