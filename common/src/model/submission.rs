//! The completed induction record and the form state it is assembled from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::safety_card::{SafetyCard, SafetyCardRows};

/// Payload posted to the submission workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    /// Induction date as an ISO-8601 timestamp, or the displayed text when
    /// it could not be parsed.
    pub date: String,
    pub site: String,
    pub full_name: String,
    pub phone_number: String,
    pub white_card_number: String,
    /// `data:image/png;base64,...`
    pub signature_image: String,
    pub additional_cards: Vec<SafetyCard>,
    /// Moment of submission, ISO-8601.
    pub timestamp: String,
}

/// Date recovered from the header text at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionDate {
    Parsed(NaiveDate),
    Raw(String),
}

impl SubmissionDate {
    /// Renders the wire value. `to_iso` converts a parsed calendar date into
    /// a timestamp in the caller's local time zone.
    pub fn resolve(self, to_iso: impl FnOnce(NaiveDate) -> String) -> String {
        match self {
            SubmissionDate::Parsed(date) => to_iso(date),
            SubmissionDate::Raw(text) => text,
        }
    }
}

/// Values typed by the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisitorDetails {
    pub full_name: String,
    pub phone_number: String,
    pub white_card_number: String,
}

/// Everything the induction form holds between edits and submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InductionForm {
    pub details: VisitorDetails,
    pub cards: SafetyCardRows,
}

/// Values captured outside the form itself at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionContext {
    pub site: String,
    pub date: String,
    pub signature_image: String,
    pub timestamp: String,
}

/// Reasons a submission is refused before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please provide a signature before submitting.")]
    MissingSignature,

    #[error("A submission is already in progress.")]
    InFlight,
}

/// How the submission workflow answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Failed,
}

impl SubmissionOutcome {
    pub fn is_success(self) -> bool {
        self == SubmissionOutcome::Accepted
    }

    /// Notice shown to the visitor.
    pub fn message(self) -> &'static str {
        match self {
            SubmissionOutcome::Accepted => "Form submitted successfully!",
            SubmissionOutcome::Failed => "Error submitting form. Please try again.",
        }
    }
}

impl InductionForm {
    /// Snapshot of the form as a submission. The form itself is left as-is
    /// so a failed attempt can be retried.
    pub fn to_submission(&self, context: SubmissionContext) -> FormSubmission {
        FormSubmission {
            date: context.date,
            site: context.site,
            full_name: self.details.full_name.clone(),
            phone_number: self.details.phone_number.clone(),
            white_card_number: self.details.white_card_number.clone(),
            signature_image: context.signature_image,
            additional_cards: self.cards.cards(),
            timestamp: context.timestamp,
        }
    }

    /// Clears every field and trims the card rows to one.
    pub fn reset(&mut self) {
        self.details = VisitorDetails::default();
        self.cards.reset();
    }
}

/// The form plus the in-flight flag of the one submission allowed at a time.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    pub form: InductionForm,
    in_flight: bool,
}

impl FormSession {
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Starts a submission. `signature_image` is `None` when nothing was
    /// drawn; the attempt is then refused and the form stays as it is.
    pub fn begin(
        &mut self,
        signature_image: Option<String>,
        site: String,
        date: String,
        timestamp: String,
    ) -> Result<FormSubmission, SubmitError> {
        if self.in_flight {
            return Err(SubmitError::InFlight);
        }
        let signature_image = signature_image
            .filter(|image| !image.is_empty())
            .ok_or(SubmitError::MissingSignature)?;
        self.in_flight = true;
        Ok(self.form.to_submission(SubmissionContext {
            site,
            date,
            signature_image,
            timestamp,
        }))
    }

    /// Settles the in-flight submission. Only an accepted one clears the
    /// form; a failure keeps every value for a retry.
    pub fn finish(&mut self, outcome: SubmissionOutcome) {
        self.in_flight = false;
        if outcome.is_success() {
            self.form.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> InductionForm {
        let mut form = InductionForm {
            details: VisitorDetails {
                full_name: "Jane Citizen".to_string(),
                phone_number: "0400 111 222".to_string(),
                white_card_number: "WC-778899".to_string(),
            },
            cards: SafetyCardRows::default(),
        };
        let row = form.cards.rows()[0].id;
        form.cards.set_name(row, "Forklift".to_string());
        form.cards.set_number(row, "LF1".to_string());
        form.cards.add();
        form
    }

    fn context() -> SubmissionContext {
        SubmissionContext {
            site: "Depot".to_string(),
            date: "2022-03-21T13:00:00.000Z".to_string(),
            signature_image: "data:image/png;base64,iVBORw0KGgo=".to_string(),
            timestamp: "2022-03-22T01:02:03.000Z".to_string(),
        }
    }

    #[test]
    fn submission_serializes_with_camel_case_keys() {
        let submission = filled_form().to_submission(context());
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["fullName"], "Jane Citizen");
        assert_eq!(json["phoneNumber"], "0400 111 222");
        assert_eq!(json["whiteCardNumber"], "WC-778899");
        assert_eq!(json["signatureImage"], "data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(json["site"], "Depot");
        assert_eq!(json["additionalCards"][0]["name"], "Forklift");
        assert_eq!(json["additionalCards"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn building_a_submission_leaves_the_form_untouched() {
        let form = filled_form();
        let before = form.clone();
        let _ = form.to_submission(context());
        assert_eq!(form, before);
    }

    #[test]
    fn reset_clears_details_and_trims_cards() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form.details, VisitorDetails::default());
        assert_eq!(form.cards.len(), 1);
        assert!(form.cards.cards().is_empty());
    }

    fn begin(session: &mut FormSession, signature: Option<&str>) -> Result<FormSubmission, SubmitError> {
        session.begin(
            signature.map(str::to_string),
            "Depot".to_string(),
            "Monday, 21st of March".to_string(),
            "2022-03-22T01:02:03.000Z".to_string(),
        )
    }

    #[test]
    fn missing_signature_refuses_and_keeps_form() {
        let mut session = FormSession {
            form: filled_form(),
            ..FormSession::default()
        };
        let before = session.form.clone();

        assert_eq!(begin(&mut session, None), Err(SubmitError::MissingSignature));
        assert_eq!(begin(&mut session, Some("")), Err(SubmitError::MissingSignature));
        assert!(!session.is_submitting());
        assert_eq!(session.form, before);
        assert_eq!(
            SubmitError::MissingSignature.to_string(),
            "Please provide a signature before submitting."
        );
    }

    #[test]
    fn only_one_submission_in_flight() {
        let mut session = FormSession {
            form: filled_form(),
            ..FormSession::default()
        };
        let submission = begin(&mut session, Some("data:image/png;base64,AA==")).unwrap();
        assert_eq!(submission.full_name, "Jane Citizen");
        assert_eq!(submission.date, "Monday, 21st of March");
        assert!(session.is_submitting());
        assert_eq!(
            begin(&mut session, Some("data:image/png;base64,AA==")),
            Err(SubmitError::InFlight)
        );
    }

    #[test]
    fn failed_submission_keeps_every_value() {
        let mut session = FormSession {
            form: filled_form(),
            ..FormSession::default()
        };
        let before = session.form.clone();
        begin(&mut session, Some("data:image/png;base64,AA==")).unwrap();

        session.finish(SubmissionOutcome::Failed);
        assert!(!session.is_submitting());
        assert_eq!(session.form, before);
        assert_eq!(
            SubmissionOutcome::Failed.message(),
            "Error submitting form. Please try again."
        );
    }

    #[test]
    fn accepted_submission_resets_the_form() {
        let mut session = FormSession {
            form: filled_form(),
            ..FormSession::default()
        };
        begin(&mut session, Some("data:image/png;base64,AA==")).unwrap();

        session.finish(SubmissionOutcome::Accepted);
        assert!(!session.is_submitting());
        assert_eq!(session.form.details, VisitorDetails::default());
        assert_eq!(session.form.cards.len(), 1);
        assert!(session.form.cards.cards().is_empty());
        assert_eq!(SubmissionOutcome::Accepted.message(), "Form submitted successfully!");
    }

    #[test]
    fn raw_date_is_passed_through() {
        let raw = SubmissionDate::Raw("sometime soon".to_string());
        assert_eq!(raw.resolve(|_| unreachable!()), "sometime soon");

        let parsed = SubmissionDate::Parsed(NaiveDate::from_ymd_opt(2022, 3, 22).unwrap());
        assert_eq!(parsed.resolve(|d| d.to_string()), "2022-03-22");
    }
}
