use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::error;
use serde::Serialize;
use thiserror::Error;
use yew::functional::Reducible;

use crate::consent::GOVERNING_LAW;
use crate::pages::legal::LegalDocument;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InquiryError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter a phone number or email so the clinic can reach you.")]
    MissingContact,
    #[error("Please tell us briefly how we can help.")]
    MissingMessage,
    #[error("Please give your consent before sending the inquiry.")]
    ConsentRequired,
    #[error("Could not prepare your inquiry. Please call the clinic instead.")]
    RecordUnavailable,
    #[error("Your mail app could not be opened. Please email or call the clinic directly.")]
    MailClientUnavailable,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InquiryDraft {
    pub name: String,
    pub contact: String,
    pub message: String,
}

impl InquiryDraft {
    // Fields are checked in form order, consent last.
    pub fn submit(&self, consented: bool, at: DateTime<Utc>) -> Result<Inquiry, InquiryError> {
        let name = required(&self.name, InquiryError::MissingName)?;
        let contact = required(&self.contact, InquiryError::MissingContact)?;
        let message = required(&self.message, InquiryError::MissingMessage)?;
        if !consented {
            return Err(InquiryError::ConsentRequired);
        }

        Ok(Inquiry {
            name,
            contact,
            message,
            submitted_at: at,
        })
    }
}

fn required(value: &str, missing: InquiryError) -> Result<String, InquiryError> {
    let value = value.trim();
    if value.is_empty() {
        Err(missing)
    } else {
        Ok(value.to_string())
    }
}

/// Only constructible with consent given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inquiry {
    name: String,
    contact: String,
    message: String,
    submitted_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConsentRecord {
    pub consented: bool,
    pub law: &'static str,
    pub recorded_at: DateTime<Utc>,
}

impl Inquiry {
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn consent_record(&self) -> ConsentRecord {
        ConsentRecord {
            consented: true,
            law: GOVERNING_LAW,
            recorded_at: self.submitted_at,
        }
    }

    pub fn subject(&self) -> String {
        format!("Patient inquiry from {}", self.name)
    }

    pub fn body(&self) -> Result<String, serde_json::Error> {
        let record = serde_json::to_string(&self.consent_record())?;
        Ok(format!(
            "Name: {}\nContact: {}\n\n{}\n\n--\nConsent record: {}",
            self.name, self.contact, self.message, record
        ))
    }

    pub fn mailto_url(&self, clinic_email: &str) -> Result<String, InquiryError> {
        let body = self.body().map_err(|e| {
            error!("Failed to build consent record: {}", e);
            InquiryError::RecordUnavailable
        })?;
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            clinic_email,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&body)
        ))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InquiryForm {
    pub draft: InquiryDraft,
    pub consented: bool,
    pub error: Option<String>,
    pub open_document: Option<&'static LegalDocument>,
    /// Number of the sent inquiry whose confirmation is showing.
    pub confirmation: Option<u32>,
    pub submissions: u32,
}

pub enum FormAction {
    SetName(String),
    SetContact(String),
    SetMessage(String),
    SetConsent(bool),
    OpenDocument(&'static LegalDocument),
    CloseDocument,
    Rejected(InquiryError),
    Sent,
    HideConfirmation(u32),
}

impl Reducible for InquiryForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::SetName(name) => next.draft.name = name,
            FormAction::SetContact(contact) => next.draft.contact = contact,
            FormAction::SetMessage(message) => next.draft.message = message,
            FormAction::SetConsent(consented) => {
                next.consented = consented;
                if consented {
                    next.error = None;
                }
            }
            FormAction::OpenDocument(doc) => next.open_document = Some(doc),
            FormAction::CloseDocument => next.open_document = None,
            FormAction::Rejected(e) => {
                next.error = Some(e.to_string());
                next.confirmation = None;
            }
            FormAction::Sent => {
                next.draft = InquiryDraft::default();
                next.consented = false;
                next.error = None;
                next.submissions += 1;
                next.confirmation = Some(next.submissions);
            }
            FormAction::HideConfirmation(sent) => {
                if next.confirmation == Some(sent) {
                    next.confirmation = None;
                }
            }
        }
        next.into()
    }
}
