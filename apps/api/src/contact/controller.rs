//! Per-form submission state machine.
//!
//! ```text
//! idle ──submit──▶ submitting ──ok──▶ success ──send_another──▶ idle
//!                       └──fail──▶ error ──retry──▶ idle
//! ```
//!
//! `success` and `error` are only left by an explicit user action. There is no
//! timeout transition out of `submitting`.

use serde::Serialize;

use super::form::{ContactForm, FormPatch};
use super::relay::{FailureKind, RelayError, Submission};
use super::{ContactError, FormStatus};

/// What went wrong on the last failed submission. Kept for diagnostics only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureDiagnostic {
    pub kind: FailureKind,
    pub detail: String,
}

#[derive(Debug, Clone)]
pub struct FormController {
    fields: ContactForm,
    status: FormStatus,
    last_failure: Option<FailureDiagnostic>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            fields: ContactForm::default(),
            status: FormStatus::Idle,
            last_failure: None,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn fields(&self) -> &ContactForm {
        &self.fields
    }

    pub fn last_failure(&self) -> Option<&FailureDiagnostic> {
        self.last_failure.as_ref()
    }

    /// Inputs are disabled for the whole flight.
    pub fn inputs_disabled(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn update(&mut self, patch: FormPatch) -> Result<(), ContactError> {
        if self.inputs_disabled() {
            return Err(ContactError::FormLocked);
        }
        self.fields.apply(patch);
        Ok(())
    }

    /// `idle → submitting`. Fails without moving if a field is missing or a
    /// submission is already in flight.
    pub fn begin_submit(&mut self, access_key: &str) -> Result<Submission, ContactError> {
        match self.status {
            FormStatus::Idle => {}
            FormStatus::Submitting => return Err(ContactError::AlreadySubmitting),
            from => {
                return Err(ContactError::InvalidTransition {
                    from,
                    action: "submit",
                })
            }
        }
        self.fields.validate()?;

        self.status = FormStatus::Submitting;
        Ok(Submission {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            subject: self.fields.subject.clone(),
            message: self.fields.message.clone(),
            access_key: access_key.to_string(),
        })
    }

    /// `submitting → success | error` from the relay outcome.
    pub fn complete(
        &mut self,
        outcome: Result<(), RelayError>,
    ) -> Result<FormStatus, ContactError> {
        if self.status != FormStatus::Submitting {
            return Err(ContactError::InvalidTransition {
                from: self.status,
                action: "complete a submission",
            });
        }
        self.status = match outcome {
            Ok(()) => {
                self.last_failure = None;
                FormStatus::Success
            }
            Err(e) => {
                self.last_failure = Some(FailureDiagnostic {
                    kind: e.kind(),
                    detail: e.to_string(),
                });
                FormStatus::Error
            }
        };
        Ok(self.status)
    }

    /// `error → idle`. Entered values are kept for the next attempt.
    pub fn retry(&mut self) -> Result<(), ContactError> {
        if self.status != FormStatus::Error {
            return Err(ContactError::InvalidTransition {
                from: self.status,
                action: "retry",
            });
        }
        self.status = FormStatus::Idle;
        Ok(())
    }

    /// `success → idle` with a blank form.
    pub fn send_another(&mut self) -> Result<(), ContactError> {
        if self.status != FormStatus::Success {
            return Err(ContactError::InvalidTransition {
                from: self.status,
                action: "send another message",
            });
        }
        self.fields = ContactForm::default();
        self.last_failure = None;
        self.status = FormStatus::Idle;
        Ok(())
    }
}
