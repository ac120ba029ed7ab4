//! Contact form — the four-state submission controller and the outbound relay.
//!
//! `FormController` is the per-form state machine. `ContactService` keeps one
//! controller per open form and drives the single outbound relay call.
//! All relay traffic goes through a `FormRelay`; nothing else talks to the
//! external form endpoint.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub mod controller;
pub mod form;
pub mod handlers;
pub mod relay;
pub mod service;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::Idle => "idle",
            FormStatus::Submitting => "submitting",
            FormStatus::Success => "success",
            FormStatus::Error => "error",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ContactError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A submission is already in flight")]
    AlreadySubmitting,

    #[error("Form fields are locked while submitting")]
    FormLocked,

    #[error("Cannot {action} while the form is {}", .from.as_str())]
    InvalidTransition {
        from: FormStatus,
        action: &'static str,
    },

    #[error("Contact form {0} not found")]
    FormNotFound(Uuid),

    #[error("Too many open contact forms (limit {limit})")]
    TooManyForms { limit: usize },

    #[error("Submission task failed: {0}")]
    SubmissionAborted(String),
}
