//! Registry of open contact forms and the submission flow around the relay.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::controller::FormController;
use super::form::{ContactForm, FormPatch};
use super::relay::{FailureKind, FormRelay};
use super::{ContactError, FormStatus};

pub const DEFAULT_FORM_TTL: Duration = Duration::from_secs(30 * 60);
pub const DEFAULT_MAX_FORMS: usize = 1024;

/// Bounds on the in-memory registry.
#[derive(Debug, Clone, Copy)]
pub struct FormLimits {
    /// Forms untouched for longer than this are dropped on the next `open`.
    pub idle_ttl: Duration,
    pub max_forms: usize,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            idle_ttl: DEFAULT_FORM_TTL,
            max_forms: DEFAULT_MAX_FORMS,
        }
    }
}

/// What a client needs to render one form instance.
#[derive(Debug, Clone, Serialize)]
pub struct FormSnapshot {
    pub id: Uuid,
    pub status: FormStatus,
    pub fields: ContactForm,
    pub inputs_disabled: bool,
}

impl FormSnapshot {
    fn of(id: Uuid, controller: &FormController) -> Self {
        Self {
            id,
            status: controller.status(),
            fields: controller.fields().clone(),
            inputs_disabled: controller.inputs_disabled(),
        }
    }
}

struct FormSlot {
    controller: FormController,
    last_touched: Instant,
}

impl FormSlot {
    fn touch(&mut self) -> &mut FormController {
        self.last_touched = Instant::now();
        &mut self.controller
    }

    fn is_stale(&self, now: Instant, ttl: Duration) -> bool {
        self.controller.status() != FormStatus::Submitting
            && now.duration_since(self.last_touched) >= ttl
    }
}

type SharedSlot = Arc<Mutex<FormSlot>>;

pub struct ContactService {
    forms: RwLock<HashMap<Uuid, SharedSlot>>,
    relay: Arc<dyn FormRelay>,
    access_key: String,
    limits: FormLimits,
}

impl ContactService {
    pub fn new(
        relay: Arc<dyn FormRelay>,
        access_key: String,
        limits: FormLimits,
    ) -> Self {
        Self {
            forms: RwLock::new(HashMap::new()),
            relay,
            access_key,
            limits,
        }
    }

    /// Opens a fresh form after sweeping idle ones.
    ///
    /// In-flight forms are never swept. Once `max_forms` live forms remain the
    /// call is refused with `TooManyForms`.
    pub async fn open(&self) -> Result<FormSnapshot, ContactError> {
        let mut forms = self.forms.write().await;

        let now = Instant::now();
        let before = forms.len();
        forms.retain(|_, slot| match slot.try_lock() {
            Ok(slot) => !slot.is_stale(now, self.limits.idle_ttl),
            Err(_) => true,
        });
        if forms.len() < before {
            debug!(evicted = before - forms.len(), "Swept idle contact forms");
        }

        if forms.len() >= self.limits.max_forms {
            warn!(open = forms.len(), "Contact form registry is full");
            return Err(ContactError::TooManyForms {
                limit: self.limits.max_forms,
            });
        }

        let id = Uuid::new_v4();
        let controller = FormController::new();
        let snapshot = FormSnapshot::of(id, &controller);
        let slot = FormSlot {
            controller,
            last_touched: now,
        };
        forms.insert(id, Arc::new(Mutex::new(slot)));
        Ok(snapshot)
    }

    pub async fn close(&self, id: Uuid) -> Result<(), ContactError> {
        self.forms
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(ContactError::FormNotFound(id))
    }

    pub async fn snapshot(&self, id: Uuid) -> Result<FormSnapshot, ContactError> {
        let form = self.form(id).await?;
        let mut slot = form.lock().await;
        Ok(FormSnapshot::of(id, slot.touch()))
    }

    pub async fn update(&self, id: Uuid, patch: FormPatch) -> Result<FormSnapshot, ContactError> {
        let form = self.form(id).await?;
        let mut slot = form.lock().await;
        let controller = slot.touch();
        controller.update(patch)?;
        Ok(FormSnapshot::of(id, controller))
    }

    /// Runs one submission to completion.
    ///
    /// The relay call and the closing transition run in their own task, so a
    /// caller that goes away mid-flight still leaves the form resolved. The
    /// form lock is never held across the relay call; a second submit
    /// meanwhile is refused by the controller before any request is made.
    pub async fn submit(&self, id: Uuid) -> Result<FormSnapshot, ContactError> {
        let form = self.form(id).await?;

        let submission = {
            let mut slot = form.lock().await;
            slot.touch().begin_submit(&self.access_key)?
        };
        info!(form_id = %id, "Contact form submitting");

        let relay = Arc::clone(&self.relay);
        let flight = tokio::spawn(async move {
            let outcome = relay.send(&submission).await;

            let mut slot = form.lock().await;
            let controller = slot.touch();
            controller.complete(outcome)?;
            match controller.last_failure() {
                Some(failure) if failure.kind == FailureKind::Transport => error!(
                    form_id = %id,
                    "Contact form relay unreachable: {}",
                    failure.detail
                ),
                Some(failure) => warn!(
                    form_id = %id,
                    "Contact form rejected by relay: {}",
                    failure.detail
                ),
                None => info!(form_id = %id, "Contact form submitted"),
            }
            Ok::<_, ContactError>(FormSnapshot::of(id, controller))
        });

        flight
            .await
            .map_err(|e| ContactError::SubmissionAborted(e.to_string()))?
    }

    pub async fn retry(&self, id: Uuid) -> Result<FormSnapshot, ContactError> {
        let form = self.form(id).await?;
        let mut slot = form.lock().await;
        let controller = slot.touch();
        controller.retry()?;
        Ok(FormSnapshot::of(id, controller))
    }

    pub async fn send_another(&self, id: Uuid) -> Result<FormSnapshot, ContactError> {
        let form = self.form(id).await?;
        let mut slot = form.lock().await;
        let controller = slot.touch();
        controller.send_another()?;
        Ok(FormSnapshot::of(id, controller))
    }

    async fn form(&self, id: Uuid) -> Result<SharedSlot, ContactError> {
        self.forms
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(ContactError::FormNotFound(id))
    }
}
