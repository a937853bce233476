use std::sync::{
    Mutex, MutexGuard, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    ContactApi, ContactSubmission, Field, Notification, Notifier, error_message,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
}

/// Result of one submission attempt, carrying the notification emitted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sent(Notification),
    Failed(Notification),
}

impl Outcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Outcome::Sent(_))
    }

    pub fn notification(&self) -> &Notification {
        match self {
            Outcome::Sent(n) | Outcome::Failed(n) => n,
        }
    }
}

/// Clears the busy flag when dropped, whether the attempt finished or its
/// future was cancelled.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct ContactForm<A, N> {
    api: A,
    notifier: N,
    submission: Mutex<ContactSubmission>,
    submitting: AtomicBool,
}

impl<A: ContactApi, N: Notifier> ContactForm<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            submission: Mutex::new(ContactSubmission::default()),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn status(&self) -> FormStatus {
        if self.submitting.load(Ordering::Acquire) {
            FormStatus::Submitting
        } else {
            FormStatus::Idle
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status() == FormStatus::Submitting
    }

    /// Current field values.
    pub fn submission(&self) -> ContactSubmission {
        self.fields().clone()
    }

    /// Edits one field. Inputs are disabled while submitting, so this returns
    /// `false` and leaves the record untouched during that time.
    pub fn set(&self, field: Field, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }

        self.fields().set(field, value);

        true
    }

    /// Replaces the whole record, with the same restriction as [`Self::set`].
    pub fn replace(&self, submission: ContactSubmission) -> bool {
        if self.is_submitting() {
            return false;
        }

        *self.fields() = submission;

        true
    }

    /// Sends the current record once.
    ///
    /// Returns `None` without contacting the backend when another submission
    /// of this form is still in flight.
    pub async fn submit(&self) -> Option<Outcome> {
        let Some(_in_flight) = InFlight::acquire(&self.submitting) else {
            tracing::debug!("submission already in flight, ignoring");
            return None;
        };

        let submission = self.submission();

        let outcome = match self.api.submit(&submission).await {
            Ok(()) => {
                *self.fields() = ContactSubmission::default();
                Outcome::Sent(Notification::success())
            }
            Err(err) => {
                tracing::error!("contact form submission error: {err}");
                Outcome::Failed(Notification::error(error_message(&err)))
            }
        };

        self.notifier.notify(outcome.notification().clone());

        Some(outcome)
    }

    fn fields(&self) -> MutexGuard<'_, ContactSubmission> {
        self.submission
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
