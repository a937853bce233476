#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use portfolio_contact_form::{ContactApi, ContactSubmission, Notification, Notifier, SubmitError};
use tokio::sync::Notify;

/// Answers submissions from a queue of canned results, `Ok(())` once empty.
#[derive(Default)]
pub struct FakeApi {
    responses: Mutex<VecDeque<Result<(), SubmitError>>>,
    calls: Mutex<Vec<ContactSubmission>>,
    gated: bool,
    pub started: Notify,
    pub release: Notify,
}

impl FakeApi {
    pub fn new(responses: impl IntoIterator<Item = Result<(), SubmitError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            ..Default::default()
        })
    }

    /// Each call blocks until `release` is notified.
    pub fn gated(responses: impl IntoIterator<Item = Result<(), SubmitError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            gated: true,
            ..Default::default()
        })
    }

    pub fn calls(&self) -> Vec<ContactSubmission> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ContactApi for FakeApi {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        self.calls.lock().unwrap().push(submission.clone());

        if self.gated {
            self.started.notify_one();
            self.release.notified().await;
        }

        self.responses.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

#[derive(Default)]
pub struct RecordingNotifier(Mutex<Vec<Notification>>);

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.0.lock().unwrap().push(notification);
    }
}

pub fn jane() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "Hi there".to_owned(),
    }
}
