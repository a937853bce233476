use std::{sync::Arc, time::Duration};

use reqwest::{Client, StatusCode};

use crate::{ContactSubmission, SubmitError, detail_from_body};

/// Backend collaborator receiving contact submissions.
#[async_trait::async_trait]
pub trait ContactApi: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

#[async_trait::async_trait]
impl<A: ContactApi + ?Sized> ContactApi for Arc<A> {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        (**self).submit(submission).await
    }
}

/// Posts submissions as JSON to `<base-url>/api/contact`.
#[derive(Debug, Clone)]
pub struct HttpContactApi {
    client: Client,
    endpoint: String,
}

impl HttpContactApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl ContactApi for HttpContactApi {
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(());
        }

        let detail = match response.bytes().await {
            Ok(body) => detail_from_body(&body),
            Err(err) => {
                tracing::debug!("unable to read error body: {err}");
                None
            }
        };

        Err(SubmitError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}
