use std::time::Duration;

use anyhow::bail;
use portfolio_contact::{ListInput, Status};
use portfolio_contact_form::{ContactForm, ContactSubmission, HttpContactApi, TracingNotifier};

/// Runs the contact form flow once against the backend.
pub async fn send(
    config: crate::config::Config,
    submission: ContactSubmission,
    base_url: Option<String>,
) -> anyhow::Result<()> {
    let base_url = base_url.unwrap_or_else(|| config.backend_base_url());
    let api = HttpContactApi::new(&base_url, Duration::from_secs(config.backend.timeout_secs))?;

    let form = ContactForm::new(api, TracingNotifier);
    form.replace(submission);

    let Some(outcome) = form.submit().await else {
        bail!("a submission is already in flight");
    };

    if !outcome.is_sent() {
        bail!("{}", outcome.notification().description);
    }

    Ok(())
}

pub async fn list(
    config: crate::config::Config,
    status: Option<Status>,
    limit: u32,
) -> anyhow::Result<()> {
    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    let query = portfolio_contact::Query(pool.clone());

    let rows = query.list(ListInput { status, limit }).await?;

    for row in &rows {
        println!(
            "{}\t{}\t{} <{}>\t{}",
            row.id,
            row.status(),
            row.name,
            row.email,
            row.subject
        );
    }

    tracing::info!("{} message(s)", rows.len());
    pool.close().await;

    Ok(())
}

pub async fn set_status(
    config: crate::config::Config,
    id: String,
    status: Status,
) -> anyhow::Result<()> {
    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    let command = portfolio_contact::Command(pool.clone());

    let updated = command.update_status(&id, status).await?;
    pool.close().await;

    if !updated {
        tracing::error!("message {id} not found");
        bail!("Message not found");
    }

    tracing::info!("message {id} is now {status}");

    Ok(())
}
