use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use portfolio_contact_form::{ContactForm, ContactSubmission, Notification, TracingNotifier};

use crate::{config::SiteConfig, routes::AppState, template::Template};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub site: SiteConfig,
    pub submission: ContactSubmission,
    pub notification: Option<Notification>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    let site = template.site();

    template.render(ContactTemplate {
        site,
        submission: ContactSubmission::default(),
        notification: None,
    })
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ContactSubmission>,
) -> impl IntoResponse {
    let form = ContactForm::new(app_state.contact_api.clone(), TracingNotifier);
    form.replace(input);

    let notification = form
        .submit()
        .await
        .map(|outcome| outcome.notification().clone());

    let site = template.site();

    template.render(ContactTemplate {
        site,
        submission: form.submission(),
        notification,
    })
}
