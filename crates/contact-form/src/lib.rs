//! Contact form submission flow.
//!
//! A [`ContactForm`] owns the four-field [`ContactSubmission`], sends it once
//! through a [`ContactApi`] and reports the result through an explicitly
//! passed [`Notifier`]. Fields are cleared only after the backend answers
//! `200 OK`; any failure keeps them so the visitor can retry as is.

mod api;
mod error;
mod form;
mod notification;
mod submission;

pub use api::*;
pub use error::*;
pub use form::*;
pub use notification::*;
pub use submission::*;
