use std::sync::Arc;

pub const SUCCESS_TITLE: &str = "Message Sent Successfully!";
pub const SUCCESS_DESCRIPTION: &str =
    "Thank you for your message. I'll get back to you within 24 hours.";
pub const ERROR_TITLE: &str = "Error Sending Message";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// One toast: exactly one is emitted per submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success() -> Self {
        Self {
            title: SUCCESS_TITLE.to_owned(),
            description: SUCCESS_DESCRIPTION.to_owned(),
            variant: Variant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: ERROR_TITLE.to_owned(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

/// Receives the notifications of a form. Passed in explicitly so the flow
/// runs without any UI attached.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Writes notifications to the log. Used by the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            Variant::Default => {
                tracing::info!(title = %notification.title, "{}", notification.description)
            }
            Variant::Destructive => {
                tracing::warn!(title = %notification.title, "{}", notification.description)
            }
        }
    }
}
