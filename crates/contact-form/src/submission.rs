use serde::{Deserialize, Serialize};
use strum::{EnumString, VariantArray};

/// Body of `POST /api/contact`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();

        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::VARIANTS.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Input names as they appear in the HTML form.
#[derive(EnumString, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}
