use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors of the JSON API. Rendered as `{"detail": "..."}` so clients can
/// show the detail string verbatim.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn describe_validation(errors: &validator::ValidationErrors) -> String {
    let mut fields = errors
        .field_errors()
        .into_keys()
        .map(|field| field.to_string())
        .collect::<Vec<_>>();
    fields.sort();

    format!("Invalid value for: {}", fields.join(", "))
}

impl From<portfolio_shared::Error> for ApiError {
    fn from(err: portfolio_shared::Error) -> Self {
        match err {
            portfolio_shared::Error::Validate(errors) => {
                ApiError::Unprocessable(describe_validation(&errors))
            }
            portfolio_shared::Error::Server(err) => {
                tracing::error!("{err}");
                ApiError::Internal
            }
            portfolio_shared::Error::Unknown(err) => {
                tracing::error!("{err}");
                ApiError::Internal
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("{err}");
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Input {
        #[validate(email)]
        email: String,
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let errors = Input {
            email: "nope".to_string(),
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        let err = ApiError::from(portfolio_shared::Error::Validate(errors));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "Invalid value for: email, name");
    }

    #[test]
    fn test_unknown_error_hides_cause() {
        let err = ApiError::from(portfolio_shared::Error::Unknown(anyhow::anyhow!(
            "disk I/O error"
        )));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), INTERNAL_ERROR_MESSAGE);
    }
}
