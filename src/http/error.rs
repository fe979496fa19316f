use crate::domain::schema::{Rule, ValidationErrors};
use crate::http::response::ErrorBody;
use crate::utils::error::SiteError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub const INVALID_PAYLOAD: &str = "Payload non valido";
pub const INTERNAL_FAILURE: &str = "Errore interno";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Payload non valido: {0}")]
    InvalidPayload(ValidationErrors),

    #[error("{message}")]
    Internal { message: &'static str },
}

impl ApiError {
    /// Validation errors stay client errors. Anything else is logged here and
    /// replaced by the endpoint's generic `message`.
    pub fn from_site_error(err: SiteError, message: &'static str) -> Self {
        match err {
            SiteError::Validation(errors) => ApiError::InvalidPayload(errors),
            other => {
                tracing::error!(error = %other, "{}", message);
                ApiError::Internal { message }
            }
        }
    }

    pub fn malformed_json(err: &serde_json::Error) -> Self {
        ApiError::InvalidPayload(ValidationErrors::form(Rule::InvalidJson(err.to_string())))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::InvalidPayload(errors) => ErrorBody {
                message: INVALID_PAYLOAD,
                errors: Some(errors),
            },
            ApiError::Internal { message } => ErrorBody {
                message,
                errors: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let mut errors = ValidationErrors::new();
        errors.push_field("heroTitle", Rule::MinLength(3));

        let api = ApiError::from_site_error(SiteError::Validation(errors), "boom");
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_errors_are_hidden() {
        let api = ApiError::from_site_error(
            SiteError::StoreUnavailable { store: "contact" },
            "Errore durante il salvataggio richiesta contatto",
        );

        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            api.to_string(),
            "Errore durante il salvataggio richiesta contatto"
        );
    }

    #[test]
    fn test_malformed_json_is_a_form_error() {
        let err = serde_json::from_slice::<serde_json::Value>(b"{oops").unwrap_err();
        match ApiError::malformed_json(&err) {
            ApiError::InvalidPayload(errors) => {
                assert_eq!(errors.form_errors().len(), 1);
                assert_eq!(errors.fields().count(), 0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
