//! Error handling for the Pokémon API: maps our [`Error`] type to HTTP responses.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use diesel::result::DatabaseErrorKind;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, TryFromInto};
use utoipa::{ToResponse, ToSchema};

use crate::helpers::error::recursive_error_message;
use crate::service_env::ServiceEnv;
use crate::Error;

impl ResponseError for Error {
    /// Returns the [`StatusCode`] to use for this [`Error`].
    ///
    /// Input errors are the client's fault (400); query errors depend on their cause (see
    /// [`status_code_for_query_error`]). Anything else means the service itself is in trouble (500).
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Input { .. } => StatusCode::BAD_REQUEST,
            Error::Query { source, .. } => {
                status_code_for_query_error(source).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            },
            Error::EnvVar { .. } | Error::PoolBuild { .. } | Error::Pool { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    /// Returns the JSON [`HttpResponse`] describing this [`Error`] (see [`ErrorResponse::from`]).
    fn error_response(&self) -> HttpResponse<BoxBody> {
        let error_response: ErrorResponse = self.into();
        HttpResponse::build(error_response.status_code).json(error_response)
    }
}

/// Returns the [`StatusCode`] to use for a [query error](diesel::result::Error), if it was caused
/// by the client.
///
/// | Query error                                   | Status code        |
/// |-----------------------------------------------|--------------------|
/// | [`NotFound`](diesel::result::Error::NotFound) | `404 Not Found`    |
/// | Unique or check constraint violation          | `400 Bad Request`  |
/// | Anything else                                 | `None`             |
pub fn status_code_for_query_error(error: &diesel::result::Error) -> Option<StatusCode> {
    match error {
        diesel::result::Error::NotFound => Some(StatusCode::NOT_FOUND),
        diesel::result::Error::DatabaseError(
            DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::CheckViolation,
            _,
        ) => Some(StatusCode::BAD_REQUEST),
        _ => None,
    }
}

#[cfg_attr(
    doc,
    doc = r"
        Body of every error response returned by the Pokémon API.

        # Notes

        The [`internal_error`](ErrorResponse::internal_error) field is only populated when running
        in a [`Development`] environment (see [`ErrorResponse::from`]).

        [`Development`]: ServiceEnv::Development
    "
)]
#[cfg_attr(not(doc), doc = "Pokémon API error information")]
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, ToResponse)]
#[response(
    description = "Server error",
    example = json!({
        "status_code": 500,
        "error": "Internal Server Error"
    }),
)]
pub struct ErrorResponse {
    /// HTTP status code
    #[serde_as(as = "TryFromInto<u16>")]
    #[schema(value_type = u16, minimum = 100, maximum = 999)]
    pub status_code: StatusCode,

    /// Canonical reason of the HTTP status code
    pub error: String,

    /// Which fields failed to deserialize or validate, for invalid requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Chain of internal errors (only when the server is running in development)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_error: Option<String>,
}

impl From<&Error> for ErrorResponse {
    /// Creates the [`ErrorResponse`] sent back to the client for an internal [`Error`].
    ///
    /// # Service environment
    ///
    /// Internal error information is only included when running in a [`Development`]
    /// environment; in [`Production`], clients only get the status code and input details.
    ///
    /// # Examples
    ///
    /// ```
    /// use actix_web::http::StatusCode;
    /// use pokemon_api::api::errors::ErrorResponse;
    /// use pokemon_api::error::QueryContext;
    ///
    /// let error = diesel::result::Error::NotFound.with_query_context(|| "pokemon not found");
    /// let error_response = ErrorResponse::from(&error);
    ///
    /// assert_eq!(StatusCode::NOT_FOUND, error_response.status_code);
    /// assert_eq!("Not Found", error_response.error);
    /// ```
    ///
    /// [`Development`]: ServiceEnv::Development
    /// [`Production`]: ServiceEnv::Production
    fn from(value: &Error) -> Self {
        let status_code = value.status_code();

        Self {
            status_code,
            error: status_code
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .into(),
            details: match value {
                Error::Input { source, .. } => Some(source.to_string()),
                _ => None,
            },
            internal_error: ServiceEnv::current()
                .is_development()
                .then(|| recursive_error_message(value)),
        }
    }
}

/// Error handler for `actix_web_validator`'s extractor configs.
///
/// Converts extraction errors (like a malformed JSON body) into our [`Error`] type, so that they
/// produce the same [`ErrorResponse`] as errors returned by the API endpoints.
///
/// # Examples
///
/// ```no_run
/// use actix_web_validator::{JsonConfig, PathConfig};
/// use pokemon_api::api::errors::actix_error_handler;
///
/// let json_config = JsonConfig::default().error_handler(actix_error_handler);
/// let path_config = PathConfig::default().error_handler(actix_error_handler);
/// ```
pub fn actix_error_handler<E, R>(err: E, _req: &R) -> actix_web::error::Error
where
    E: Into<Error>,
{
    Into::<Error>::into(err).into()
}
