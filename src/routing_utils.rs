use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_macros::FromRequest;
use derive_more::Display;
use serde::Serialize;
use utoipa::ToResponse;

use crate::persistence::StoreWriteError;

/// Failure payload shared by every API endpoint
#[derive(Serialize, Debug, Display, ToResponse)]
#[display("API failure: {error}")]
#[response(examples(
    ("Save Failure" = (
        summary = "The store could not be rewritten (500)",
        value = json!({
            "success": false,
            "error": "Failed to save todos"
        })
    )),

    ("Malformed JSON" = (
        summary = "Invalid JSON passed to server (400)",
        value = json!({
            "success": false,
            "error": "Failed to parse the request body as JSON: EOF while parsing an object at line 4 column 0"
        })
    ))
))]
pub struct ApiFailure {
    pub success: bool,
    pub error: String,
}

/// Response type that wraps store write failures and turns them into [ApiFailure]s
pub struct StoreErrorResponse;

impl IntoResponse for StoreErrorResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(ApiFailure {
                success: false,
                error: "Failed to save todos".into(),
            }),
        )
            .into_response()
    }
}

impl From<StoreWriteError> for StoreErrorResponse {
    fn from(_: StoreWriteError) -> Self {
        StoreErrorResponse
    }
}

/// Wrapper for [axum::Json] which customizes the rejection to use the API's
/// failure payload
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonErrorResponse))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Response type representing JSON parse errors
pub struct JsonErrorResponse {
    parse_problem: String,
}

impl From<JsonRejection> for JsonErrorResponse {
    fn from(value: JsonRejection) -> Self {
        JsonErrorResponse {
            parse_problem: value.body_text(),
        }
    }
}

impl IntoResponse for JsonErrorResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            axum::Json(ApiFailure {
                success: false,
                error: self.parse_problem,
            }),
        )
            .into_response()
    }
}
