use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use super::validation::FieldError;

/// Success half of the response envelope: `{ success, data, message? }`.
pub struct ApiResponse<T> {
    status: StatusCode,
    data: T,
    message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data,
            message: None,
        }
    }

    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            data,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let mut body = json!({
            "success": true,
            "data": self.data,
        });

        if let Some(message) = self.message {
            body["message"] = Value::String(message);
        }

        (self.status, Json(body)).into_response()
    }
}

/// Every failure a request can end with. Route-level error enums convert into
/// this type, which owns the `{ success: false, error, details? }` format.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<FieldError>,
    },
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(details: Vec<FieldError>) -> Self {
        Self::Validation {
            message: String::from("Validation failed"),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let Self::Internal(message) = &self {
            tracing::error!("Request failed: {}", message);
        }

        let mut body = json!({
            "success": false,
            "error": self.to_string(),
        });

        if let Self::Validation { details, .. } = self {
            body["details"] = json!(details);
        }

        (status, Json(body)).into_response()
    }
}

/// Untyped JSON body. Syntax and content-type problems are reported through the
/// regular error envelope instead of axum's plain-text rejection, so the
/// validators always see a parsed value.
pub struct JsonBody(pub Value);

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for JsonBody {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<Value>::from_request(req, state)
            .await
            .map(|Json(body)| Self(body))
            .map_err(|rejection| {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                ApiError::BadRequest(String::from("Malformed JSON body"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::header,
    };

    async fn body_of(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn success_envelope() {
        let response = ApiResponse::created(json!({ "id": "1" }))
            .with_message("Created")
            .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_of(response).await,
            json!({ "success": true, "data": { "id": "1" }, "message": "Created" })
        );
    }

    #[tokio::test]
    async fn message_is_omitted_when_absent() {
        let body = body_of(ApiResponse::ok(vec![1, 2]).into_response()).await;
        assert_eq!(body, json!({ "success": true, "data": [1, 2] }));
    }

    #[tokio::test]
    async fn validation_errors_carry_details() {
        let response = ApiError::validation(vec![FieldError {
            field: String::from("email"),
            message: String::from("Email is required"),
        }])
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            json!({
                "success": false,
                "error": "Validation failed",
                "details": [{ "field": "email", "message": "Email is required" }]
            })
        );
    }

    #[tokio::test]
    async fn maps_taxonomy_to_status_codes() {
        let cases = [
            (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (ApiError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::Conflict("x".into()), StatusCode::CONFLICT),
            (ApiError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), status);
            assert_eq!(
                body_of(response).await,
                json!({ "success": false, "error": "x" })
            );
        }
    }

    #[tokio::test]
    async fn malformed_bodies_use_the_envelope() {
        let request = axum::http::Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ \"name\": "))
            .unwrap();

        let rejection = JsonBody::from_request(request, &()).await.err().unwrap();
        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
        assert_eq!(rejection.to_string(), "Malformed JSON body");
    }

    #[tokio::test]
    async fn parses_json_bodies() {
        let request = axum::http::Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{ "status": "Preparing" }"#))
            .unwrap();

        let JsonBody(body) = JsonBody::from_request(request, &()).await.ok().unwrap();
        assert_eq!(body, json!({ "status": "Preparing" }));
    }
}
