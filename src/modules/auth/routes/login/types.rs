pub mod request {
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    pub struct Body {
        pub email: String,
        pub password: String,
    }

    pub struct Payload {
        pub body: Value,
    }
}

pub mod response {
    use crate::{
        modules::user::repository::User,
        utils::{
            response::{ApiError, ApiResponse},
            validation::FieldError,
        },
    };
    use axum::response::IntoResponse;
    use serde::Serialize;

    #[derive(Serialize)]
    pub struct Session {
        pub user: User,
        pub token: String,
    }

    pub enum Success {
        LoggedIn(Session),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LoggedIn(session) => ApiResponse::ok(session)
                    .with_message("Login successful")
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidPayload(Vec<FieldError>),
        MalformedBody,
        InvalidCredentials,
        FailedToLogin,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::InvalidPayload(details) => ApiError::validation(details),
                Error::MalformedBody => ApiError::BadRequest(String::from("Malformed JSON body")),
                Error::InvalidCredentials => {
                    ApiError::Unauthorized(String::from("Invalid email or password"))
                }
                Error::FailedToLogin => ApiError::Internal(String::from("Failed to log in")),
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            ApiError::from(self).into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
