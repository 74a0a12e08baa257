pub mod request {
    use crate::modules::user::repository::Role;
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    pub struct Body {
        pub name: String,
        pub email: String,
        pub password: String,
        pub role: Option<Role>,
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
        UserRegistered(Session),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserRegistered(session) => ApiResponse::created(session)
                    .with_message("User registered successfully")
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidPayload(Vec<FieldError>),
        MalformedBody,
        EmailTaken,
        FailedToRegisterUser,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::InvalidPayload(details) => ApiError::validation(details),
                Error::MalformedBody => ApiError::BadRequest(String::from("Malformed JSON body")),
                Error::EmailTaken => {
                    ApiError::Conflict(String::from("User with this email already exists"))
                }
                Error::FailedToRegisterUser => {
                    ApiError::Internal(String::from("Failed to register user"))
                }
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
