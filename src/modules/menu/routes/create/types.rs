pub mod request {
    use crate::{modules::menu::repository::Category, utils::money};
    use bigdecimal::BigDecimal;
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Body {
        pub name: String,
        pub description: String,
        #[serde(with = "money::as_number")]
        pub price: BigDecimal,
        pub image_url: Option<String>,
        pub category: Category,
        pub available: Option<bool>,
    }

    pub struct Payload {
        pub body: Value,
    }
}

pub mod response {
    use crate::{
        modules::menu::repository::MenuItem,
        utils::{
            response::{ApiError, ApiResponse},
            validation::FieldError,
        },
    };
    use axum::response::IntoResponse;

    pub enum Success {
        MenuItemCreated(MenuItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemCreated(item) => ApiResponse::created(item)
                    .with_message("Menu item created successfully")
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidPayload(Vec<FieldError>),
        MalformedBody,
        FailedToCreateMenuItem,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::InvalidPayload(details) => ApiError::validation(details),
                Error::MalformedBody => ApiError::BadRequest(String::from("Malformed JSON body")),
                Error::FailedToCreateMenuItem => {
                    ApiError::Internal(String::from("Failed to create menu item"))
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
