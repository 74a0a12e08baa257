pub mod request {
    use crate::{modules::menu::repository::Category, utils::money};
    use bigdecimal::BigDecimal;
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Body {
        pub name: Option<String>,
        pub description: Option<String>,
        #[serde(default, deserialize_with = "optional_price")]
        pub price: Option<BigDecimal>,
        pub image_url: Option<String>,
        pub category: Option<Category>,
        pub available: Option<bool>,
    }

    fn optional_price<'de, D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BigDecimal>, D::Error> {
        #[derive(Deserialize)]
        struct Price(#[serde(with = "money::as_number")] BigDecimal);

        Option::<Price>::deserialize(deserializer).map(|price| price.map(|Price(price)| price))
    }

    pub struct Payload {
        pub id: String,
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
        MenuItemUpdated(MenuItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemUpdated(item) => ApiResponse::ok(item)
                    .with_message("Menu item updated successfully")
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidPayload(Vec<FieldError>),
        MalformedBody,
        MenuItemNotFound,
        FailedToUpdateMenuItem,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::InvalidPayload(details) => ApiError::validation(details),
                Error::MalformedBody => ApiError::BadRequest(String::from("Malformed JSON body")),
                Error::MenuItemNotFound => ApiError::NotFound(String::from("Menu item not found")),
                Error::FailedToUpdateMenuItem => {
                    ApiError::Internal(String::from("Failed to update menu item"))
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
