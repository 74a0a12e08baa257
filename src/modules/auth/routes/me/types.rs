pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{modules::user::repository::User, utils::response::ApiResponse};
    use axum::response::IntoResponse;

    pub enum Success {
        User(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::User(user) => ApiResponse::ok(user).into_response(),
            }
        }
    }

    pub type Response = Success;
}
