use super::service::token;
use crate::modules::user::{
    self,
    repository::User,
};
use crate::types::Context;
use crate::utils::response::ApiError;
use axum::{async_trait, extract::Extension, extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize, Clone, Debug)]
pub struct Auth {
    pub user: User,
}

async fn get_user_from_request(parts: &mut Parts) -> Result<User, ApiError> {
    let Extension(ctx) = parts
        .extract::<Extension<Arc<Context>>>()
        .await
        .map_err(|err| ApiError::Internal(format!("Missing application context: {}", err)))?;

    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|rejection| match rejection.is_missing() {
            true => ApiError::Unauthorized(String::from("No token provided")),
            false => ApiError::Unauthorized(String::from("Invalid token")),
        })?;

    let claims = token::verify(bearer.token(), &ctx.auth.jwt_secret)
        .map_err(|err| ApiError::Unauthorized(err.to_string()))?;

    user::repository::find_by_id(&ctx.db_conn.pool, claims.sub)
        .await
        .map_err(|_| ApiError::Internal(String::from("Failed to fetch user")))?
        .ok_or(ApiError::Unauthorized(String::from("Invalid token")))
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        get_user_from_request(parts).await.map(|user| Self { user })
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct AdminAuth {
    pub user: User,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdminAuth {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = get_user_from_request(parts).await?;

        if !user::repository::is_admin(&user) {
            return Err(ApiError::Forbidden(String::from("Admin access required")));
        }

        Ok(Self { user })
    }
}
