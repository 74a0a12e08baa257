use super::types::{
    request,
    response::{self, Session},
};
use crate::{
    modules::{
        auth::service::{password, token},
        user,
    },
    types::Context,
    utils::validation,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::validate_login_input(&payload.body)
        .into_result()
        .map_err(response::Error::InvalidPayload)?;

    let body = serde_json::from_value::<request::Body>(payload.body).map_err(|err| {
        tracing::warn!("Failed to deserialize login body: {}", err);
        response::Error::MalformedBody
    })?;

    let user = user::repository::find_by_email(&ctx.db_conn.pool, body.email.trim().to_lowercase())
        .await
        .map_err(|_| response::Error::FailedToLogin)?
        .ok_or(response::Error::InvalidCredentials)?;

    if !password::verify(&body.password, &user.password_hash) {
        return Err(response::Error::InvalidCredentials);
    }

    let token = token::issue(&user, &ctx.auth.jwt_secret, ctx.auth.jwt_expires_in)
        .map_err(|_| response::Error::FailedToLogin)?;

    Ok(response::Success::LoggedIn(Session { user, token }))
}
