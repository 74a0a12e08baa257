use super::types::{
    request,
    response::{self, Session},
};
use crate::{
    modules::{
        auth::service::{password, token},
        user::{self, repository::Role},
    },
    types::Context,
    utils::validation,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::validate_registration_input(&payload.body, ctx.auth.admin_secret.as_deref())
        .into_result()
        .map_err(response::Error::InvalidPayload)?;

    let body = serde_json::from_value::<request::Body>(payload.body).map_err(|err| {
        tracing::warn!("Failed to deserialize registration body: {}", err);
        response::Error::MalformedBody
    })?;

    let email = body.email.trim().to_lowercase();

    if user::repository::find_by_email(&ctx.db_conn.pool, email.clone())
        .await
        .map_err(|_| response::Error::FailedToRegisterUser)?
        .is_some()
    {
        return Err(response::Error::EmailTaken);
    }

    let password_hash =
        password::hash(&body.password).map_err(|_| response::Error::FailedToRegisterUser)?;

    let user = user::repository::create(
        &ctx.db_conn.pool,
        user::repository::CreateUserPayload {
            name: body.name.trim().to_string(),
            email,
            password_hash,
            role: body.role.unwrap_or(Role::User),
        },
    )
    .await
    .map_err(|err| match err {
        user::repository::Error::EmailTaken => response::Error::EmailTaken,
        user::repository::Error::UnexpectedError => response::Error::FailedToRegisterUser,
    })?;

    tracing::info!("Registered {} account {}", user.role, user.id);

    let token = token::issue(&user, &ctx.auth.jwt_secret, ctx.auth.jwt_expires_in)
        .map_err(|_| response::Error::FailedToRegisterUser)?;

    Ok(response::Success::UserRegistered(Session { user, token }))
}
