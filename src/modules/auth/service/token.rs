//! HS256 JSON Web Tokens.

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::modules::user::repository::{Role, User};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid token")]
    Invalid,
    #[error("Token expired")]
    Expired,
    #[error("Failed to sign token")]
    Signing,
}

type Result<T> = std::result::Result<T, Error>;

pub fn issue(user: &User, secret: &str, expires_in: Duration) -> Result<String> {
    issue_at(user, secret, expires_in, Utc::now().timestamp())
}

fn issue_at(user: &User, secret: &str, expires_in: Duration, now: i64) -> Result<String> {
    let lifetime = i64::try_from(expires_in.as_secs()).unwrap_or(i64::MAX);
    let claims = Claims {
        sub: user.id.clone(),
        role: user.role,
        iat: now,
        exp: now.saturating_add(lifetime),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| {
        tracing::error!("Failed to sign token: {}", err);
        Error::Signing
    })
}

pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => Error::Expired,
        _ => Error::Invalid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "correct horse battery staple";

    fn user(role: Role) -> User {
        User {
            id: String::from("01J0USER00000000000000000A1"),
            name: String::from("Ada Obi"),
            email: String::from("ada@example.com"),
            password_hash: String::new(),
            role,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn issued_tokens_verify() {
        let token = issue(&user(Role::Admin), SECRET, Duration::from_secs(60)).unwrap();
        let claims = verify(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "01J0USER00000000000000000A1");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, 60);
    }

    #[test]
    fn rejects_tokens_signed_with_another_secret() {
        let token = issue(&user(Role::User), "other secret", Duration::from_secs(60)).unwrap();
        assert_eq!(verify(&token, SECRET), Err(Error::Invalid));
    }

    #[test]
    fn rejects_tampered_claims() {
        let token = issue(&user(Role::User), SECRET, Duration::from_secs(60)).unwrap();
        let admin = issue(&user(Role::Admin), "forger", Duration::from_secs(3600)).unwrap();

        let parts: Vec<_> = token.split('.').collect();
        let forged_claims = admin.split('.').nth(1).unwrap();

        let tampered = format!("{}.{}.{}", parts[0], forged_claims, parts[2]);
        assert_eq!(verify(&tampered, SECRET), Err(Error::Invalid));
    }

    #[test]
    fn rejects_other_algorithms() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: String::from("01J0USER00000000000000000A1"),
            role: Role::Admin,
            iat: now,
            exp: now + 60,
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(verify(&token, SECRET), Err(Error::Invalid));
    }

    #[test]
    fn reports_expiry_separately() {
        let now = Utc::now().timestamp();

        let fresh = issue_at(&user(Role::User), SECRET, Duration::from_secs(60), now - 30).unwrap();
        assert!(verify(&fresh, SECRET).is_ok());

        let stale = issue_at(&user(Role::User), SECRET, Duration::from_secs(60), now - 120).unwrap();
        assert_eq!(verify(&stale, SECRET), Err(Error::Expired));

        let forged = issue_at(&user(Role::User), "forger", Duration::from_secs(60), now - 120).unwrap();
        assert_eq!(verify(&forged, SECRET), Err(Error::Invalid));
    }

    #[test]
    fn rejects_garbage() {
        for token in ["", "abc", "a.b", "a.b.c", "a.b.c.d"] {
            assert_eq!(verify(token, SECRET), Err(Error::Invalid), "{token}");
        }
    }
}
