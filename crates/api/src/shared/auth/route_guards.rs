use super::Policy;
use crate::error::FlockError;
use actix_web::HttpRequest;
use flock_infra::FlockContext;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Expiration time (as UTC timestamp in seconds)
    pub exp: usize,
    /// Subject (whom the token refers to)
    pub sub: String,
    pub policy: Option<Policy>,
}

/// The client identified by the bearer token
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: String,
}

fn parse_authtoken_header(token_header_value: &str) -> String {
    token_header_value
        .trim_start_matches("Bearer")
        .trim_start_matches("bearer")
        .trim()
        .to_string()
}

fn decode_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let claims = decode::<Claims>(token, &decoding_key, &Validation::new(Algorithm::HS256))?.claims;
    Ok(claims)
}

/// Verifies the `Authorization: Bearer <jwt>` header of the request
pub fn protect_route(
    req: &HttpRequest,
    ctx: &FlockContext,
) -> Result<(AuthUser, Policy), FlockError> {
    let header = req.headers().get("authorization").ok_or_else(|| {
        FlockError::Unauthorized("Unable to find bearer token in authorization header".into())
    })?;
    let token = header
        .to_str()
        .map(parse_authtoken_header)
        .map_err(|_| FlockError::Unauthorized("Malformed authorization header provided".into()))?;

    match decode_token(&token, &ctx.config.jwt_secret) {
        Ok(claims) => Ok((
            AuthUser { id: claims.sub },
            claims.policy.unwrap_or_default(),
        )),
        Err(_) => Err(FlockError::Unauthorized(
            "Invalid or expired bearer token provided".into(),
        )),
    }
}
