//! Caller context extraction.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use user_admin_sdk::{AuthClaims, CallerContext};

/// Extracts the per-request [`CallerContext`].
///
/// Verified identity claims are read from request extensions, where the
/// upstream authentication layer places them after token verification;
/// this layer never inspects credentials itself. Origin metadata comes
/// from the raw `Origin` and `Referer` headers. Extraction is
/// infallible: a request without claims or headers yields an anonymous
/// context.
pub struct Caller(pub CallerContext);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let mut ctx = match parts.extensions.get::<AuthClaims>() {
            Some(claims) => CallerContext::authenticated(claims.subject.clone(), claims.role.clone()),
            None => CallerContext::anonymous(),
        };

        if let Some(origin) = header_value(parts, header::ORIGIN) {
            ctx = ctx.with_origin(origin);
        }
        if let Some(referer) = header_value(parts, header::REFERER) {
            ctx = ctx.with_referer(referer);
        }

        Ok(Self(ctx))
    }
}

fn header_value(parts: &Parts, name: header::HeaderName) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned)
}
