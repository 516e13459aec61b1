//! Request body extraction for form submissions.

use crate::models::RawContact;
use crate::server::response::ApiError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};

/// A contact submitted either as JSON or as a url-encoded form.
///
/// `application/json` bodies go through the JSON decoder; anything else is
/// treated as a form post, which is what a plain HTML form sends.
#[derive(Debug)]
pub struct ContactPayload(pub RawContact);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_start().starts_with("application/json"))
        .unwrap_or(false)
}

#[async_trait]
impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(raw) = Json::<RawContact>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
            Ok(Self(raw))
        } else {
            let Form(raw) = Form::<RawContact>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
            Ok(Self(raw))
        }
    }
}
