use axum::{extract::Request, http::header::AUTHORIZATION, middleware::Next, response::Response};

use crate::errors::JsonApiError;

/// Opaque caller id taken from `Authorization: Bearer <id>`.
///
/// Token verification belongs to the authentication layer in front of this
/// service; the value is trusted as given and only used for logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Caller(pub String);

impl std::fmt::Display for Caller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}

pub fn bearer_caller(header: Option<&str>) -> Option<Caller> {
    header
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| Caller(t.to_string()))
}

/// Middleware: attach [`Caller`] to the request or answer 401.
pub async fn require_caller(mut req: Request, next: Next) -> Result<Response, JsonApiError> {
    let header = req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    let Some(caller) = bearer_caller(header) else {
        tracing::warn!(path = %req.uri().path(), "missing bearer caller identity");
        return Err(JsonApiError::unauthorized("missing Authorization: Bearer <caller>"));
    };
    req.extensions_mut().insert(caller);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bearer_only() {
        assert_eq!(bearer_caller(Some("Bearer 42")), Some(Caller("42".into())));
        assert_eq!(bearer_caller(Some("Basic abc")), None);
        assert_eq!(bearer_caller(Some("Bearer   ")), None);
        assert_eq!(bearer_caller(None), None);
    }
}
