use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

use crate::errors::ApiError;

/// Bearer credential from the `Authorization` header.
///
/// Only the shape of the header is checked. The token doubles as the owner
/// reference that notes are scoped to.
#[derive(Clone, Debug, PartialEq)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
        let token = value.strip_prefix("Bearer ")?.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers).ok_or(ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_shapes() {
        assert_eq!(
            BearerToken::from_headers(&headers("Bearer abc")),
            Some(BearerToken("abc".to_string()))
        );
        assert_eq!(BearerToken::from_headers(&headers("Bearer ")), None);
        assert_eq!(BearerToken::from_headers(&headers("Bearer    ")), None);
        assert_eq!(BearerToken::from_headers(&headers("Basic abc")), None);
        assert_eq!(BearerToken::from_headers(&headers("bearer abc")), None);
        assert_eq!(BearerToken::from_headers(&HeaderMap::new()), None);
    }
}
