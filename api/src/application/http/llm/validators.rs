use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AskValidator {
    /// Falls back to the `Authorization: Bearer` header when absent.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub prompt: String,
}

/// Picks the API key from the body first, then from a bearer token.
pub fn resolve_api_key(
    body_key: Option<String>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
) -> Option<String> {
    body_key
        .filter(|key| !key.is_empty())
        .or_else(|| bearer.map(|TypedHeader(auth)| auth.token().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bearer(token: &str) -> Option<TypedHeader<Authorization<Bearer>>> {
        Authorization::bearer(token).ok().map(TypedHeader)
    }

    #[test]
    fn test_body_key_wins_over_header() {
        assert_eq!(
            resolve_api_key(Some("body".to_string()), bearer("header")),
            Some("body".to_string())
        );
    }

    #[test]
    fn test_empty_body_key_uses_header() {
        assert_eq!(
            resolve_api_key(Some(String::new()), bearer("header")),
            Some("header".to_string())
        );
        assert_eq!(resolve_api_key(None, None), None);
    }
}
