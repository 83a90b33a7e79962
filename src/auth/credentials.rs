// src/auth/credentials.rs
use astra::Request;

/// Name of the cookie the browser keeps the signed-in user's API token in.
pub const AUTH_COOKIE: &str = "auth_token";

/// Supplies the bearer token (if any) to attach to outgoing API calls.
/// Having no token is fine: listings can be browsed anonymously.
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

/// A fixed service token from configuration.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        Some(self.0.clone()).filter(|t| !t.is_empty())
    }
}

/// Service credentials from configuration: the token if one is set.
pub fn service_credentials(token: Option<String>) -> Box<dyn CredentialProvider> {
    match token {
        Some(token) => Box::new(StaticToken(token)),
        None => Box::new(NoCredentials),
    }
}

/// The visitor's own token, read from the request's `auth_token` cookie.
/// Falls back to the service credentials.
pub struct CookieToken<'a> {
    token: Option<String>,
    fallback: &'a dyn CredentialProvider,
}

impl<'a> CookieToken<'a> {
    pub fn from_request(req: &Request, fallback: &'a dyn CredentialProvider) -> Self {
        let token = req
            .headers()
            .get_all("Cookie")
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(token_from_cookie_header);

        Self { token, fallback }
    }
}

impl CredentialProvider for CookieToken<'_> {
    fn bearer_token(&self) -> Option<String> {
        self.token.clone().or_else(|| self.fallback.bearer_token())
    }
}

pub fn token_from_cookie_header(header: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == AUTH_COOKIE)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|v| !v.is_empty())
}
