//! Authentication credential attached to every outgoing request.
//!
//! The credential is owned by the client context and read on every request;
//! nothing in the core mutates it. Token acquisition and rotation live
//! outside this library.

/// The scheme prefix of the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenScheme {
    /// A bot token (`Bot <token>`).
    Bot,
    /// An OAuth2 bearer token (`Bearer <token>`).
    Bearer,
}

impl TokenScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenScheme::Bot => "Bot",
            TokenScheme::Bearer => "Bearer",
        }
    }
}

/// A (scheme, token) pair rendered into the `Authorization` header.
#[derive(Clone)]
pub struct AuthCredential {
    scheme: TokenScheme,
    token: String,
}

impl AuthCredential {
    pub fn new(scheme: TokenScheme, token: impl Into<String>) -> Self {
        Self {
            scheme,
            token: token.into(),
        }
    }

    /// Shorthand for the common bot-token case.
    pub fn bot(token: impl Into<String>) -> Self {
        Self::new(TokenScheme::Bot, token)
    }

    pub fn scheme(&self) -> TokenScheme {
        self.scheme
    }

    /// The full `Authorization` header value.
    pub fn header_value(&self) -> String {
        format!("{} {}", self.scheme.as_str(), self.token)
    }
}

impl std::fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthCredential")
            .field("scheme", &self.scheme)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_value_formats_scheme_and_token() {
        let auth = AuthCredential::bot("abc123");
        assert_eq!(auth.header_value(), "Bot abc123");

        let bearer = AuthCredential::new(TokenScheme::Bearer, "xyz");
        assert_eq!(bearer.header_value(), "Bearer xyz");
    }

    #[test]
    fn debug_redacts_token() {
        let auth = AuthCredential::bot("super-secret");
        let debug = format!("{auth:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }
}
