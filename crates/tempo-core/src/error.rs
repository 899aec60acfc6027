// ── Core error types ──
//
// User-facing errors from tempo-core. Consumers never see raw HTTP
// status codes or JSON parse failures directly; the
// `From<tempo_api::Error>` impl translates transport-layer errors into
// domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach server: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Session expired -- sign in again")]
    SessionExpired,

    #[error("Request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    #[error("No organization selected")]
    NoOrganization,

    #[error("Not signed in")]
    NotAuthenticated,

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Operation rejected: {message}")]
    Rejected { message: String },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code, when the request reached the server.
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Message suitable for a notice, falling back when the server gave
    /// nothing actionable.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api { message, .. } | Self::Rejected { message } if !message.is_empty() => {
                message.clone()
            }
            Self::SessionExpired | Self::NotAuthenticated | Self::NoOrganization => {
                self.to_string()
            }
            _ => fallback.to_owned(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<tempo_api::Error> for CoreError {
    fn from(err: tempo_api::Error) -> Self {
        match err {
            tempo_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            tempo_api::Error::SessionExpired => CoreError::SessionExpired,
            tempo_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            tempo_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            tempo_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                reason: format!("TLS error: {msg}"),
            },
            tempo_api::Error::Api { message, status } if status == 404 => CoreError::NotFound {
                entity: "resource".into(),
                identifier: message,
            },
            tempo_api::Error::Api { message, status } => CoreError::Api {
                message,
                status: Some(status),
            },
            tempo_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_detail() {
        let err = CoreError::Api {
            message: "Project name already taken".into(),
            status: Some(409),
        };
        assert_eq!(
            err.user_message("Failed to create project"),
            "Project name already taken"
        );
    }

    #[test]
    fn user_message_falls_back_for_internal_errors() {
        let err = CoreError::Internal("oops".into());
        assert_eq!(
            err.user_message("Failed to create project"),
            "Failed to create project"
        );
    }

    #[test]
    fn session_expiry_maps_to_core_variant() {
        let err = CoreError::from(tempo_api::Error::SessionExpired);
        assert!(matches!(err, CoreError::SessionExpired));
    }
}
