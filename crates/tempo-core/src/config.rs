// ── Runtime connection configuration ──
//
// These types describe *how* to reach a Tempo server. They carry
// credential data and connection tuning, but never touch disk. The CLI
// constructs a `ClientConfig` and hands it in.

use secrecy::SecretString;
use url::Url;

/// How to authenticate with a server.
#[derive(Debug, Clone)]
pub enum AuthCredentials {
    /// Personal access token (preferred for scripting).
    Token(SecretString),
    /// Email and password, exchanged for a session cookie.
    Credentials {
        email: String,
        password: SecretString,
    },
}

/// Configuration for connecting to a single server.
///
/// Built by the CLI, passed to `Session` -- core never reads config
/// files.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server URL (e.g., `https://tempo.example.com`).
    pub url: Url,
    /// Authentication method and credentials.
    pub auth: AuthCredentials,
    /// Organization to operate in; `None` falls back to the account's
    /// current organization.
    pub organization: Option<String>,
    /// Request timeout.
    pub timeout: std::time::Duration,
    /// Accept self-signed certificates (self-hosted setups).
    pub accept_invalid_certs: bool,
}
