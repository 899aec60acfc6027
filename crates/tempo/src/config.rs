//! Flag-aware configuration resolution.
//!
//! `tempo-config` owns the TOML profiles and the credential chain; this
//! module layers CLI flags and environment variables on top and produces
//! the `ClientConfig` handed to `Session::connect`.

use std::time::Duration;

use secrecy::SecretString;

use tempo_config::{Config, Profile};
use tempo_core::{AuthCredentials, ClientConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build the `ClientConfig` for this invocation.
///
/// A matching profile is resolved with flag overrides; without one, the
/// flags and environment alone must carry a server URL and a token.
pub fn resolve_client_config(global: &GlobalOpts) -> Result<ClientConfig, CliError> {
    let cfg = tempo_config::load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, global);
    }

    let url = server_url(global, None)?;

    let Some(ref token) = global.token else {
        return Err(CliError::NoCredentials {
            profile: profile_name,
        });
    };

    Ok(ClientConfig {
        url,
        auth: AuthCredentials::Token(SecretString::from(token.clone())),
        organization: global.organization.clone(),
        timeout: timeout(global, None),
        accept_invalid_certs: global.insecure,
    })
}

/// Timeout resolution: flag, then profile, then the default.
fn timeout(global: &GlobalOpts, profile_timeout: Option<u64>) -> Duration {
    Duration::from_secs(
        global
            .timeout
            .or(profile_timeout)
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    )
}

/// Translate a `Profile` + global flags into a `ClientConfig`.
///
/// Flags win over profile fields; the profile wins over defaults.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<ClientConfig, CliError> {
    let url = server_url(global, Some(&profile.server))?;

    let auth = match global.token {
        Some(ref token) => AuthCredentials::Token(SecretString::from(token.clone())),
        None => tempo_config::resolve_auth(profile, profile_name)?,
    };

    let organization = global
        .organization
        .clone()
        .or_else(|| profile.organization.clone());

    Ok(ClientConfig {
        url,
        auth,
        organization,
        timeout: timeout(global, profile.timeout),
        accept_invalid_certs: global.insecure || profile.insecure.unwrap_or(false),
    })
}

/// Build a credential-less `ClientConfig` for `auth login` / `register`,
/// where the password is prompted rather than resolved from the chain.
pub fn resolve_login_config(
    global: &GlobalOpts,
    email: String,
    password: SecretString,
) -> Result<ClientConfig, CliError> {
    let cfg = tempo_config::load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);
    let profile = cfg.profiles.get(&profile_name);

    let url = server_url(global, profile.map(|p| p.server.as_str()))?;

    Ok(ClientConfig {
        url,
        auth: AuthCredentials::Credentials { email, password },
        organization: global
            .organization
            .clone()
            .or_else(|| profile.and_then(|p| p.organization.clone())),
        timeout: timeout(global, profile.and_then(|p| p.timeout)),
        accept_invalid_certs: global.insecure
            || profile.is_some_and(|p| p.insecure.unwrap_or(false)),
    })
}

/// Server URL from flag, falling back to the profile.
fn server_url(global: &GlobalOpts, profile_server: Option<&str>) -> Result<url::Url, CliError> {
    let url_str = match (global.server.as_deref(), profile_server) {
        (Some(flag), _) => flag,
        (None, Some(server)) if !server.is_empty() => server,
        _ => {
            return Err(CliError::NoConfig {
                path: tempo_config::config_path().display().to_string(),
            });
        }
    };

    url_str.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {url_str}"),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::{ColorMode, OutputFormat};

    fn flags() -> GlobalOpts {
        GlobalOpts {
            profile: None,
            server: None,
            organization: None,
            token: Some("tok".into()),
            output: OutputFormat::Table,
            color: ColorMode::Auto,
            verbose: 0,
            quiet: false,
            yes: false,
            insecure: false,
            timeout: None,
        }
    }

    fn profile_with_timeout(secs: Option<u64>) -> Profile {
        Profile {
            server: "https://tempo.example.com".into(),
            timeout: secs,
            ..Profile::default()
        }
    }

    #[test]
    fn profile_timeout_below_default_is_honored() {
        let cfg = resolve_profile(&profile_with_timeout(Some(5)), "work", &flags()).unwrap();
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn timeout_flag_wins_over_profile() {
        let mut global = flags();
        global.timeout = Some(10);
        let cfg = resolve_profile(&profile_with_timeout(Some(60)), "work", &global).unwrap();
        assert_eq!(cfg.timeout, Duration::from_secs(10));
    }

    #[test]
    fn timeout_falls_back_to_default() {
        let cfg = resolve_profile(&profile_with_timeout(None), "work", &flags()).unwrap();
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }
}
