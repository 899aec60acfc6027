// ── Auth endpoints ──

use secrecy::ExposeSecret;
use serde::Serialize;

use crate::Error;
use crate::client::ApiClient;
use crate::types::{UserDto, UserEnvelope};

impl ApiClient {
    /// Establish a session with email + password. The session cookie
    /// lands in the client's cookie jar.
    pub async fn login(
        &self,
        email: &str,
        password: &secrecy::SecretString,
    ) -> Result<UserDto, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
        }

        let env: UserEnvelope = self
            .post(
                "auth/login",
                &Body {
                    email,
                    password: password.expose_secret(),
                },
            )
            .await
            .map_err(|e| match e {
                Error::Api { message, .. } | Error::Authentication { message } => {
                    Error::Authentication { message }
                }
                Error::SessionExpired => Error::Authentication {
                    message: "invalid email or password".into(),
                },
                other => other,
            })?;
        Ok(env.user)
    }

    /// Register a new account.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &secrecy::SecretString,
    ) -> Result<UserDto, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            name: &'a str,
            email: &'a str,
            password: &'a str,
        }

        let env: UserEnvelope = self
            .post(
                "auth/register",
                &Body {
                    name,
                    email,
                    password: password.expose_secret(),
                },
            )
            .await?;
        Ok(env.user)
    }

    /// Fetch the authenticated user.
    pub async fn me(&self) -> Result<UserDto, Error> {
        let env: UserEnvelope = self.get("auth/me").await?;
        Ok(env.user)
    }
}
