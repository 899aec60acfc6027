//! Account command handlers: login, register, whoami, logout.

use dialoguer::Input;
use secrecy::SecretString;

use tempo_core::{NoticeSender, Session, User};

use crate::cli::{AuthArgs, AuthCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

use super::util;

fn detail(user: &User) -> String {
    let mut lines = vec![
        format!("ID:            {}", user.id),
        format!("Name:          {}", user.name),
        format!("Email:         {}", user.email),
    ];
    if let Some(ref org) = user.current_organization_id {
        lines.push(format!("Organization:  {org}"));
    }
    lines.join("\n")
}

pub async fn handle(
    args: AuthArgs,
    notices: NoticeSender,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AuthCommand::Login { email } => {
            let email = match email {
                Some(email) => email,
                None => Input::new()
                    .with_prompt("Email")
                    .interact_text()
                    .map_err(util::prompt_err)?,
            };
            let password = rpassword::prompt_password("Password: ").map_err(util::prompt_err)?;

            let config =
                config::resolve_login_config(global, email, SecretString::from(password))?;
            let mut session = Session::connect(&config, notices)?;
            let user = session.authenticate().await?;

            if !global.quiet {
                eprintln!("Signed in as {}", user.email);
            }
            Ok(())
        }

        AuthCommand::Register { name, email } => {
            let password = rpassword::prompt_password("Password: ").map_err(util::prompt_err)?;
            let repeated =
                rpassword::prompt_password("Repeat password: ").map_err(util::prompt_err)?;
            if password != repeated {
                return Err(CliError::Validation {
                    field: "password".into(),
                    reason: "passwords do not match".into(),
                });
            }

            let password = SecretString::from(password);
            let config = config::resolve_login_config(global, email.clone(), password.clone())?;
            let mut session = Session::connect(&config, notices)?;
            let user = session.register(&name, &email, &password).await?;

            if !global.quiet {
                eprintln!("Account created for {}", user.email);
            }
            Ok(())
        }

        AuthCommand::Whoami => {
            let config = config::resolve_client_config(global)?;
            let mut session = Session::connect(&config, notices)?;
            let user = session.authenticate().await?;

            let out =
                output::render_single(&global.output, user, detail, |u| u.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AuthCommand::Logout => {
            let config = config::resolve_client_config(global)?;
            let mut session = Session::connect(&config, notices)?;
            session.logout();
            Ok(())
        }
    }
}
