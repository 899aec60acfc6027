//! Config subcommand handlers.

use std::collections::HashMap;

use dialoguer::{Input, Select};

use tempo_config::{self as cfg, Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::active_profile_name;
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = cfg::config_path();
            eprintln!("tempo — configuration wizard");
            eprintln!("Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            let server: String = Input::new()
                .with_prompt("Server URL")
                .default("https://tempo.example.com".into())
                .interact_text()
                .map_err(prompt_err)?;

            let auth_choices = &["Access token (recommended)", "Email/Password"];
            let auth_selection = Select::new()
                .with_prompt("Authentication method")
                .items(auth_choices)
                .default(0)
                .interact()
                .map_err(prompt_err)?;

            let (auth_mode, token, email, password) = if auth_selection == 0 {
                let token = rpassword::prompt_password("Access token: ").map_err(prompt_err)?;
                if token.is_empty() {
                    return Err(CliError::Validation {
                        field: "token".into(),
                        reason: "token cannot be empty".into(),
                    });
                }

                let store_choices = &[
                    "Store in system keyring (recommended)",
                    "Save to config file (plaintext)",
                ];
                let store_selection = Select::new()
                    .with_prompt("Where to store the token?")
                    .items(store_choices)
                    .default(0)
                    .interact()
                    .map_err(prompt_err)?;

                let token_field = if store_selection == 0 {
                    cfg::store_token(&profile_name, &token)?;
                    eprintln!("✓ Token stored in system keyring");
                    None
                } else {
                    Some(token)
                };

                ("token".to_string(), token_field, None, None)
            } else {
                let email: String = Input::new()
                    .with_prompt("Email")
                    .interact_text()
                    .map_err(prompt_err)?;
                let pass = rpassword::prompt_password("Password: ").map_err(prompt_err)?;

                if email.is_empty() || pass.is_empty() {
                    return Err(CliError::Validation {
                        field: "credentials".into(),
                        reason: "email and password cannot be empty".into(),
                    });
                }

                ("password".to_string(), None, Some(email), Some(pass))
            };

            let profile = Profile {
                server,
                organization: None,
                auth_mode,
                token,
                token_env: None,
                email,
                password,
                insecure: None,
                timeout: None,
            };

            let mut profiles = HashMap::new();
            profiles.insert(profile_name.clone(), profile);

            let config = Config {
                default_profile: Some(profile_name.clone()),
                defaults: Default::default(),
                profiles,
            };

            cfg::save_config(&config)?;

            eprintln!("\n✓ Configuration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: tempo auth whoami");
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", cfg::config_path().display());
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let mut config = cfg::load_config_or_default();
            // Never print stored secrets
            for profile in config.profiles.values_mut() {
                if profile.token.is_some() {
                    profile.token = Some("(redacted)".into());
                }
                if profile.password.is_some() {
                    profile.password = Some("(redacted)".into());
                }
            }
            let out = output::render_single(
                &global.output,
                &config,
                |c| format!("{c:#?}"),
                |_| "config".into(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let config = cfg::load_config_or_default();
            let default = config.default_profile.as_deref().unwrap_or("default");
            if config.profiles.is_empty() {
                eprintln!("No profiles configured. Run: tempo config init");
            } else {
                for name in config.profiles.keys() {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut config = cfg::load_config_or_default();

            if !config.profiles.contains_key(&name) {
                let available: Vec<_> = config.profiles.keys().cloned().collect();
                return Err(CliError::ProfileNotFound {
                    name,
                    available: if available.is_empty() {
                        "(none)".into()
                    } else {
                        available.join(", ")
                    },
                });
            }

            config.default_profile = Some(name.clone());
            cfg::save_config(&config)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }

        // ── SetToken ────────────────────────────────────────────────
        ConfigCommand::SetToken { profile } => {
            let config = cfg::load_config_or_default();
            let profile_name = profile.unwrap_or_else(|| active_profile_name(global, &config));

            let token = rpassword::prompt_password("Access token: ").map_err(prompt_err)?;
            if token.is_empty() {
                return Err(CliError::Validation {
                    field: "token".into(),
                    reason: "token cannot be empty".into(),
                });
            }

            cfg::store_token(&profile_name, &token)?;
            eprintln!("✓ Token stored in system keyring for profile '{profile_name}'");
            Ok(())
        }
    }
}
