//! Maps validated CLI matches to the action the binary runs.

use crate::cli::actions::{login, navigate, register, Action};
use crate::cli::commands::{auth, ARG_PATH, CMD_NAVIGATE, CMD_ROUTES};
use crate::cli::globals::GlobalArgs;
use anyhow::{anyhow, Context, Result};

/// # Errors
/// Returns an error if the subcommand is unknown or required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let globals = GlobalArgs::from_matches(matches);

    match matches.subcommand() {
        Some((CMD_ROUTES, _)) => Ok(Action::Routes),
        Some((CMD_NAVIGATE, sub_m)) => Ok(Action::Navigate(navigate::Args {
            path: sub_m
                .get_one::<String>(ARG_PATH)
                .cloned()
                .context("missing required argument: <path>")?,
        })),
        Some((auth::CMD_LOGIN, sub_m)) => {
            let credentials = auth::Credentials::parse(sub_m)?;
            Ok(Action::Login(login::Args {
                globals,
                username: credentials.username,
                password: credentials.password,
            }))
        }
        Some((auth::CMD_REGISTER, sub_m)) => {
            let credentials = auth::Credentials::parse(sub_m)?;
            Ok(Action::Register(register::Args {
                globals,
                username: credentials.username,
                email: auth::parse_email(sub_m)?,
                password: credentials.password,
            }))
        }
        Some((other, _)) => Err(anyhow!("unknown subcommand: {other}")),
        None => Err(anyhow!("missing subcommand")),
    }
}
