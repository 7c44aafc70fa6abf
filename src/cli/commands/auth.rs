//! `login` and `register` subcommands. Passwords may come from the environment so
//! they stay out of shell history; their env values are never shown in `--help`.

use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const CMD_LOGIN: &str = "login";
pub const CMD_REGISTER: &str = "register";

pub const ARG_USERNAME: &str = "username";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";

#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    /// Parse credentials from subcommand matches.
    ///
    /// # Errors
    /// Returns an error if required arguments are missing.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        Ok(Self {
            username: read_required(matches, ARG_USERNAME)?,
            password: SecretString::from(read_required(matches, ARG_PASSWORD)?),
        })
    }
}

/// Read a required argument. Values are passed through untrimmed; the service
/// decides what a valid username or password is.
fn read_required(matches: &ArgMatches, id: &str) -> anyhow::Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| anyhow::anyhow!("missing required argument: --{id}"))
}

/// Parse the email for `register`.
///
/// # Errors
/// Returns an error if `--email` is missing.
pub fn parse_email(matches: &ArgMatches) -> anyhow::Result<String> {
    read_required(matches, ARG_EMAIL)
}

fn username_arg() -> Arg {
    Arg::new(ARG_USERNAME)
        .short('u')
        .long(ARG_USERNAME)
        .help("Account username")
        .env("AUTHOR_NOTES_USERNAME")
        .required(true)
}

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .short('p')
        .long(ARG_PASSWORD)
        .help("Account password")
        .env("AUTHOR_NOTES_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

#[must_use]
pub fn login() -> Command {
    Command::new(CMD_LOGIN)
        .about("Log in and print the issued token")
        .arg(username_arg())
        .arg(password_arg())
}

#[must_use]
pub fn register() -> Command {
    Command::new(CMD_REGISTER)
        .about("Register a new account and print the service response")
        .arg(username_arg())
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long(ARG_EMAIL)
                .help("Account email")
                .env("AUTHOR_NOTES_EMAIL")
                .required(true),
        )
        .arg(password_arg())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn credentials_keep_password_secret() {
        let matches = login().get_matches_from(vec![
            CMD_LOGIN,
            "--username",
            "writer",
            "--password",
            "hunter2",
        ]);
        let credentials = Credentials::parse(&matches).unwrap();
        assert_eq!(credentials.username, "writer");
        assert_eq!(credentials.password.expose_secret(), "hunter2");
        assert!(!format!("{credentials:?}").contains("hunter2"));
    }
}
