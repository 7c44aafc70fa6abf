use crate::{
    auth::{AuthClient, LoginRequest},
    cli::globals::GlobalArgs,
};
use anyhow::Result;
use secrecy::SecretString;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub username: String,
    pub password: SecretString,
}

/// Log in and print the token response as JSON.
/// # Errors
/// Returns an error if the config is invalid or the login call fails.
pub async fn execute(args: Args) -> Result<()> {
    let client = AuthClient::new(args.globals.client_config()?)?;

    let request = LoginRequest {
        username: args.username,
        password: args.password,
    };
    let response = client.login(&request).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
