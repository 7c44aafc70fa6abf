use crate::{
    auth::{AuthClient, RegisterRequest},
    cli::globals::GlobalArgs,
};
use anyhow::Result;
use secrecy::SecretString;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub username: String,
    pub email: String,
    pub password: SecretString,
}

/// Register an account and print whatever the service returned.
/// # Errors
/// Returns an error if the config is invalid or the register call fails.
pub async fn execute(args: Args) -> Result<()> {
    let client = AuthClient::new(args.globals.client_config()?)?;

    let request = RegisterRequest {
        username: args.username,
        email: args.email,
        password: args.password,
    };
    let response = client.register(&request).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
