//! Client wrappers for the auth API endpoints. Each call is independent: the only
//! shared state is the read-only configuration and the pooled HTTP client.

use crate::{
    api::{self, AppError},
    auth::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
    config::ClientConfig,
    APP_USER_AGENT,
};
use reqwest::Client;
use tracing::{error, instrument};

const LOGIN_PATH: &str = "login";
const REGISTER_PATH: &str = "register";

#[derive(Clone, Debug)]
pub struct AuthClient {
    config: ClientConfig,
    http: Client,
}

impl AuthClient {
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, AppError> {
        let http = api::client(APP_USER_AGENT, config.timeout)?;
        Ok(Self { config, http })
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Logs a user in and returns the issued token.
    /// Failures are logged and returned unchanged; the payload is never logged.
    ///
    /// # Errors
    /// Returns `AppError` on transport failure, non-success status, or an
    /// undecodable response.
    #[instrument(skip_all, fields(username = %request.username))]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        api::post_json_response(&self.http, self.config.base_url(), LOGIN_PATH, request)
            .await
            .inspect_err(|err| error!("Login failed: {err}"))
    }

    /// Registers a new user and returns the response body untouched.
    ///
    /// # Errors
    /// Returns `AppError` on transport failure, non-success status, or a body that
    /// is not JSON.
    #[instrument(skip_all, fields(username = %request.username))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, AppError> {
        api::post_json_response(&self.http, self.config.base_url(), REGISTER_PATH, request)
            .await
            .inspect_err(|err| error!("Registration failed: {err}"))
    }
}
