pub mod client;
pub mod types;

pub use self::client::AuthClient;
pub use self::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
