//! # author-notes (web shell routing and auth client)
//!
//! Client-side pieces of the author-notes single-page application, expressed as a
//! library plus a small command-line shell.
//!
//! ## Route Table
//!
//! A declarative table maps URL paths to named views:
//!
//! - `/` redirects to `/login`
//! - `/login` renders the login view
//! - `/register` renders the register view
//!
//! Entries may carry a `before_enter` guard that runs during resolution and can
//! redirect (for example to the `login` route) before the view is returned.
//!
//! ## Auth Client
//!
//! Two calls against the remote authentication service, `POST {base}/login` and
//! `POST {base}/register`, with JSON bodies. Failures are logged where they happen and
//! returned to the caller unchanged; nothing is retried or persisted. The base URL is
//! external configuration (`AUTHOR_NOTES_API_BASE_URL`).

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod router;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
