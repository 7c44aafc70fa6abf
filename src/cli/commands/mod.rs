pub mod auth;
pub mod logging;

use crate::config::DEFAULT_API_BASE_URL;
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_API_BASE_URL: &str = "api-base-url";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_PATH: &str = "path";

pub const CMD_ROUTES: &str = "routes";
pub const CMD_NAVIGATE: &str = "navigate";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("author-notes")
        .about("Author notes web shell: route table and auth client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_BASE_URL)
                .long(ARG_API_BASE_URL)
                .help("Base URL of the auth service, example: https://notes.tld/v1/auth")
                .env("AUTHOR_NOTES_API_BASE_URL")
                .default_value(DEFAULT_API_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long(ARG_TIMEOUT)
                .help("Request timeout in seconds (default: none)")
                .env("AUTHOR_NOTES_TIMEOUT")
                .value_parser(clap::value_parser!(u64).range(1..))
                .global(true),
        )
        .subcommand(Command::new(CMD_ROUTES).about("List the route table"))
        .subcommand(
            Command::new(CMD_NAVIGATE)
                .about("Resolve a path to the view it renders")
                .arg(
                    Arg::new(ARG_PATH)
                        .help("Path to navigate to, example: /register")
                        .required(true),
                ),
        )
        .subcommand(auth::login())
        .subcommand(auth::register());

    logging::with_args(command)
}
