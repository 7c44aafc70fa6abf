//! Declarative route table for the web shell.
//!
//! Paths resolve to one of the named views, following redirect entries and any
//! `before_enter` guards on the way. The table is immutable once built, so a single
//! instance can be shared across tasks without locking.

pub mod guards;
mod table;

pub use self::guards::{Guard, Navigation, NavigationContext, RequireAuth};
pub use self::table::{Resolution, RouteEntry, RouteKind, RouteTable, MAX_REDIRECTS};

use std::fmt;
use thiserror::Error;

/// Route name of the login view; guards redirect here.
pub const LOGIN_ROUTE: &str = "login";
/// Route name of the register view.
pub const REGISTER_ROUTE: &str = "register";

/// Views the shell can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Register,
}

impl View {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Login => LOGIN_ROUTE,
            Self::Register => REGISTER_ROUTE,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a redirect points: a literal path or a route name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    Path(String),
    Name(String),
}

impl RouteTarget {
    #[must_use]
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.write_str(path),
            Self::Name(name) => write!(f, "{{name: {name}}}"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route matches {0}")]
    NotFound(String),
    #[error("no route named {0}")]
    UnknownName(String),
    #[error("too many redirects while resolving {0}")]
    RedirectLoop(String),
    #[error("duplicate route path {0}")]
    DuplicatePath(String),
    #[error("duplicate route name {0}")]
    DuplicateName(String),
    #[error("redirect route {0} cannot have a before_enter guard")]
    GuardedRedirect(String),
}
