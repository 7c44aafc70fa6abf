//! Per-route `before_enter` hooks.
//!
//! A guard runs while a path is being resolved, after the matching view entry is
//! found and before the view is returned. It either lets navigation proceed or
//! sends it elsewhere. Guards are UX only; access control belongs to the API.

use super::{RouteTarget, LOGIN_ROUTE};
use std::{fmt, sync::Arc};

/// What a guard sees about the navigation in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationContext<'a> {
    pub to: &'a str,
    pub name: Option<&'a str>,
    pub from: Option<&'a str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(RouteTarget),
}

pub trait Guard: Send + Sync {
    fn before_enter(&self, context: &NavigationContext<'_>) -> Navigation;
}

impl<F> Guard for F
where
    F: Fn(&NavigationContext<'_>) -> Navigation + Send + Sync,
{
    fn before_enter(&self, context: &NavigationContext<'_>) -> Navigation {
        self(context)
    }
}

/// Sends unauthenticated navigation to the login route.
#[derive(Clone)]
pub struct RequireAuth {
    is_authenticated: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl RequireAuth {
    pub fn new(is_authenticated: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self {
            is_authenticated: Arc::new(is_authenticated),
        }
    }
}

impl Guard for RequireAuth {
    fn before_enter(&self, _context: &NavigationContext<'_>) -> Navigation {
        if (self.is_authenticated)() {
            Navigation::Proceed
        } else {
            Navigation::Redirect(RouteTarget::name(LOGIN_ROUTE))
        }
    }
}

impl fmt::Debug for RequireAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequireAuth").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    const CONTEXT: NavigationContext<'static> = NavigationContext {
        to: "/dashboard",
        name: Some("dashboard"),
        from: None,
    };

    #[test]
    fn require_auth_redirects_to_login_when_signed_out() {
        let guard = RequireAuth::new(|| false);
        assert_eq!(
            guard.before_enter(&CONTEXT),
            Navigation::Redirect(RouteTarget::name("login"))
        );
    }

    #[test]
    fn require_auth_proceeds_when_signed_in() {
        let guard = RequireAuth::new(|| true);
        assert_eq!(guard.before_enter(&CONTEXT), Navigation::Proceed);
    }

    #[test]
    fn require_auth_reads_predicate_on_every_navigation() {
        let signed_in = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&signed_in);
        let guard = RequireAuth::new(move || flag.load(Ordering::SeqCst));

        assert!(matches!(guard.before_enter(&CONTEXT), Navigation::Redirect(_)));
        signed_in.store(true, Ordering::SeqCst);
        assert_eq!(guard.before_enter(&CONTEXT), Navigation::Proceed);
    }

    fn register_only(context: &NavigationContext<'_>) -> Navigation {
        if context.from == Some("/register") {
            Navigation::Proceed
        } else {
            Navigation::Redirect(RouteTarget::path("/register"))
        }
    }

    #[test]
    fn functions_are_guards() {
        assert_eq!(
            register_only.before_enter(&CONTEXT),
            Navigation::Redirect(RouteTarget::path("/register"))
        );
    }
}
