use super::{
    guards::{Guard, Navigation, NavigationContext},
    RouteError, RouteTarget, View, LOGIN_ROUTE, REGISTER_ROUTE,
};
use std::{fmt, sync::Arc};
use tracing::debug;

/// Upper bound on redirect hops for a single navigation.
pub const MAX_REDIRECTS: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteKind {
    View(View),
    Redirect(RouteTarget),
}

#[derive(Clone)]
pub struct RouteEntry {
    path: String,
    name: Option<String>,
    kind: RouteKind,
    guard: Option<Arc<dyn Guard>>,
}

impl RouteEntry {
    #[must_use]
    pub fn view(path: &str, name: impl Into<String>, view: View) -> Self {
        Self {
            path: normalize_path(path),
            name: Some(name.into()),
            kind: RouteKind::View(view),
            guard: None,
        }
    }

    #[must_use]
    pub fn redirect(path: &str, target: RouteTarget) -> Self {
        Self {
            path: normalize_path(path),
            name: None,
            kind: RouteKind::Redirect(target),
            guard: None,
        }
    }

    /// Attaches a hook that runs before this entry's view is entered.
    /// A table rejects redirect entries that carry one.
    #[must_use]
    pub fn before_enter(mut self, guard: impl Guard + 'static) -> Self {
        self.guard = Some(Arc::new(guard));
        self
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub const fn kind(&self) -> &RouteKind {
        &self.kind
    }

    fn matches(&self, path: &str) -> bool {
        self.path.eq_ignore_ascii_case(path)
    }

    #[must_use]
    pub const fn is_guarded(&self) -> bool {
        matches!(self.kind, RouteKind::View(_)) && self.guard.is_some()
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("guarded", &self.is_guarded())
            .finish()
    }
}

impl fmt::Display for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RouteKind::View(view) => write!(f, "{} -> {view}", self.path)?,
            RouteKind::Redirect(target) => write!(f, "{} => {target}", self.path)?,
        }
        if self.is_guarded() {
            f.write_str(" (guarded)")?;
        }
        Ok(())
    }
}

/// Outcome of resolving a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub view: View,
    pub path: String,
    pub name: String,
    /// Paths passed through before landing on `path`, in order.
    pub redirected_from: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Builds a table, rejecting duplicate paths or names and guarded redirects.
    /// Paths compare case-insensitively.
    ///
    /// # Errors
    /// Returns `RouteError::DuplicatePath`, `RouteError::DuplicateName` or
    /// `RouteError::GuardedRedirect`.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        for (index, entry) in entries.iter().enumerate() {
            let earlier = &entries[..index];

            if matches!(entry.kind, RouteKind::Redirect(_)) && entry.guard.is_some() {
                return Err(RouteError::GuardedRedirect(entry.path.clone()));
            }

            if earlier.iter().any(|e| e.matches(&entry.path)) {
                return Err(RouteError::DuplicatePath(entry.path.clone()));
            }

            if let Some(name) = entry.name() {
                if earlier.iter().any(|e| e.name() == Some(name)) {
                    return Err(RouteError::DuplicateName(name.to_string()));
                }
            }
        }

        Ok(Self { entries })
    }

    /// The application's routes: `/` redirects to `/login`, plus the login and
    /// register views. Nothing here is guarded.
    #[must_use]
    pub fn app() -> Self {
        Self {
            entries: vec![
                RouteEntry::redirect("/", RouteTarget::path("/login")),
                RouteEntry::view("/login", LOGIN_ROUTE, View::Login),
                RouteEntry::view("/register", REGISTER_ROUTE, View::Register),
            ],
        }
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Path of the route called `name`.
    #[must_use]
    pub fn path_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name() == Some(name))
            .map(RouteEntry::path)
    }

    /// Resolves a path with no previous location.
    ///
    /// # Errors
    /// See [`RouteTable::navigate`].
    pub fn resolve(&self, path: &str) -> Result<Resolution, RouteError> {
        self.navigate(None, path)
    }

    /// Resolves `to`, following redirects and guards, as seen from `from`.
    ///
    /// # Errors
    /// Returns `RouteError::NotFound` when a path has no entry,
    /// `RouteError::UnknownName` when a redirect names a missing route, and
    /// `RouteError::RedirectLoop` after `MAX_REDIRECTS` hops.
    pub fn navigate(&self, from: Option<&str>, to: &str) -> Result<Resolution, RouteError> {
        let requested = normalize_path(to);
        let mut current = requested.clone();
        let mut redirected_from = Vec::new();

        loop {
            let entry = self
                .find(&current)
                .ok_or_else(|| RouteError::NotFound(current.clone()))?;

            let next = match &entry.kind {
                RouteKind::Redirect(target) => self.target_path(target)?,
                RouteKind::View(view) => {
                    let navigation = entry.guard.as_ref().map_or(Navigation::Proceed, |guard| {
                        guard.before_enter(&NavigationContext {
                            to: &current,
                            name: entry.name(),
                            from,
                        })
                    });

                    match navigation {
                        Navigation::Proceed => {
                            return Ok(Resolution {
                                view: *view,
                                name: entry.name().unwrap_or(view.name()).to_string(),
                                path: entry.path.clone(),
                                redirected_from,
                            });
                        }
                        Navigation::Redirect(target) => {
                            debug!("guard on {} redirected to {}", current, target);
                            self.target_path(&target)?
                        }
                    }
                }
            };

            if redirected_from.len() >= MAX_REDIRECTS {
                return Err(RouteError::RedirectLoop(requested));
            }

            redirected_from.push(current);
            current = next;
        }
    }

    fn find(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.matches(path))
    }

    fn target_path(&self, target: &RouteTarget) -> Result<String, RouteError> {
        match target {
            RouteTarget::Path(path) => Ok(normalize_path(path)),
            RouteTarget::Name(name) => self
                .path_for(name)
                .map(str::to_string)
                .ok_or_else(|| RouteError::UnknownName(name.clone())),
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::app()
    }
}

/// Strips query and fragment, ensures a leading slash, and drops a trailing one.
fn normalize_path(path: &str) -> String {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let path = path.trim_end_matches('/');

    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
